//! Raw → typed conversion.

use crate::raw::{
    RawFunctionType, RawMethod, RawNativeModule, RawParam, RawProperty, RawSchema,
    RawTypeAnnotation,
};
use crate::schema::{
    AliasTable, Method, NativeModule, NumericKind, ObjectProperty, ObjectShape, Param,
    ReservedScalar, Schema, TypeAnnotation,
};
use crate::{Result, SchemaError};

impl TryFrom<RawSchema> for Schema {
    type Error = SchemaError;

    fn try_from(raw: RawSchema) -> Result<Self> {
        let mut schema = Schema::new();
        for (key, group) in raw.modules {
            let Some(native_modules) = group.native_modules else {
                continue;
            };
            let modules = native_modules
                .into_iter()
                .map(|(name, module)| convert_module(name, module))
                .collect::<Result<Vec<_>>>()?;
            schema.groups.insert(key, modules);
        }
        Ok(schema)
    }
}

fn convert_module(name: String, raw: RawNativeModule) -> Result<NativeModule> {
    let aliases = raw
        .aliases
        .into_iter()
        .map(|(alias, ty)| Ok((alias, TypeAnnotation::try_from(ty)?)))
        .collect::<Result<AliasTable>>()?;
    let methods = raw
        .properties
        .into_iter()
        .map(Method::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok(NativeModule::new(name, methods).with_aliases(aliases))
}

impl TryFrom<RawMethod> for Method {
    type Error = SchemaError;

    fn try_from(raw: RawMethod) -> Result<Self> {
        let RawFunctionType {
            type_name,
            params,
            return_type_annotation,
            ..
        } = raw.type_annotation;

        if type_name != "FunctionTypeAnnotation" {
            return Err(SchemaError::NotAFunction {
                method: raw.name,
                tag: type_name,
            });
        }

        let params = params
            .into_iter()
            .map(Param::try_from)
            .collect::<Result<Vec<_>>>()?;
        let return_type = TypeAnnotation::try_from(return_type_annotation)?;
        Ok(Method::new(raw.name, params, return_type))
    }
}

impl TryFrom<RawParam> for Param {
    type Error = SchemaError;

    fn try_from(raw: RawParam) -> Result<Self> {
        Ok(Param {
            name: raw.name,
            nullable: raw.nullable,
            type_annotation: TypeAnnotation::try_from(raw.type_annotation)?,
        })
    }
}

impl TryFrom<RawProperty> for ObjectProperty {
    type Error = SchemaError;

    fn try_from(raw: RawProperty) -> Result<Self> {
        Ok(ObjectProperty {
            name: raw.name,
            optional: raw.optional,
            type_annotation: TypeAnnotation::try_from(raw.type_annotation)?,
        })
    }
}

impl TryFrom<RawTypeAnnotation> for TypeAnnotation {
    type Error = SchemaError;

    fn try_from(raw: RawTypeAnnotation) -> Result<Self> {
        let nullable = raw.nullable;
        let numeric = |kind| TypeAnnotation::Numeric { kind, nullable };

        let ty = match raw.type_name.as_str() {
            "VoidTypeAnnotation" => TypeAnnotation::Void,
            "StringTypeAnnotation" => TypeAnnotation::String { nullable },
            "BooleanTypeAnnotation" => TypeAnnotation::Boolean { nullable },
            "NumberTypeAnnotation" => numeric(NumericKind::Number),
            "DoubleTypeAnnotation" => numeric(NumericKind::Double),
            "FloatTypeAnnotation" => numeric(NumericKind::Float),
            "Int32TypeAnnotation" => numeric(NumericKind::Int32),
            "ReservedFunctionValueTypeAnnotation" => {
                let name = raw.name.unwrap_or_default();
                let scalar = ReservedScalar::from_name(&name)
                    .ok_or(SchemaError::UnknownReservedScalar { name })?;
                TypeAnnotation::Reserved { scalar, nullable }
            }
            "GenericObjectTypeAnnotation" => TypeAnnotation::Object {
                shape: ObjectShape::Generic,
                nullable,
            },
            "ObjectTypeAnnotation" => {
                let properties = raw
                    .properties
                    .unwrap_or_default()
                    .into_iter()
                    .map(ObjectProperty::try_from)
                    .collect::<Result<Vec<_>>>()?;
                TypeAnnotation::Object {
                    shape: ObjectShape::Structural(properties),
                    nullable,
                }
            }
            "ArrayTypeAnnotation" => {
                let element = raw
                    .element_type
                    .map(|element| TypeAnnotation::try_from(*element).map(Box::new))
                    .transpose()?;
                TypeAnnotation::Array { element, nullable }
            }
            "FunctionTypeAnnotation" => TypeAnnotation::Function { nullable },
            "GenericPromiseTypeAnnotation" => TypeAnnotation::Promise { nullable },
            "TypeAliasTypeAnnotation" => {
                let name = raw.name.ok_or(SchemaError::MissingAliasName)?;
                TypeAnnotation::Alias { name }
            }
            _ => {
                return Err(SchemaError::UnsupportedAnnotation { tag: raw.type_name });
            }
        };
        Ok(ty)
    }
}
