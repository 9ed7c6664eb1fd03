//! Typed layer: the closed type-annotation grammar and the module/method model.

use indexmap::IndexMap;

/// Method name that receives constants-accessor treatment.
pub const CONSTANTS_ACCESSOR_NAME: &str = "getConstants";

/// Numeric annotation flavours. All of them share one native representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Number,
    Double,
    Float,
    Int32,
}

impl NumericKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Number => "NumberTypeAnnotation",
            Self::Double => "DoubleTypeAnnotation",
            Self::Float => "FloatTypeAnnotation",
            Self::Int32 => "Int32TypeAnnotation",
        }
    }
}

/// Reserved named scalars. Each is a numeric alias owned by the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReservedScalar {
    RootTag,
}

impl ReservedScalar {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "RootTag" => Some(Self::RootTag),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RootTag => "RootTag",
        }
    }
}

/// Shape of an object annotation.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectShape {
    /// `Object` with no declared members.
    Generic,
    /// Object literal type with named members (possibly none).
    Structural(Vec<ObjectProperty>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectProperty {
    pub name: String,
    pub optional: bool,
    pub type_annotation: TypeAnnotation,
}

/// A type annotation from the closed schema grammar.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Void,
    String {
        nullable: bool,
    },
    Boolean {
        nullable: bool,
    },
    Numeric {
        kind: NumericKind,
        nullable: bool,
    },
    Reserved {
        scalar: ReservedScalar,
        nullable: bool,
    },
    Object {
        shape: ObjectShape,
        nullable: bool,
    },
    Array {
        element: Option<Box<TypeAnnotation>>,
        nullable: bool,
    },
    /// Callback argument.
    Function {
        nullable: bool,
    },
    Promise {
        nullable: bool,
    },
    /// Reference into the owning module's alias table.
    Alias {
        name: String,
    },
}

impl TypeAnnotation {
    pub fn string() -> Self {
        Self::String { nullable: false }
    }

    pub fn boolean() -> Self {
        Self::Boolean { nullable: false }
    }

    pub fn number() -> Self {
        Self::Numeric {
            kind: NumericKind::Number,
            nullable: false,
        }
    }

    pub fn generic_object() -> Self {
        Self::Object {
            shape: ObjectShape::Generic,
            nullable: false,
        }
    }

    pub fn structural_object(properties: Vec<ObjectProperty>) -> Self {
        Self::Object {
            shape: ObjectShape::Structural(properties),
            nullable: false,
        }
    }

    pub fn array_of(element: TypeAnnotation) -> Self {
        Self::Array {
            element: Some(Box::new(element)),
            nullable: false,
        }
    }

    pub fn callback() -> Self {
        Self::Function { nullable: false }
    }

    pub fn promise() -> Self {
        Self::Promise { nullable: false }
    }

    pub fn root_tag() -> Self {
        Self::Reserved {
            scalar: ReservedScalar::RootTag,
            nullable: false,
        }
    }

    pub fn alias(name: impl Into<String>) -> Self {
        Self::Alias { name: name.into() }
    }

    /// Same annotation with the nullable flag set. Void and aliases are unchanged.
    pub fn nullable(mut self) -> Self {
        match &mut self {
            Self::Void | Self::Alias { .. } => {}
            Self::String { nullable }
            | Self::Boolean { nullable }
            | Self::Numeric { nullable, .. }
            | Self::Reserved { nullable, .. }
            | Self::Object { nullable, .. }
            | Self::Array { nullable, .. }
            | Self::Function { nullable }
            | Self::Promise { nullable } => *nullable = true,
        }
        self
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Void | Self::Alias { .. } => false,
            Self::String { nullable }
            | Self::Boolean { nullable }
            | Self::Numeric { nullable, .. }
            | Self::Reserved { nullable, .. }
            | Self::Object { nullable, .. }
            | Self::Array { nullable, .. }
            | Self::Function { nullable }
            | Self::Promise { nullable } => *nullable,
        }
    }

    /// Schema tag this annotation was read from.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Void => "VoidTypeAnnotation",
            Self::String { .. } => "StringTypeAnnotation",
            Self::Boolean { .. } => "BooleanTypeAnnotation",
            Self::Numeric { kind, .. } => kind.tag(),
            Self::Reserved { .. } => "ReservedFunctionValueTypeAnnotation",
            Self::Object {
                shape: ObjectShape::Generic,
                ..
            } => "GenericObjectTypeAnnotation",
            Self::Object { .. } => "ObjectTypeAnnotation",
            Self::Array { .. } => "ArrayTypeAnnotation",
            Self::Function { .. } => "FunctionTypeAnnotation",
            Self::Promise { .. } => "GenericPromiseTypeAnnotation",
            Self::Alias { .. } => "TypeAliasTypeAnnotation",
        }
    }

    pub fn is_promise(&self) -> bool {
        matches!(self, Self::Promise { .. })
    }

    /// Structural object with zero declared members.
    pub fn is_empty_structural_object(&self) -> bool {
        matches!(
            self,
            Self::Object {
                shape: ObjectShape::Structural(properties),
                ..
            } if properties.is_empty()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: String,
    pub nullable: bool,
    pub type_annotation: TypeAnnotation,
}

impl Param {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            type_annotation,
        }
    }

    /// Parameter marked nullable at the parameter level.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: TypeAnnotation,
    /// Return descriptor is forced to a map and an empty structural return
    /// suppresses emission.
    pub is_constants_accessor: bool,
}

impl Method {
    pub fn new(name: impl Into<String>, params: Vec<Param>, return_type: TypeAnnotation) -> Self {
        let name = name.into();
        let is_constants_accessor = name == CONSTANTS_ACCESSOR_NAME;
        Self {
            name,
            params,
            return_type,
            is_constants_accessor,
        }
    }

    pub fn returns_promise(&self) -> bool {
        self.return_type.is_promise()
    }
}

/// Per-module alias name → concrete annotation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AliasTable(IndexMap<String, TypeAnnotation>);

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, annotation: TypeAnnotation) {
        self.0.insert(name.into(), annotation);
    }

    pub fn get(&self, name: &str) -> Option<&TypeAnnotation> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeAnnotation)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, TypeAnnotation)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (String, TypeAnnotation)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NativeModule {
    pub name: String,
    pub methods: Vec<Method>,
    pub aliases: AliasTable,
}

impl NativeModule {
    pub fn new(name: impl Into<String>, methods: Vec<Method>) -> Self {
        Self {
            name: name.into(),
            methods,
            aliases: AliasTable::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Grouping key (usually one spec file) → modules declared under it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    pub groups: IndexMap<String, Vec<NativeModule>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, key: impl Into<String>, modules: Vec<NativeModule>) -> Self {
        self.groups.insert(key.into(), modules);
        self
    }

    /// All modules across all groups, in declaration order. Names may repeat.
    pub fn modules(&self) -> impl Iterator<Item = &NativeModule> {
        self.groups.values().flatten()
    }
}
