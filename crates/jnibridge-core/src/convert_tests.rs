use indoc::indoc;

use crate::{
    NumericKind, ObjectShape, ReservedScalar, SchemaError, TypeAnnotation, parse_raw_schema,
    parse_schema,
};

const SAMPLE: &str = indoc! {r#"
    {
      "modules": {
        "NativeSampleTurboModule": {
          "nativeModules": {
            "SampleTurboModule": {
              "aliases": {
                "Options": {
                  "type": "ObjectTypeAnnotation",
                  "properties": [
                    {
                      "name": "verbose",
                      "optional": true,
                      "typeAnnotation": { "type": "BooleanTypeAnnotation" }
                    }
                  ]
                }
              },
              "properties": [
                {
                  "name": "getConstants",
                  "typeAnnotation": {
                    "type": "FunctionTypeAnnotation",
                    "params": [],
                    "returnTypeAnnotation": {
                      "type": "ObjectTypeAnnotation",
                      "nullable": false,
                      "properties": []
                    },
                    "optional": false
                  }
                },
                {
                  "name": "getRootTag",
                  "typeAnnotation": {
                    "type": "FunctionTypeAnnotation",
                    "params": [
                      {
                        "name": "tag",
                        "nullable": false,
                        "typeAnnotation": {
                          "type": "ReservedFunctionValueTypeAnnotation",
                          "name": "RootTag"
                        }
                      },
                      {
                        "name": "options",
                        "nullable": true,
                        "typeAnnotation": { "type": "TypeAliasTypeAnnotation", "name": "Options" }
                      }
                    ],
                    "returnTypeAnnotation": { "type": "Int32TypeAnnotation", "nullable": true }
                  }
                }
              ]
            }
          }
        },
        "ComponentOnly": {
          "components": {}
        }
      }
    }
"#};

#[test]
fn parses_sample_schema() {
    let schema = parse_schema(SAMPLE).unwrap();

    assert_eq!(schema.groups.len(), 1);
    let modules = &schema.groups["NativeSampleTurboModule"];
    assert_eq!(modules.len(), 1);

    let module = &modules[0];
    assert_eq!(module.name, "SampleTurboModule");
    assert_eq!(module.methods.len(), 2);
    assert_eq!(module.aliases.len(), 1);
}

#[test]
fn getconstants_flagged_as_constants_accessor() {
    let schema = parse_schema(SAMPLE).unwrap();
    let methods = &schema.groups["NativeSampleTurboModule"][0].methods;

    assert!(methods[0].is_constants_accessor);
    assert!(methods[0].return_type.is_empty_structural_object());
    assert!(!methods[1].is_constants_accessor);
}

#[test]
fn params_keep_nullability_and_order() {
    let schema = parse_schema(SAMPLE).unwrap();
    let method = &schema.groups["NativeSampleTurboModule"][0].methods[1];

    assert_eq!(method.params[0].name, "tag");
    assert!(!method.params[0].nullable);
    assert_eq!(
        method.params[0].type_annotation,
        TypeAnnotation::Reserved {
            scalar: ReservedScalar::RootTag,
            nullable: false,
        }
    );
    assert_eq!(method.params[1].name, "options");
    assert!(method.params[1].nullable);
    assert_eq!(
        method.params[1].type_annotation,
        TypeAnnotation::alias("Options")
    );
    assert_eq!(
        method.return_type,
        TypeAnnotation::Numeric {
            kind: NumericKind::Int32,
            nullable: true,
        }
    );
}

#[test]
fn aliases_resolve_to_structural_objects() {
    let schema = parse_schema(SAMPLE).unwrap();
    let aliases = &schema.groups["NativeSampleTurboModule"][0].aliases;

    let Some(TypeAnnotation::Object {
        shape: ObjectShape::Structural(properties),
        nullable: false,
    }) = aliases.get("Options")
    else {
        panic!("expected structural object alias");
    };
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "verbose");
    assert!(properties[0].optional);
}

#[test]
fn unknown_tag_is_rejected_with_tag() {
    let json = indoc! {r#"
        { "modules": { "G": { "nativeModules": { "M": { "properties": [
          { "name": "f", "typeAnnotation": {
              "type": "FunctionTypeAnnotation",
              "params": [ { "name": "x", "typeAnnotation": { "type": "BigIntTypeAnnotation" } } ],
              "returnTypeAnnotation": { "type": "VoidTypeAnnotation" }
          } }
        ] } } } } }
    "#};

    let err = parse_schema(json).unwrap_err();

    assert!(
        matches!(&err, SchemaError::UnsupportedAnnotation { tag } if tag == "BigIntTypeAnnotation")
    );
    assert_eq!(
        err.to_string(),
        "unsupported type annotation: BigIntTypeAnnotation"
    );
}

#[test]
fn unknown_reserved_scalar_is_rejected() {
    let json = r#"{ "modules": { "G": { "nativeModules": { "M": { "properties": [
        { "name": "f", "typeAnnotation": {
            "type": "FunctionTypeAnnotation",
            "params": [],
            "returnTypeAnnotation": { "type": "ReservedFunctionValueTypeAnnotation", "name": "Tag" }
        } }
    ] } } } } }"#;

    let err = parse_schema(json).unwrap_err();

    assert!(matches!(err, SchemaError::UnknownReservedScalar { name } if name == "Tag"));
}

#[test]
fn method_must_be_function_typed() {
    let json = r#"{ "modules": { "G": { "nativeModules": { "M": { "properties": [
        { "name": "f", "typeAnnotation": {
            "type": "ObjectTypeAnnotation",
            "returnTypeAnnotation": { "type": "VoidTypeAnnotation" }
        } }
    ] } } } } }"#;

    let err = parse_schema(json).unwrap_err();

    assert!(matches!(err, SchemaError::NotAFunction { method, .. } if method == "f"));
}

#[test]
fn alias_reference_requires_name() {
    let json = r#"{ "modules": { "G": { "nativeModules": { "M": { "properties": [
        { "name": "f", "typeAnnotation": {
            "type": "FunctionTypeAnnotation",
            "returnTypeAnnotation": { "type": "TypeAliasTypeAnnotation" }
        } }
    ] } } } } }"#;

    let err = parse_schema(json).unwrap_err();

    assert!(matches!(err, SchemaError::MissingAliasName));
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = parse_schema("{ \"modules\": ").unwrap_err();

    assert!(matches!(err, SchemaError::Json(_)));
}

#[test]
fn raw_layer_keeps_unknown_tags() {
    let json = r#"{ "modules": { "G": { "nativeModules": { "M": { "properties": [
        { "name": "f", "typeAnnotation": {
            "type": "FunctionTypeAnnotation",
            "returnTypeAnnotation": { "type": "MixedTypeAnnotation" }
        } }
    ] } } } } }"#;

    let raw = parse_raw_schema(json).unwrap();
    let module = &raw.modules["G"].native_modules.as_ref().unwrap()["M"];

    assert_eq!(
        module.properties[0]
            .type_annotation
            .return_type_annotation
            .type_name,
        "MixedTypeAnnotation"
    );
}

#[test]
fn optional_flags_on_methods_are_ignored() {
    let json = r#"{ "modules": { "G": { "nativeModules": { "M": { "properties": [
        { "name": "f", "optional": true, "typeAnnotation": {
            "type": "FunctionTypeAnnotation",
            "optional": true,
            "params": [],
            "returnTypeAnnotation": { "type": "VoidTypeAnnotation" }
        } }
    ] } } } } }"#;

    let schema = parse_schema(json).unwrap();
    let module = &schema.groups["G"][0];

    assert_eq!(module.methods.len(), 1);
    assert_eq!(module.methods[0].name, "f");
    assert_eq!(module.methods[0].return_type, TypeAnnotation::Void);
}
