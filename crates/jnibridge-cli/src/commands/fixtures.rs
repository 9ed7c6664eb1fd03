use indoc::indoc;

pub const CALC_SCHEMA: &str = indoc! {r#"
    {
      "modules": {
        "NativeCalc": {
          "nativeModules": {
            "Calc": {
              "aliases": {},
              "properties": [
                {
                  "name": "getConstants",
                  "typeAnnotation": {
                    "type": "FunctionTypeAnnotation",
                    "params": [],
                    "returnTypeAnnotation": { "type": "ObjectTypeAnnotation", "properties": [] }
                  }
                },
                {
                  "name": "add",
                  "typeAnnotation": {
                    "type": "FunctionTypeAnnotation",
                    "params": [
                      { "name": "a", "typeAnnotation": { "type": "NumberTypeAnnotation" } },
                      { "name": "b", "typeAnnotation": { "type": "NumberTypeAnnotation" } }
                    ],
                    "returnTypeAnnotation": { "type": "NumberTypeAnnotation" }
                  }
                },
                {
                  "name": "fetch",
                  "typeAnnotation": {
                    "type": "FunctionTypeAnnotation",
                    "params": [
                      { "name": "url", "typeAnnotation": { "type": "StringTypeAnnotation" } }
                    ],
                    "returnTypeAnnotation": { "type": "GenericPromiseTypeAnnotation" }
                  }
                },
                {
                  "name": "onEvent",
                  "typeAnnotation": {
                    "type": "FunctionTypeAnnotation",
                    "params": [
                      { "name": "cb", "typeAnnotation": { "type": "FunctionTypeAnnotation" } }
                    ],
                    "returnTypeAnnotation": { "type": "VoidTypeAnnotation" }
                  }
                }
              ]
            }
          }
        }
      }
    }
"#};

pub const BROKEN_SCHEMA: &str = indoc! {r#"
    {
      "modules": {
        "NativeBroken": {
          "nativeModules": {
            "Broken": {
              "properties": [
                {
                  "name": "bad",
                  "typeAnnotation": {
                    "type": "FunctionTypeAnnotation",
                    "params": [
                      {
                        "name": "opts",
                        "nullable": true,
                        "typeAnnotation": { "type": "GenericObjectTypeAnnotation" }
                      }
                    ],
                    "returnTypeAnnotation": { "type": "VoidTypeAnnotation" }
                  }
                }
              ]
            }
          }
        }
      }
    }
"#};
