use crate::{Method, NativeModule, NumericKind, Param, Schema, TypeAnnotation};

#[test]
fn constants_accessor_detected_by_name() {
    let constants = Method::new("getConstants", vec![], TypeAnnotation::generic_object());
    let other = Method::new("getValue", vec![], TypeAnnotation::generic_object());

    assert!(constants.is_constants_accessor);
    assert!(!other.is_constants_accessor);
}

#[test]
fn nullable_sets_flag() {
    assert!(TypeAnnotation::boolean().nullable().is_nullable());
    assert!(TypeAnnotation::number().nullable().is_nullable());
    assert!(!TypeAnnotation::number().is_nullable());
    assert!(!TypeAnnotation::Void.nullable().is_nullable());
    assert!(!TypeAnnotation::alias("A").nullable().is_nullable());
}

#[test]
fn tags_follow_schema_names() {
    assert_eq!(TypeAnnotation::Void.tag(), "VoidTypeAnnotation");
    assert_eq!(TypeAnnotation::generic_object().tag(), "GenericObjectTypeAnnotation");
    assert_eq!(TypeAnnotation::structural_object(vec![]).tag(), "ObjectTypeAnnotation");
    assert_eq!(TypeAnnotation::promise().tag(), "GenericPromiseTypeAnnotation");
    assert_eq!(TypeAnnotation::alias("A").tag(), "TypeAliasTypeAnnotation");
    assert_eq!(
        TypeAnnotation::Numeric {
            kind: NumericKind::Float,
            nullable: false,
        }
        .tag(),
        "FloatTypeAnnotation"
    );
}

#[test]
fn empty_structural_object() {
    assert!(TypeAnnotation::structural_object(vec![]).is_empty_structural_object());
    assert!(!TypeAnnotation::generic_object().is_empty_structural_object());
}

#[test]
fn modules_flatten_in_declaration_order() {
    let schema = Schema::new()
        .with_group(
            "A",
            vec![NativeModule::new("One", vec![]), NativeModule::new("Two", vec![])],
        )
        .with_group("B", vec![NativeModule::new("Three", vec![])]);

    let names: Vec<_> = schema.modules().map(|m| m.name.as_str()).collect();

    assert_eq!(names, ["One", "Two", "Three"]);
}

#[test]
fn param_nullable_builder() {
    let param = Param::new("x", TypeAnnotation::boolean()).nullable();

    assert!(param.nullable);
    assert!(!param.type_annotation.is_nullable());
}
