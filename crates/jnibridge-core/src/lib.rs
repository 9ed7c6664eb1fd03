#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for native module schemas.
//!
//! Two layers:
//! - **Deserialization layer** (`Raw*`): 1:1 mapping to the module-spec JSON schema
//! - **Typed layer** (`Schema`, `NativeModule`, `Method`, `TypeAnnotation`): the
//!   closed annotation grammar consumed by the code generators
//!
//! Conversion between the two rejects any annotation tag outside the closed set,
//! so generators never see an unknown variant.

mod convert;
mod error;
mod raw;
mod schema;

#[cfg(test)]
mod convert_tests;
#[cfg(test)]
mod schema_tests;

pub use error::SchemaError;
pub use raw::{
    RawFunctionType, RawMethod, RawModuleGroup, RawNativeModule, RawParam, RawProperty,
    RawSchema, RawTypeAnnotation,
};
pub use schema::{
    AliasTable, CONSTANTS_ACCESSOR_NAME, Method, NativeModule, NumericKind, ObjectProperty,
    ObjectShape, Param, ReservedScalar, Schema, TypeAnnotation,
};

/// Result type for schema loading.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Parse module-spec JSON into the raw layer without interpreting annotations.
pub fn parse_raw_schema(json: &str) -> std::result::Result<RawSchema, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse module-spec JSON straight into the typed layer.
pub fn parse_schema(json: &str) -> Result<Schema> {
    let raw = parse_raw_schema(json)?;
    Schema::try_from(raw)
}
