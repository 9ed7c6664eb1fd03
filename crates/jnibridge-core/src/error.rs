//! Errors raised while loading a schema.

/// Error during schema loading.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Annotation tag outside the supported grammar.
    #[error("unsupported type annotation: {tag}")]
    UnsupportedAnnotation { tag: String },

    #[error("unknown reserved type name: {name}")]
    UnknownReservedScalar { name: String },

    #[error("type alias reference without a name")]
    MissingAliasName,

    #[error("method `{method}` must be typed as FunctionTypeAnnotation, found {tag}")]
    NotAFunction { method: String, tag: String },
}
