//! Error types for JNI bridge emission.

use jnibridge_core::TypeAnnotation;

use super::Position;

/// Error during bridge emission. Every variant aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Annotation has no translation at this site.
    #[error(
        "unsupported type annotation: {}{} in {} position",
        nullable_prefix(.nullable),
        .tag,
        .position
    )]
    UnsupportedAnnotation {
        tag: &'static str,
        nullable: bool,
        position: Position,
    },

    /// Alias name missing from the module's alias table.
    #[error("unresolved type alias: {name}")]
    UnresolvedAlias { name: String },

    /// Two schema groups declare the same module name.
    #[error("duplicate native module: {name}")]
    DuplicateModule { name: String },

    /// Failure inside one method, with the method it happened in.
    #[error("{module}.{method}: {source}")]
    Method {
        module: String,
        method: String,
        source: Box<Error>,
    },
}

fn nullable_prefix(nullable: &bool) -> &'static str {
    if *nullable { "nullable " } else { "" }
}

impl Error {
    pub(crate) fn unsupported(annotation: &TypeAnnotation, position: Position) -> Self {
        Self::UnsupportedAnnotation {
            tag: annotation.tag(),
            nullable: annotation.is_nullable(),
            position,
        }
    }

    /// Attach the module and method the error happened in.
    pub fn in_method(self, module: &str, method: &str) -> Self {
        Self::Method {
            module: module.to_string(),
            method: method.to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error with method context stripped.
    pub fn root(&self) -> &Error {
        match self {
            Self::Method { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for emission.
pub type Result<T> = std::result::Result<T, Error>;
