//! Return annotation → runtime dispatch kind.

use std::fmt;

use jnibridge_core::TypeAnnotation;

use super::{Error, Position, Result};

/// Selects how the runtime unmarshals a method's return value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DispatchKind {
    Void,
    String,
    Boolean,
    Number,
    Promise,
    Object,
    Array,
}

impl DispatchKind {
    /// Identifier of the kind constant in generated source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Void => "VoidKind",
            Self::String => "StringKind",
            Self::Boolean => "BooleanKind",
            Self::Number => "NumberKind",
            Self::Promise => "PromiseKind",
            Self::Object => "ObjectKind",
            Self::Array => "ArrayKind",
        }
    }
}

impl fmt::Display for DispatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatch kind for a return annotation.
///
/// Aliases are not resolved here: a method returning an alias reference, or a
/// callback, has no dispatch kind.
pub fn dispatch_kind(return_type: &TypeAnnotation) -> Result<DispatchKind> {
    let kind = match return_type {
        TypeAnnotation::Reserved { .. } => DispatchKind::Number,
        TypeAnnotation::Void => DispatchKind::Void,
        TypeAnnotation::String { .. } => DispatchKind::String,
        TypeAnnotation::Boolean { .. } => DispatchKind::Boolean,
        TypeAnnotation::Numeric { .. } => DispatchKind::Number,
        TypeAnnotation::Promise { .. } => DispatchKind::Promise,
        TypeAnnotation::Object { .. } => DispatchKind::Object,
        TypeAnnotation::Array { .. } => DispatchKind::Array,
        TypeAnnotation::Function { .. } | TypeAnnotation::Alias { .. } => {
            return Err(Error::unsupported(return_type, Position::Return));
        }
    };
    Ok(kind)
}
