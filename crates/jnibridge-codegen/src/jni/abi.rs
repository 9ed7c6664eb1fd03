//! Annotation → JNI type descriptor token.

use std::fmt;

use jnibridge_core::{AliasTable, TypeAnnotation};

use super::{Error, Result};

/// Where an annotation appears in a method descriptor.
///
/// Maps and arrays translate differently on each side, so callers must say which.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Param,
    Return,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param => f.write_str("parameter"),
            Self::Return => f.write_str("return"),
        }
    }
}

/// One JNI field descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbiToken {
    Void,
    Double,
    BoxedDouble,
    Boolean,
    BoxedBoolean,
    String,
    ReadableMap,
    WritableMap,
    ReadableArray,
    WritableArray,
    Callback,
    Promise,
    /// `java.util.Map`, only produced for constants accessors.
    Map,
}

impl AbiToken {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Void => "V",
            Self::Double => "D",
            Self::BoxedDouble => "Ljava/lang/Double;",
            Self::Boolean => "Z",
            Self::BoxedBoolean => "Ljava/lang/Boolean;",
            Self::String => "Ljava/lang/String;",
            Self::ReadableMap => "Lcom/facebook/react/bridge/ReadableMap;",
            Self::WritableMap => "Lcom/facebook/react/bridge/WritableMap;",
            Self::ReadableArray => "Lcom/facebook/react/bridge/ReadableArray;",
            Self::WritableArray => "Lcom/facebook/react/bridge/WritableArray;",
            Self::Callback => "Lcom/facebook/react/bridge/Callback;",
            Self::Promise => "Lcom/facebook/react/bridge/Promise;",
            Self::Map => "Ljava/util/Map;",
        }
    }
}

impl fmt::Display for AbiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve one level of alias indirection.
///
/// Non-alias annotations are returned unchanged. Alias tables map to concrete
/// annotations, so the result is never chased further.
pub fn resolve_alias<'a>(
    annotation: &'a TypeAnnotation,
    aliases: &'a AliasTable,
) -> Result<&'a TypeAnnotation> {
    match annotation {
        TypeAnnotation::Alias { name } => aliases
            .get(name)
            .ok_or_else(|| Error::UnresolvedAlias { name: name.clone() }),
        _ => Ok(annotation),
    }
}

/// JNI descriptor token for an annotation at `position`.
///
/// `nullable` is the flag carried outside the annotation (a parameter's own
/// nullability). It is combined with the resolved annotation's flag.
pub fn abi_token(
    annotation: &TypeAnnotation,
    nullable: bool,
    position: Position,
    aliases: &AliasTable,
) -> Result<AbiToken> {
    let resolved = resolve_alias(annotation, aliases)?;
    let nullable = nullable || resolved.is_nullable();

    let token = match (resolved, position) {
        // Root tags are always passed as a primitive double.
        (TypeAnnotation::Reserved { .. }, _) => AbiToken::Double,
        (TypeAnnotation::Void, _) => AbiToken::Void,
        (TypeAnnotation::String { .. }, _) => AbiToken::String,
        (TypeAnnotation::Boolean { .. }, _) if nullable => AbiToken::BoxedBoolean,
        (TypeAnnotation::Boolean { .. }, _) => AbiToken::Boolean,
        (TypeAnnotation::Numeric { .. }, _) if nullable => AbiToken::BoxedDouble,
        (TypeAnnotation::Numeric { .. }, _) => AbiToken::Double,
        (TypeAnnotation::Promise { .. }, _) => AbiToken::Promise,
        (TypeAnnotation::Object { .. }, Position::Param) if !nullable => AbiToken::ReadableMap,
        (TypeAnnotation::Object { .. }, Position::Return) if !nullable => AbiToken::WritableMap,
        (TypeAnnotation::Array { .. }, Position::Param) if !nullable => AbiToken::ReadableArray,
        (TypeAnnotation::Array { .. }, Position::Return) if !nullable => AbiToken::WritableArray,
        (TypeAnnotation::Function { .. }, Position::Param) if !nullable => AbiToken::Callback,
        _ => {
            return Err(Error::UnsupportedAnnotation {
                tag: resolved.tag(),
                nullable,
                position,
            });
        }
    };
    Ok(token)
}
