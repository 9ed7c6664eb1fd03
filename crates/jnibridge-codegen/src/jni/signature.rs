//! Method → JNI method descriptor.

use std::fmt;

use jnibridge_core::{AliasTable, Method, TypeAnnotation};

use super::{AbiToken, Position, Result, abi_token};

/// A JNI method descriptor, `(<params>)<ret>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Declared parameters, then the synthetic promise parameter if any.
    pub params: Vec<AbiToken>,
    pub ret: AbiToken,
    pub is_promise: bool,
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for token in &self.params {
            f.write_str(token.as_str())?;
        }
        write!(f, "){}", self.ret)
    }
}

/// Build the descriptor for `method`.
///
/// Promise-returning methods take a trailing promise handle and return void.
/// Constants accessors always return a map, whatever their declared return.
pub fn build_signature(method: &Method, aliases: &AliasTable) -> Result<MethodDescriptor> {
    let is_promise = method.returns_promise();

    let mut params = method
        .params
        .iter()
        .map(|param| {
            abi_token(
                &param.type_annotation,
                param.nullable,
                Position::Param,
                aliases,
            )
        })
        .collect::<Result<Vec<_>>>()?;
    if is_promise {
        params.push(abi_token(
            &TypeAnnotation::promise(),
            false,
            Position::Param,
            aliases,
        )?);
    }

    let ret = if method.is_constants_accessor {
        AbiToken::Map
    } else if is_promise {
        abi_token(&TypeAnnotation::Void, false, Position::Return, aliases)?
    } else {
        abi_token(&method.return_type, false, Position::Return, aliases)?
    };

    Ok(MethodDescriptor {
        params,
        ret,
        is_promise,
    })
}
