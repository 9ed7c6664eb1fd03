//! Method → invocation thunk + registration entry.

use jnibridge_core::{AliasTable, Method};

use super::naming::{PROMISE_ARG_NAME, thunk_name};
use super::{RegistrationEntry, Result, Thunk, build_signature, dispatch_kind};

/// Output of one method: the two pieces always travel together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedMethod {
    pub thunk: Thunk,
    pub entry: RegistrationEntry,
}

/// Translate one method of `module`.
///
/// Returns `None` for a constants accessor whose declared return is an object
/// literal with no members: there is nothing to expose.
pub fn emit_method(
    module: &str,
    method: &Method,
    aliases: &AliasTable,
) -> Result<Option<EmittedMethod>> {
    if method.is_constants_accessor && method.return_type.is_empty_structural_object() {
        return Ok(None);
    }

    let kind = dispatch_kind(&method.return_type)?;
    let descriptor = build_signature(method, aliases)?;

    let mut arg_names: Vec<String> = method.params.iter().map(|p| p.name.clone()).collect();
    if descriptor.is_promise {
        arg_names.push(PROMISE_ARG_NAME.to_string());
    }

    let name = thunk_name(module, &method.name);
    let entry = RegistrationEntry {
        method: method.name.clone(),
        arity: method.params.len(),
        thunk: name.clone(),
    };
    let thunk = Thunk {
        name,
        kind,
        method: method.name.clone(),
        descriptor,
        arg_names,
    };

    Ok(Some(EmittedMethod { thunk, entry }))
}
