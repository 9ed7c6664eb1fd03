//! Names of generated symbols and files.

/// Extension of the generated source file.
pub const SOURCE_EXT: &str = "cpp";

/// Extension of the companion header the source includes.
pub const HEADER_EXT: &str = "h";

/// Argument name given to the synthetic promise parameter.
pub(super) const PROMISE_ARG_NAME: &str = "promise";

pub(super) fn bridge_class_name(module: &str) -> String {
    format!("Native{module}SpecJSI")
}

pub(super) fn thunk_name(module: &str, method: &str) -> String {
    format!("__hostFunction_{}_{method}", bridge_class_name(module))
}

pub(super) fn provider_name(library: &str) -> String {
    format!("{library}_ModuleProvider")
}

pub(super) fn include_name(module_spec: &str) -> String {
    format!("{module_spec}.{HEADER_EXT}")
}

pub(super) fn artifact_name(module_spec: &str) -> String {
    format!("{module_spec}-generated.{SOURCE_EXT}")
}
