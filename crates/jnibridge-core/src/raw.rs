//! Deserialization layer: a direct mirror of the module-spec JSON.

use indexmap::IndexMap;

/// Top-level schema document.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawSchema {
    #[serde(default)]
    pub modules: IndexMap<String, RawModuleGroup>,
}

/// One spec file's worth of declarations.
///
/// Groups that only declare components have no `nativeModules` entry.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModuleGroup {
    #[serde(default)]
    pub native_modules: Option<IndexMap<String, RawNativeModule>>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawNativeModule {
    #[serde(default)]
    pub aliases: IndexMap<String, RawTypeAnnotation>,
    #[serde(default)]
    pub properties: Vec<RawMethod>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMethod {
    pub name: String,
    pub type_annotation: RawFunctionType,
}

/// Method type. `type_name` is expected to be `FunctionTypeAnnotation`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFunctionType {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub params: Vec<RawParam>,
    pub return_type_annotation: RawTypeAnnotation,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParam {
    pub name: String,
    #[serde(default)]
    pub nullable: bool,
    pub type_annotation: RawTypeAnnotation,
}

/// Any type annotation. Which optional fields are present depends on `type_name`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeAnnotation {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub nullable: bool,
    /// Alias name or reserved scalar name.
    pub name: Option<String>,
    /// Structural object members.
    pub properties: Option<Vec<RawProperty>>,
    pub element_type: Option<Box<RawTypeAnnotation>>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    pub type_annotation: RawTypeAnnotation,
}
