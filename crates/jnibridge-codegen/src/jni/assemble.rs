//! Module flattening, document assembly and artifact packaging.

use indexmap::IndexMap;
use indexmap::map::Entry;
use jnibridge_core::{NativeModule, Schema};

use super::naming::{artifact_name, bridge_class_name, include_name, provider_name};
use super::{
    BridgeClass, Config, Document, DuplicateModules, Error, Item, ModuleProvider, ProviderCase,
    Result, emit_method,
};

/// Module name → module, in first-seen order.
pub type FlatModules<'a> = IndexMap<&'a str, &'a NativeModule>;

/// A named generated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub contents: String,
}

/// Collect all modules of all groups into one namespace keyed by module name.
///
/// A repeated name keeps the position of its first occurrence. Under
/// [`DuplicateModules::Overwrite`] the later module replaces the earlier one.
pub fn flatten_modules(schema: &Schema, policy: DuplicateModules) -> Result<FlatModules<'_>> {
    let mut flat = FlatModules::new();
    for module in schema.modules() {
        match flat.entry(module.name.as_str()) {
            Entry::Vacant(e) => {
                e.insert(module);
            }
            Entry::Occupied(mut e) => match policy {
                DuplicateModules::Reject => {
                    return Err(Error::DuplicateModule {
                        name: module.name.clone(),
                    });
                }
                DuplicateModules::Overwrite => {
                    tracing::warn!(
                        module = %module.name,
                        "duplicate native module name, later declaration replaces earlier one"
                    );
                    e.insert(module);
                }
            },
        }
    }
    Ok(flat)
}

/// Build the output document for already-flattened modules.
pub fn assemble(
    library_name: &str,
    module_spec_name: &str,
    modules: &FlatModules<'_>,
    config: &Config,
) -> Result<Document> {
    let mut items = Vec::new();
    let mut cases = Vec::with_capacity(modules.len());

    for module in modules.values() {
        tracing::debug!(
            module = %module.name,
            methods = module.methods.len(),
            "emitting bridge class"
        );

        let class = bridge_class_name(&module.name);
        let mut entries = Vec::with_capacity(module.methods.len());
        for method in &module.methods {
            let emitted = emit_method(&module.name, method, &module.aliases)
                .map_err(|e| e.in_method(&module.name, &method.name))?;
            let Some(emitted) = emitted else {
                tracing::debug!(
                    module = %module.name,
                    method = %method.name,
                    "skipping empty constants accessor"
                );
                continue;
            };
            items.push(Item::Thunk(emitted.thunk));
            entries.push(emitted.entry);
        }

        items.push(Item::BridgeClass(BridgeClass {
            name: class.clone(),
            entries,
        }));
        cases.push(ProviderCase {
            module: module.name.clone(),
            class,
        });
    }

    items.push(Item::ModuleProvider(ModuleProvider {
        name: provider_name(library_name),
        cases,
    }));

    Ok(Document {
        header: config.header.clone(),
        include: include_name(module_spec_name),
        namespaces: vec!["facebook".to_string(), "react".to_string()],
        items,
        arg_comments: config.arg_comments,
    })
}

/// Generate the bridge source for a whole schema.
///
/// Fails without producing any output if any method cannot be translated.
#[tracing::instrument(skip(schema, config))]
pub fn generate(
    library_name: &str,
    schema: &Schema,
    module_spec_name: &str,
    config: &Config,
) -> Result<Artifact> {
    let modules = flatten_modules(schema, config.duplicate_modules)?;
    let document = assemble(library_name, module_spec_name, &modules, config)?;
    let artifact = Artifact {
        name: artifact_name(module_spec_name),
        contents: document.render(),
    };
    tracing::debug!(artifact = %artifact.name, modules = modules.len(), "generated");
    Ok(artifact)
}
