use std::path::PathBuf;

use jnibridge_codegen::jni::{DuplicateModules, emit_method, flatten_modules};
use jnibridge_core::Schema;

use super::schema_loader::load_schema;

pub struct SignaturesArgs {
    pub schema_path: PathBuf,
}

pub fn run(args: SignaturesArgs) {
    let schema = load_schema(&args.schema_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let output = render_signatures(&schema).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}

/// One line per method: `<Module>.<method> <Kind> <descriptor> <arity>`,
/// or `<Module>.<method> skipped` for an empty constants accessor.
pub fn render_signatures(schema: &Schema) -> jnibridge_codegen::Result<String> {
    let modules = flatten_modules(schema, DuplicateModules::Overwrite)?;

    let mut out = String::new();
    for module in modules.values() {
        for method in &module.methods {
            let emitted = emit_method(&module.name, method, &module.aliases)
                .map_err(|e| e.in_method(&module.name, &method.name))?;
            let line = match emitted {
                Some(m) => format!(
                    "{}.{} {} {} {}\n",
                    module.name, method.name, m.thunk.kind, m.thunk.descriptor, m.entry.arity
                ),
                None => format!("{}.{} skipped\n", module.name, method.name),
            };
            out.push_str(&line);
        }
    }
    Ok(out)
}
