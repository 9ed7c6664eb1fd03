use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use jnibridge_codegen::{Artifact, Config, DuplicateModules};
use jnibridge_core::Schema;

use super::schema_loader::load_schema;

pub struct GenerateArgs {
    pub schema_path: PathBuf,
    pub library: String,
    pub spec_name: String,
    pub output_dir: Option<PathBuf>,
    pub duplicate_modules: DuplicateModules,
    pub arg_comments: bool,
}

pub fn run(args: GenerateArgs) {
    let schema = load_schema(&args.schema_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let artifact = generate_artifact(&schema, &args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    match &args.output_dir {
        Some(dir) => {
            let path = write_artifact(dir, &artifact).unwrap_or_else(|e| {
                eprintln!("error: failed to write {}: {}", dir.display(), e);
                std::process::exit(1);
            });
            tracing::info!(path = %path.display(), "wrote bridge source");
        }
        None => {
            if let Err(e) = io::stdout().write_all(artifact.contents.as_bytes()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

pub fn config(args: &GenerateArgs) -> Config {
    Config::new()
        .duplicate_modules(args.duplicate_modules)
        .arg_comments(args.arg_comments)
}

pub fn generate_artifact(
    schema: &Schema,
    args: &GenerateArgs,
) -> jnibridge_codegen::Result<Artifact> {
    jnibridge_codegen::generate(&args.library, schema, &args.spec_name, &config(args))
}

/// Write `artifact` into `dir`, creating the directory if needed.
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.name);
    fs::write(&path, &artifact.contents)?;
    Ok(path)
}
