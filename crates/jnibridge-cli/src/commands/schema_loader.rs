//! Schema input from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use jnibridge_core::{Schema, SchemaError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read schema file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),
}

/// Read and parse a schema. `-` reads from stdin.
pub fn load_schema(path: &Path) -> Result<Schema, LoadError> {
    let text = read_schema_text(path)?;
    let schema = jnibridge_core::parse_schema(&text)?;
    tracing::debug!(
        path = %path.display(),
        modules = schema.modules().count(),
        "loaded schema"
    );
    Ok(schema)
}

fn read_schema_text(path: &Path) -> Result<String, LoadError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }

    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
