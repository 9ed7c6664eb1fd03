//! Subcommand matches → typed params → handler args (spec name default, config policy).

use std::path::PathBuf;

use clap::ArgMatches;
use jnibridge_codegen::DuplicateModules;

use crate::commands::generate::GenerateArgs;
use crate::commands::signatures::SignaturesArgs;

pub struct GenerateParams {
    pub schema_path: PathBuf,
    pub library: String,
    pub spec_name: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub reject_duplicates: bool,
    pub no_arg_comments: bool,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            library: m
                .get_one::<String>("library")
                .cloned()
                .unwrap_or_default(),
            spec_name: m.get_one::<String>("spec_name").cloned(),
            output_dir: m.get_one::<PathBuf>("output_dir").cloned(),
            reject_duplicates: m.get_flag("reject_duplicates"),
            no_arg_comments: m.get_flag("no_arg_comments"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let spec_name = p.spec_name.unwrap_or_else(|| p.library.clone());
        Self {
            schema_path: p.schema_path,
            library: p.library,
            spec_name,
            output_dir: p.output_dir,
            duplicate_modules: if p.reject_duplicates {
                DuplicateModules::Reject
            } else {
                DuplicateModules::Overwrite
            },
            arg_comments: !p.no_arg_comments,
        }
    }
}

pub struct SignaturesParams {
    pub schema_path: PathBuf,
    pub verbose: u8,
}

impl SignaturesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<SignaturesParams> for SignaturesArgs {
    fn from(p: SignaturesParams) -> Self {
        Self {
            schema_path: p.schema_path,
        }
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
