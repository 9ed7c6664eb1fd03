//! `clap::Arg` builders for the `generate` and `signatures` subcommands.
//!
//! Ids match the keys read back in `dispatch.rs`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema file (positional, "-" for stdin).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Module schema JSON file (use \"-\" for stdin)")
}

/// Library name (-l/--library).
pub fn library_arg() -> Arg {
    Arg::new("library")
        .short('l')
        .long("library")
        .value_name("NAME")
        .required(true)
        .help("Library name, used for the module provider function")
}

/// Module spec name (--spec-name).
pub fn spec_name_arg() -> Arg {
    Arg::new("spec_name")
        .long("spec-name")
        .value_name("NAME")
        .help("Spec name for the include and output file (defaults to the library name)")
}

/// Output directory (-o/--output-dir).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .short('o')
        .long("output-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write the generated file into DIR instead of stdout")
}

/// Fail on repeated module names (--reject-duplicates).
pub fn reject_duplicates_arg() -> Arg {
    Arg::new("reject_duplicates")
        .long("reject-duplicates")
        .action(ArgAction::SetTrue)
        .help("Fail when two schema groups declare the same module name")
}

/// Omit argument-name comments (--no-arg-comments).
pub fn no_arg_comments_arg() -> Arg {
    Arg::new("no_arg_comments")
        .long("no-arg-comments")
        .action(ArgAction::SetTrue)
        .help("Do not annotate host functions with their argument names")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log progress to stderr (-vv for more)")
}
