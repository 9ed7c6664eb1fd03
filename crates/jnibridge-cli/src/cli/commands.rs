//! The `jnibridge` command tree.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jnibridge")
        .about("Generate JNI bridge sources from native module schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(signatures_command())
}

/// Generate the bridge source file.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate the JNI bridge source for a schema")
        .override_usage(
            "\
  jnibridge generate <SCHEMA> -l <NAME> [--spec-name <NAME>] [-o <DIR>]",
        )
        .after_help(
            r#"EXAMPLES:
  jnibridge generate schema.json -l AppSpecs              # print to stdout
  jnibridge generate schema.json -l AppSpecs -o jni/      # writes jni/AppSpecs-generated.cpp
  cat schema.json | jnibridge generate - -l AppSpecs --spec-name AppSpecsJni"#,
        )
        .arg(schema_path_arg())
        .arg(library_arg())
        .arg(spec_name_arg())
        .arg(output_dir_arg())
        .arg(reject_duplicates_arg())
        .arg(no_arg_comments_arg())
        .arg(verbose_arg())
}

/// List dispatch kinds and descriptors per method.
pub fn signatures_command() -> Command {
    Command::new("signatures")
        .about("Show dispatch kind, JNI descriptor and arity of every method")
        .after_help(
            r#"EXAMPLES:
  jnibridge signatures schema.json"#,
        )
        .arg(schema_path_arg())
        .arg(verbose_arg())
}
