mod cli;
mod commands;

use cli::{GenerateParams, SignaturesParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            init_tracing(params.verbose);
            commands::generate::run(params.into());
        }
        Some(("signatures", m)) => {
            let params = SignaturesParams::from_matches(m);
            init_tracing(params.verbose);
            commands::signatures::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
