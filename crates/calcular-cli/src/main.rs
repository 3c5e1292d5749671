//! Calculadora binary entry point
//!
//! Thin wrapper: parse flags, resolve configuration, initialize logging,
//! dispatch to a handler.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculadora::{handlers, Cli, CliConfig, CliResult, Commands, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(filter_directive(&cli, &config), &config);

    match cli.command {
        Commands::Tui(args) => handlers::execute_tui(&config, &args),
        Commands::Eval(args) => handlers::execute_eval(&config, &args),
        Commands::Probe => handlers::execute_probe(&config),
    }
}

/// Resolve command-line flags into the runtime configuration.
fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
        .with_color(cli.color.clone().into())
}

/// Pick the default tracing filter for this invocation.
///
/// The probe exists to show one line per level, so an unmodified probe
/// run opens the filter all the way up. Explicit -v or -q flags still
/// narrow it.
fn filter_directive(cli: &Cli, config: &CliConfig) -> &'static str {
    if matches!(cli.command, Commands::Probe) && cli.verbose == 0 && !cli.quiet {
        return "trace";
    }
    config.verbosity.filter_directive()
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` overrides the flag-derived directive when set.
fn init_tracing(directive: &str, config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.color.should_color())
        .with_writer(std::io::stderr)
        .init();
}
