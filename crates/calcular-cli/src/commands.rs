//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Calculadora: CLI for Calcular - a keypad calculator with a terminal front end
#[derive(Parser, Debug)]
#[command(name = "calculadora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive keypad calculator
    Tui(TuiArgs),

    /// Evaluate a key script and print the final display
    ///
    /// A key script is one character per key press: digits, `.`, the
    /// operators `+ - × ÷` (ASCII `*` and `/` work too), `c` for clear,
    /// `<` for delete and `=` for equals. Whitespace is ignored.
    Eval(EvalArgs),

    /// Emit one log line per severity level and exit
    Probe,
}

/// Arguments for the tui command
#[derive(Parser, Debug)]
pub struct TuiArgs {
    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    pub no_mouse: bool,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Key script to run, e.g. "12.5+8="
    pub script: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: EvalFormat,
}

/// Eval output format
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum EvalFormat {
    /// Final display text only
    #[default]
    Text,
    /// JSON object with display, phase and advisories
    Json,
}

/// Color output argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
