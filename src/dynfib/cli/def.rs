use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;

/// Structure of the main command (dynfib).
///
/// Without a subcommand, an index is read from standard input and the
/// Fibonacci number at that index is printed.
#[allow(unused)]
#[derive(Parser, Debug)]
#[command(
    about = "Print the n-th Fibonacci number, with n read from standard input",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// An optional subcommand, computing is the default.
    #[command(subcommand)]
    pub command: Option<DynfibCommand>,

    /// Disable styled output, for use in scripts.
    #[arg(short, long, global = true)]
    pub script: bool,

    /// The path to the config file
    /// [default: ./dynfib.toml, if it exists].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// How to treat a negative index, overrides the config file
    /// [default: reject].
    #[arg(long, value_parser = [
        PossibleValue::new("reject"),
        PossibleValue::new("pass-through"),
    ])]
    pub negative: Option<String>,
}

/// Enum for root-level `dynfib` commands.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum DynfibCommand {
    /// Print information about the version.
    #[command()]
    Version,
}
