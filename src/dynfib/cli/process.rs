use std::env;
use std::io::stdin;
use std::io::stdout;
use std::io::BufRead;
use std::io::Write;
use std::process::exit;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use dynfib_lib::config::Config;
use dynfib_lib::constants::ERROR_STYLE;
use dynfib_lib::ctx;
use dynfib_lib::fibonacci::evaluate;
use dynfib_lib::fibonacci::NegativePolicy;
use dynfib_lib::file_system::FileOperations;
use dynfib_lib::file_system::FileSystemInteractor;
use dynfib_lib::input::read_index;
use log::debug;
use log::trace;
use log::LevelFilter;

use super::log::LogTokens;
use super::printing::get_styles;
use crate::cli::def::Cli;
use crate::cli::def::DynfibCommand;
use crate::cli::printing::print_version;
use crate::cli::printing::write_result;

/// This function parses the command that dynfib was run with.
#[cfg(not(tarpaulin_include))]
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    let command = match Cli::from_arg_matches(&styled) {
        Ok(command) => command,
        Err(e) => e.exit(),
    };

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if let Err(e) = process_command(&command) {
        if backtrace_enabled {
            eprintln!("{e:?}");
        } else {
            eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
            eprint!("{}", e);
        }

        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
#[cfg(not(tarpaulin_include))]
pub fn process_command(cmd: &Cli) -> Result<()> {
    setup_logging(cmd)?;

    match cmd.command {
        Some(DynfibCommand::Version) => print_version(cmd.script),

        None => compute(
            cmd,
            stdin().lock(),
            &mut stdout().lock(),
            &FileSystemInteractor,
        )?,
    }

    Ok(())
}

/// Read an index from `input` and write its Fibonacci number to `output`.
pub fn compute<R, W, F>(cmd: &Cli, input: R, output: &mut W, fs: &F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FileOperations,
{
    let policy = negative_policy(cmd, fs)?;
    debug!("Negative input policy: {policy}");

    let n = read_index(input)?;
    debug!("Computing F({n})");

    let value = evaluate(n, policy)?;
    trace!("F({n}) = {value:e}");

    write_result(output, value)
}

/// The negative input policy: the command line flag wins over the config.
///
/// The config is always loaded, so a broken file fails the run either way.
fn negative_policy<F: FileOperations>(cmd: &Cli, fs: &F) -> Result<NegativePolicy> {
    let config = Config::load(cmd.config.as_deref(), fs)?;
    trace!("The config is: {config:#?}");

    match &cmd.negative {
        Some(name) => name.parse(),
        None => Ok(config.negative_input),
    }
}

/// Prepare the log levels for the application.
#[cfg(not(tarpaulin_include))]
fn setup_logging(cmd: &Cli) -> Result<()> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    log_build.try_init().with_context(ctx!(
        "Failed to initialize logging";
        "Make sure you are using a supported terminal",
    ))
}

#[cfg(test)]
#[path = "tests/process.rs"]
mod tests;
