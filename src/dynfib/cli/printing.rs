use std::io::Write;

use anstyle::AnsiColor;
use anyhow::Context;
use anyhow::Result;
use clap::crate_description;
use clap::crate_name;
use clap::crate_version;
use dynfib_lib::constants::style_from_fg;
use dynfib_lib::constants::ERROR_STYLE;
use dynfib_lib::constants::HELP_STYLE;
use dynfib_lib::constants::LOGO;
use dynfib_lib::constants::PRIMARY_STYLE;
use dynfib_lib::constants::SECONDARY_STYLE;
use dynfib_lib::ctx;
use dynfib_lib::fibonacci::format_result;

/// Util function for getting the style for the CLI
#[cfg(not(tarpaulin_include))]
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// The version line printed in script mode.
pub fn version_line() -> String {
    format!("{} {}", crate_name!(), crate_version!())
}

/// The styled version banner.
pub fn version_banner() -> String {
    LOGO.replace(
        "{LINE1}",
        &format!(
            "{} at version {}{}{:#}",
            crate_name!(),
            PRIMARY_STYLE,
            crate_version!(),
            PRIMARY_STYLE
        ),
    )
    .replace(
        "{LINE2}",
        &format!("{}{}{:#}", SECONDARY_STYLE, crate_description!(), SECONDARY_STYLE),
    )
}

/// Pretty print dynfib's version
#[cfg(not(tarpaulin_include))]
pub fn print_version(script: bool) {
    if script {
        println!("{}", version_line());
    } else {
        print!("{}", version_banner());
    }
}

/// Write a computed Fibonacci number as a single line.
pub fn write_result<W: Write>(out: &mut W, value: f64) -> Result<()> {
    writeln!(out, "{}", format_result(value)).with_context(ctx!(
        "Could not write the result to standard output";
        "",
    ))?;

    out.flush().with_context(ctx!(
        "Could not flush standard output";
        "",
    ))
}

#[cfg(test)]
#[path = "tests/printing.rs"]
mod tests;
