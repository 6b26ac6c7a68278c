//! `dynfib` reads an index from standard input and prints the Fibonacci
//! number at that index.

/// The command line interface and relevant structures.
pub mod cli;

/// The main CLI entry-point of the `dynfib` utility.
#[cfg(not(tarpaulin_include))]
fn main() {
    cli::process::parse_command();
}
