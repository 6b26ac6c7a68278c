use std::io::BufRead;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::trace;

use crate::bailc;
use crate::ctx;

/// Read the requested index from `reader`.
///
/// Lines are consumed until one holds a token; the first whitespace-delimited
/// token is parsed and anything after it is ignored.
pub fn read_index<R: BufRead>(mut reader: R) -> Result<i64> {
    let mut line = String::new();

    loop {
        line.clear();

        let read = reader.read_line(&mut line).with_context(ctx!(
            "Could not read from standard input";
            "",
        ))?;

        if read == 0 {
            bailc!(
                "No input provided";
                "Standard input ended before an index was given";
                "Pipe a single non-negative integer into dynfib, for example `echo 10 | dynfib`",
            );
        }

        let mut tokens = line.split_whitespace();

        if let Some(token) = tokens.next() {
            let rest: Vec<&str> = tokens.collect();
            if !rest.is_empty() {
                debug!("Ignoring trailing input: {rest:?}");
            }

            return parse_index(token);
        }

        trace!("Skipping an empty line");
    }
}

/// Parse a single token as an index.
pub fn parse_index(token: &str) -> Result<i64> {
    token.parse::<i64>().with_context(ctx!(
        "Could not parse {:?} as an integer", token;
        "Provide a whole number between {} and {}", i64::MIN, i64::MAX,
    ))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
