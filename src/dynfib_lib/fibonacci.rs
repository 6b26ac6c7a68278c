use std::fmt::Display;
use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::trace;
use log::warn;
use serde::Deserialize;

use crate::bailc;
use crate::constants::MAX_EXACT_INDEX;
use crate::constants::MAX_FINITE_INDEX;
use crate::constants::PRIMARY_STYLE;
use crate::ctx;

/// What to do when asked for the Fibonacci number at a negative index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativePolicy {
    /// Fail with an error.
    #[default]
    Reject,

    /// Treat the index like the `n <= 1` base case and return it unchanged.
    PassThrough,
}

impl NegativePolicy {
    /// The spelling used on the command line and in `dynfib.toml`.
    pub const fn name(&self) -> &'static str {
        match self {
            NegativePolicy::Reject => "reject",
            NegativePolicy::PassThrough => "pass-through",
        }
    }
}

impl Display for NegativePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NegativePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "reject" => Ok(NegativePolicy::Reject),
            "pass-through" => Ok(NegativePolicy::PassThrough),
            other => Err(anyhow!(
                "Unknown negative input policy {other:?}, expected \"reject\" or \"pass-through\""
            )),
        }
    }
}

/// Build the table `F(0), F(1), ..., F(n)`.
///
/// The table always holds `n + 1` entries. Entries above [MAX_EXACT_INDEX]
/// are rounded to the nearest `f64`. Fails if the table cannot be allocated.
pub fn sequence(n: u64) -> Result<Vec<f64>> {
    let Some(len) = usize::try_from(n).ok().and_then(|n| n.checked_add(1)) else {
        bailc!(
            "Index {} is too large", n;
            "A table of {} entries cannot be addressed on this platform", n;
            "Provide an index of at most {}", MAX_FINITE_INDEX,
        );
    };

    let mut fibs = Vec::new();
    fibs.try_reserve_exact(len).with_context(ctx!(
        "Could not allocate a table of {} entries", len;
        "Provide an index of at most {}", MAX_FINITE_INDEX,
    ))?;

    fibs.push(0.0);

    if len > 1 {
        fibs.push(1.0);
    }

    while fibs.len() < len {
        let i = fibs.len();
        fibs.push(fibs[i - 1] + fibs[i - 2]);
    }

    Ok(fibs)
}

/// The `n`-th Fibonacci number.
///
/// Indices 0 and 1 are returned directly, everything else is read off the
/// table built by [sequence].
pub fn fibonacci(n: u64) -> Result<f64> {
    if n <= 1 {
        return Ok(n as f64);
    }

    let fibs = sequence(n)?;
    trace!("Built a table of {} entries", fibs.len());

    Ok(fibs[fibs.len() - 1])
}

/// Compute the Fibonacci number for an index as read from the user.
///
/// Negative indices are handled according to `policy`. Indices above
/// [MAX_FINITE_INDEX] are rejected since their value does not fit in an `f64`.
pub fn evaluate(n: i64, policy: NegativePolicy) -> Result<f64> {
    if n < 0 {
        match policy {
            NegativePolicy::Reject => {
                bailc!(
                    "Negative index {}", n;
                    "The Fibonacci sequence starts at index 0";
                    "Provide a non-negative integer, or set \
                    {PRIMARY_STYLE}--negative pass-through{PRIMARY_STYLE:#} to echo it back",
                );
            }
            NegativePolicy::PassThrough => {
                debug!("Passing the negative index {n} through unchanged");
                return Ok(n as f64);
            }
        }
    }

    let index = n.unsigned_abs();

    if index > MAX_FINITE_INDEX {
        bailc!(
            "Index {} is out of range", index;
            "F({}) is larger than the largest double-precision number", index;
            "Provide an index of at most {}", MAX_FINITE_INDEX,
        );
    }

    if index > MAX_EXACT_INDEX {
        warn!(
            "F({index}) is above 2^53, the result is rounded to the nearest double-precision number"
        );
    }

    fibonacci(index)
}

/// Render a result with zero decimal places.
///
/// Only the shortest digits that identify the `f64` are printed, padded with
/// zeros: `F(100)` is `354224848179262000000`, not the exact binary value
/// `354224848179261997056`.
pub fn format_result(value: f64) -> String {
    format!("{}", value.round())
}

#[cfg(test)]
#[path = "tests/fibonacci.rs"]
mod tests;
