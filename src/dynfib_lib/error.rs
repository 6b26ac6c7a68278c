use std::fmt::Display;

use crate::constants::ERROR_STYLE;
use crate::constants::HELP_STYLE;

/// Context attached to an [anyhow::Error]: what went wrong, and what the user
/// can do about it.
///
/// Either half may be empty, in which case it is not printed.
///
/// ```should_panic
/// # use dynfib_lib::error::Ctx;
/// # use anyhow::anyhow;
/// # use anyhow::Context;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// Err(anyhow!("invalid digit found in string"))
///     .context(Ctx("Could not parse \"ten\" as an integer", "Provide a whole number"))
/// # }
/// ```
#[derive(Debug)]
pub struct Ctx<A, B>(pub A, pub B)
where
    A: Display,
    B: Display;

impl<A: Display, B: Display> Display for Ctx<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cause = self.0.to_string();
        let help = self.1.to_string();

        if !cause.is_empty() {
            writeln!(f, "{ERROR_STYLE}caused by:{ERROR_STYLE:#} {cause}")?;
        }

        if !help.is_empty() {
            writeln!(f, "\n{HELP_STYLE}help:{HELP_STYLE:#} {help}")?;
        }

        Ok(())
    }
}

/// Build a closure producing a [Ctx], for use with
/// [anyhow::Context::with_context].
///
/// The cause and the help message are separated by a `;`, and each takes
/// `format!` style arguments:
///
/// ```no_run
/// # use dynfib_lib::ctx;
/// # use anyhow::Context;
/// # let path = std::path::PathBuf::from("dynfib.toml");
/// std::fs::read(&path).with_context(ctx!(
///     "Could not read the file {:?}", path;
///     "Ensure that the file exists and you have permissions to access it",
/// ));
/// ```
#[macro_export]
macro_rules! ctx {
    ($cause:expr $(, $arg_cause:expr)* ; $help:expr $(, $arg_help:expr)* $(,)?) => {
        || $crate::error::Ctx(format!($cause $(, $arg_cause)*), format!($help $(, $arg_help)*))
    };
}

/// Return early with an error carrying a [Ctx].
///
/// Takes three `;` separated parts: the error itself, its cause and the help
/// message.
///
/// ```no_run
/// # use dynfib_lib::bailc;
/// # use anyhow::Result;
/// fn check(n: i64) -> Result<()> {
///     if n < 0 {
///         bailc!(
///             "Negative index {}", n;
///             "Only non-negative indices are accepted";
///             "Pass a number of at least 0",
///         );
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bailc {
    ($text:expr $(, $arg_text:expr)* ; $cause:expr $(, $arg_cause:expr)* ; $help:expr $(, $arg_help:expr)* $(,)?) => {
        return anyhow::Context::with_context(
            Err(anyhow::Error::msg(format!($text $(, $arg_text)*))),
            $crate::ctx!($cause $(, $arg_cause)*; $help $(, $arg_help)*),
        )
    };
}

#[cfg(test)]
#[path = "tests/error.rs"]
mod tests;
