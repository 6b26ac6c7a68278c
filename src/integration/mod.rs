//! # Integration tests for the command line of `dynfib`.
//! The tests in this module drive the compiled binary the way a user would:
//! an index is piped into standard input and the printed line is checked.
//!
//! ## Test Strategy
//! Every test gets its own `TestEnv`, in practice a temporary working
//! directory, so that a `dynfib.toml` written by one test is never picked up
//! by another.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

use tempdir::TempDir;

/// Run dynfib in a test environment: `dynfib!(env; input; args...)`.
macro_rules! dynfib {
    ($env:expr; $input:expr) => {
        $crate::run(&$env, $input, &[])
    };
    ($env:expr; $input:expr; $($arg:expr),+) => {
        $crate::run(&$env, $input, &[$($arg),+])
    };
}

mod compute;
mod config;
mod version;

/// The testing environment passed to individual #[test](s)
struct TestEnv {
    dynfib_path: PathBuf,
    temp_dir: TempDir,
}

fn init() -> TestEnv {
    let dynfib_path = PathBuf::from(env!("CARGO_BIN_EXE_dynfib"));
    assert!(
        &dynfib_path.exists(),
        "\nTest setup couldn't find the dynfib executable.
    [Expected to find it at: {:?}]\n",
        dynfib_path
    );

    // CARGO_TARGET_TMPDIR means you can debug by looking in the ./target
    // folder instead of the system temporary directory.
    let temp_dir = TempDir::new_in(env!("CARGO_TARGET_TMPDIR"), "workdir").unwrap();

    TestEnv {
        dynfib_path,
        temp_dir,
    }
}

/// Run dynfib inside the environment with `input` on standard input.
fn run(env: &TestEnv, input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(&env.dynfib_path)
        .args(args)
        .current_dir(env.temp_dir.path())
        .env("RUST_BACKTRACE", "0")
        .env_remove("RUST_LIB_BACKTRACE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // dynfib may exit before reading, e.g. on a usage error.
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }

    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}
