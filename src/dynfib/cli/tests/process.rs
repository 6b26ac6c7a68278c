use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::bail;
use clap::Parser;
use tempdir::TempDir;

use super::*;

struct NoFiles;

impl FileOperations for NoFiles {
    fn exists(&self, _: &Path) -> bool {
        false
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        bail!("File not found: {path:?}")
    }
}

fn run<F: FileOperations>(args: &[&str], input: &str, fs: &F) -> Result<String> {
    let cmd = Cli::try_parse_from(args)?;
    let mut out = Vec::new();

    compute(&cmd, Cursor::new(input.as_bytes()), &mut out, fs)?;

    Ok(String::from_utf8(out)?)
}

#[test]
fn computes_from_input() {
    assert_eq!(run(&["dynfib"], "10\n", &NoFiles).unwrap(), "55\n");
    assert_eq!(run(&["dynfib"], "20", &NoFiles).unwrap(), "6765\n");
    assert_eq!(run(&["dynfib"], "50\n", &NoFiles).unwrap(), "12586269025\n");
    assert_eq!(run(&["dynfib"], "0\n", &NoFiles).unwrap(), "0\n");
    assert_eq!(run(&["dynfib"], "1\n", &NoFiles).unwrap(), "1\n");
}

#[test]
fn malformed_input_fails() {
    assert!(run(&["dynfib"], "fifty\n", &NoFiles).is_err());
    assert!(run(&["dynfib"], "", &NoFiles).is_err());
}

#[test]
fn negative_input_by_flag() {
    assert!(run(&["dynfib"], "-4\n", &NoFiles).is_err());
    assert!(run(&["dynfib", "--negative", "reject"], "-4\n", &NoFiles).is_err());
    assert_eq!(
        run(&["dynfib", "--negative", "pass-through"], "-4\n", &NoFiles).unwrap(),
        "-4\n"
    );
}

#[test]
fn negative_input_by_config() {
    let dir = TempDir::new("process").unwrap();
    let path = dir.path().join("dynfib.toml");
    fs::write(&path, "negative_input = \"pass-through\"\n").unwrap();
    let path = path.to_str().unwrap();

    assert_eq!(
        run(&["dynfib", "-c", path], "-9\n", &FileSystemInteractor).unwrap(),
        "-9\n"
    );
    assert!(run(
        &["dynfib", "-c", path, "--negative", "reject"],
        "-9\n",
        &FileSystemInteractor
    )
    .is_err());
}

#[test]
fn missing_explicit_config_fails() {
    assert!(run(&["dynfib", "-c", "./nowhere.toml"], "3\n", &NoFiles).is_err());
}

#[test]
fn unknown_policy_is_a_usage_error() {
    assert!(Cli::try_parse_from(["dynfib", "--negative", "allow"]).is_err());
}

struct BrokenConfig;

impl FileOperations for BrokenConfig {
    fn exists(&self, _: &Path) -> bool {
        true
    }

    fn read_bytes(&self, _: &Path) -> Result<Vec<u8>> {
        Ok(b"negative_input = 3\n".to_vec())
    }
}

#[test]
fn broken_config_fails_even_with_flag() {
    assert!(run(&["dynfib"], "3\n", &BrokenConfig).is_err());
    assert!(run(&["dynfib", "--negative", "pass-through"], "3\n", &BrokenConfig).is_err());
}
