use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tempdir::TempDir;

use super::*;
use crate::test_utils::EmptyFilesystem;
use crate::test_utils::StaticFilesystem;
use crate::test_utils::REAL_FS;

#[derive(Deserialize, Debug, PartialEq)]
struct Sample {
    index: u64,
}

#[test]
fn reads_an_existing_file() {
    let dir = TempDir::new("file_system").unwrap();
    let path = dir.path().join("sample.toml");
    fs::write(&path, "index = 10\n").unwrap();

    assert!(REAL_FS.exists(&path));
    assert_eq!(REAL_FS.read_utf8(&path).unwrap(), "index = 10\n");
    assert_eq!(
        REAL_FS.try_read_toml::<Sample>(&path).unwrap(),
        Sample { index: 10 }
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new("file_system").unwrap();
    let path = dir.path().join("nothing-here.toml");

    assert!(!REAL_FS.exists(&path));
    assert!(REAL_FS.read_bytes(&path).is_err());
    assert!(EmptyFilesystem.read_utf8(&path).is_err());
}

#[test]
fn invalid_toml_is_an_error() {
    let fs = StaticFilesystem("index = \"ten\"");

    assert!(fs
        .try_read_toml::<Sample>(&PathBuf::from("sample.toml"))
        .is_err());
}

#[test]
fn invalid_utf8_is_an_error() {
    let dir = TempDir::new("file_system").unwrap();
    let path = dir.path().join("binary");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    assert!(REAL_FS.read_bytes(&path).is_ok());
    assert!(REAL_FS.read_utf8(&path).is_err());
}
