use std::fs;

use crate::init;
use crate::stderr_of;
use crate::stdout_of;

#[test]
fn config_in_working_directory() {
    let env = init();
    fs::write(
        env.temp_dir.path().join("dynfib.toml"),
        "negative_input = \"pass-through\"\n",
    )
    .unwrap();

    let out = dynfib!(env; "-2\n");

    assert!(out.status.success(), "{}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "-2\n");
}

#[test]
fn flag_overrides_config() {
    let env = init();
    fs::write(
        env.temp_dir.path().join("dynfib.toml"),
        "negative_input = \"pass-through\"\n",
    )
    .unwrap();

    let out = dynfib!(env; "-2\n"; "--negative", "reject");

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn explicit_config_path() {
    let env = init();
    let path = env.temp_dir.path().join("custom.toml");
    fs::write(&path, "negative_input = \"pass-through\"\n").unwrap();

    let out = dynfib!(env; "-8\n"; "--config", path.to_str().unwrap());

    assert!(out.status.success(), "{}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "-8\n");
}

#[test]
fn broken_config_fails() {
    let env = init();
    fs::write(env.temp_dir.path().join("dynfib.toml"), "negative_input = 3\n").unwrap();

    let out = dynfib!(env; "5\n");

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("dynfib.toml"));
}

#[test]
fn missing_explicit_config_fails() {
    let env = init();
    let out = dynfib!(env; "5\n"; "-c", "absent.toml");

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn broken_config_fails_with_flag() {
    let env = init();
    fs::write(env.temp_dir.path().join("dynfib.toml"), "negative_input = 3\n").unwrap();

    let out = dynfib!(env; "5\n"; "--negative", "pass-through");

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("dynfib.toml"));
}
