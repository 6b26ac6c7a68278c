use clap::crate_version;

use crate::init;
use crate::stdout_of;

#[test]
fn test_dynfib_short_version() {
    let env = init();
    let out = dynfib!(env; ""; "version", "-s");

    assert!(out.status.success());
    assert_eq!(stdout_of(&out), format!("dynfib {}\n", crate_version!()));
}

#[test]
fn test_dynfib_version() {
    let env = init();
    let out = dynfib!(env; ""; "version");

    assert!(out.status.success());
    assert!(stdout_of(&out).contains(crate_version!()));
}
