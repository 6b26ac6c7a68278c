use std::io::Cursor;

use super::*;

fn read(text: &str) -> Result<i64> {
    read_index(Cursor::new(text.as_bytes()))
}

#[test]
fn single_token() {
    assert_eq!(read("10\n").unwrap(), 10);
    assert_eq!(read("0").unwrap(), 0);
    assert_eq!(read("-7\n").unwrap(), -7);
}

#[test]
fn surrounding_whitespace() {
    assert_eq!(read("   42 \t\n").unwrap(), 42);
    assert_eq!(read("\n\n   \n 5\n").unwrap(), 5);
}

#[test]
fn only_the_first_token_counts() {
    assert_eq!(read("3 4 5\n6\n").unwrap(), 3);
    assert_eq!(read("8 not-a-number\n").unwrap(), 8);
}

#[test]
fn empty_input() {
    assert!(read("").is_err());
    assert!(read("  \n\n\t\n").is_err());
}

#[test]
fn malformed_input() {
    assert!(read("ten\n").is_err());
    assert!(read("3.5\n").is_err());
    assert!(read("0x10\n").is_err());
    assert!(read("99999999999999999999\n").is_err());
}

#[test]
fn parse_error_names_the_token() {
    let err = parse_index("abc").unwrap_err();

    assert!(format!("{err}").contains("\"abc\""));
}
