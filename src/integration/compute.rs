use crate::init;
use crate::stderr_of;
use crate::stdout_of;

#[test]
fn prints_known_values() {
    let env = init();

    for (input, expected) in [
        ("0\n", "0\n"),
        ("1\n", "1\n"),
        ("10\n", "55\n"),
        ("20\n", "6765\n"),
        ("50\n", "12586269025\n"),
    ] {
        let out = dynfib!(env; input);

        assert!(out.status.success(), "{}", stderr_of(&out));
        assert_eq!(stdout_of(&out), expected);
    }
}

#[test]
fn output_is_a_single_integer_line() {
    let env = init();
    let out = dynfib!(env; "  90 \n");

    assert!(out.status.success());

    let stdout = stdout_of(&out);
    assert!(!stdout.contains('.'));
    assert_eq!(stdout.matches('\n').count(), 1);
    assert!(stdout.ends_with('\n'));
}

#[test]
fn same_input_same_output() {
    let env = init();

    let first = dynfib!(env; "33\n");
    let second = dynfib!(env; "33\n");

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout_of(&first), "3524578\n");
}

#[test]
fn malformed_input_fails() {
    let env = init();

    for input in ["ten\n", "4.5\n", "", "99999999999999999999\n"] {
        let out = dynfib!(env; input);

        assert!(!out.status.success(), "accepted {input:?}");
        assert_eq!(out.status.code(), Some(1));
        assert!(stdout_of(&out).is_empty());
        assert!(stderr_of(&out).contains("error:"));
    }
}

#[test]
fn negative_input_is_rejected_by_default() {
    let env = init();
    let out = dynfib!(env; "-5\n");

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("Negative index -5"));
}

#[test]
fn negative_input_passes_through_on_request() {
    let env = init();
    let out = dynfib!(env; "-5\n"; "--negative", "pass-through");

    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "-5\n");
}

#[test]
fn out_of_range_index_fails() {
    let env = init();
    let out = dynfib!(env; "1477\n");

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout_of(&out).is_empty());
}

#[test]
fn imprecise_results_warn() {
    let env = init();
    let out = dynfib!(env; "100\n");

    assert!(out.status.success());
    assert!(stderr_of(&out).contains("2^53"));
}

#[test]
fn verbosity_is_capped() {
    let env = init();
    let out = dynfib!(env; "3\n"; "-vvv");

    assert!(!out.status.success());
    assert!(stdout_of(&out).is_empty());
}

#[test]
fn prints_shortest_digits_above_the_exact_limit() {
    let env = init();
    let out = dynfib!(env; "100\n");

    assert!(out.status.success(), "{}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "354224848179262000000\n");
}
