use std::io::Write;
use std::process::{Command, Output, Stdio};

fn tlist(args: &[&str], stdin: Option<&str>) -> Output {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_tlist"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("TLIST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tlist");

    {
        let mut pipe = child.stdin.take().expect("stdin piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("failed to write stdin");
        }
    }

    child.wait_with_output().expect("failed to wait for tlist")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn display_prints_values_in_order() {
    let output = tlist(&["display", "a", "b"], None);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "a\nb\n");
}

#[test]
fn display_formats() {
    let output = tlist(&["--format", "json", "display", "a", "1", "-2.5"], None);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "[\"a\",1,-2.5]\n");

    let output = tlist(&["--format", "inline", "display", "1", "2"], None);
    assert_eq!(stdout(&output), "1, 2\n");
}

#[test]
fn head_prints_first_value() {
    let output = tlist(&["head", "a", "b", "c"], None);
    assert_eq!(stdout(&output), "a\n");
}

#[test]
fn boolean_value_fails() {
    let output = tlist(&["display", "a", "true"], None);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("found boolean"), "stderr: {stderr}");
}

#[test]
fn optional_presence() {
    assert_eq!(
        stdout(&tlist(&["optional"], None)),
        "{ value: null }\npresent: false\n"
    );
    assert_eq!(
        stdout(&tlist(&["optional", "''"], None)),
        "{ value: '' }\npresent: true\n"
    );
    assert_eq!(
        stdout(&tlist(&["--format", "json", "optional", "1"], None)),
        "{\"value\":1}\n"
    );
}

#[test]
fn transform_narrows() {
    assert_eq!(stdout(&tlist(&["transform", "hello"], None)), "5\n");
    assert_eq!(stdout(&tlist(&["transform", "-2.5"], None)), "-2\n");
}

#[test]
fn piped_repl_runs_commands() {
    let script = "new a\nadd b\nhead\ndisplay\nexit\nadd never\n";
    let output = tlist(&["repl"], Some(script));
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "a\na\nb\n");
}

#[test]
fn piped_repl_stops_on_error() {
    let output = tlist(&["repl"], Some("add 1\n"));
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1"), "stderr: {stderr}");
}

#[test]
fn extreme_numbers_print_like_javascript() {
    assert_eq!(stdout(&tlist(&["display", "1e21", "1e-7"], None)), "1e+21\n1e-7\n");
    assert_eq!(stdout(&tlist(&["transform", "1e400"], None)), "Infinity\n");
}

#[test]
fn optional_string_with_apostrophe_uses_double_quotes() {
    assert_eq!(
        stdout(&tlist(&["optional", "it's"], None)),
        "{ value: \"it's\" }\npresent: true\n"
    );
}
