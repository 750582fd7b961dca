//! End-to-end tests of the `marktag` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn marktag(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_marktag"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run marktag")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).unwrap()
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = marktag(&["nothing_here.md"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("error: the file cannot be found: nothing_here.md"));
}

#[test]
fn latin1_source_is_converted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("latin1.md"), b"caf\xe9 **x**").unwrap();

    let output = marktag(&["latin1.md", "-f", "html"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "<p>caf\u{FFFD} <b>x</b></p>\n");
}

#[test]
fn md_extension_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("note.md"), "Hi, I am title!").unwrap();

    let output = marktag(&["note", "-f", "html"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "<p>Hi, I am title!</p>\n");
}

#[test]
fn terminal_defaults_to_ansi() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bold.md"), "**hi**").unwrap();

    let output = marktag(&["bold.md"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "\x1b[1mhi\x1b[0m\n");
}

#[test]
fn output_file_defaults_to_html() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "one\r\n_two_").unwrap();

    let output = marktag(&["doc.md", "-o", "doc.html"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));

    let expected = "<p>one</p>\n<p><i>two</i></p>\n";
    assert_eq!(stdout(&output), expected);
    assert_eq!(fs::read_to_string(dir.path().join("doc.html")).unwrap(), expected);
}

#[test]
fn explicit_format_applies_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "`x`").unwrap();

    let output = marktag(&["doc.md", "--output", "doc.txt", "--format", "ansi"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        fs::read_to_string(dir.path().join("doc.txt")).unwrap(),
        "\x1b[33mx\x1b[0m\n"
    );
}

#[test]
fn invalid_format_lists_choices() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "text").unwrap();

    let output = marktag(&["doc.md", "-f", "zzz"], dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("allowed choices are html, ansi"));
}

#[test]
fn syntax_error_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.md"), "**one** **two").unwrap();

    let output = marktag(&["bad.md", "-o", "bad.html"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("unbalanced `**` markers"));
    assert!(!dir.path().join("bad.html").exists());
}

#[test]
fn failed_output_write_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "fine").unwrap();

    let output = marktag(&["doc.md", "-o", "missing/dir/out.html"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("failed to write output"));
}

#[test]
fn escape_flag_escapes_html_text() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "a < b").unwrap();

    let raw = marktag(&["doc.md", "-f", "html"], dir.path());
    assert_eq!(stdout(&raw), "<p>a < b</p>\n");

    let escaped = marktag(&["doc.md", "-f", "html", "--escape-html"], dir.path());
    assert_eq!(stdout(&escaped), "<p>a &lt; b</p>\n");

    let ansi = marktag(&["doc.md", "-f", "ansi", "--escape-html"], dir.path());
    assert_eq!(stdout(&ansi), "a < b\n");
}

#[test]
fn logs_stay_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("doc.md"), "_x_").unwrap();

    let output = marktag(&["doc.md", "-f", "html", "-vvv"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "<p><i>x</i></p>\n");
}
