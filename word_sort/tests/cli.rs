use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};

fn word_sort<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_word_sort"))
        .args(args)
        .env_remove("WORD_SORT_OUTPUT")
        .env_remove("WORD_SORT_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn sorts_words() {
    let output = word_sort(&["thing stuff otherstuff blarp"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "blarp\notherstuff\nstuff\nthing\n");
}

#[test]
fn duplicates_and_case() {
    let output = word_sort(&["aand, aAnd, and AND, and"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "AND\naAnd\naand\nand\n");
}

#[test]
fn leading_hyphen_is_input() {
    let output = word_sort(&["-hello world"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello\nworld\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_input() {
    use std::os::unix::ffi::OsStrExt;

    let output = word_sort(&[OsStr::from_bytes(b"caf\xe9 bar")]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "bar\ncaf\n");
}

#[test]
fn empty_input() {
    let output = word_sort(&["123 456"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn wrong_argument_count() {
    let output = word_sort::<&str>(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid number of arguments (0) provided"), "{stderr}");

    let output = word_sort(&["one", "two"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid number of arguments (2) provided"), "{stderr}");
    assert_eq!(stdout(&output), "");
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sorted.txt");
    let output = word_sort(&[
        "--output",
        path.to_str().unwrap(),
        "banana apple cherry apple",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(fs::read_to_string(&path).unwrap(), "apple\nbanana\ncherry\n");
}

#[test]
fn unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("sorted.txt");
    let output = word_sort(&["--output", path.to_str().unwrap(), "a"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open output file"), "{stderr}");
}

#[test]
fn logs_go_to_stderr() {
    let output = word_sort(&["--log", "debug", "b a"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a\nb\n");
}
