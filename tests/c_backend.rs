//! Compiles generated C with the system `cc` and checks that it behaves
//! like the built-in tape machine. Skipped when `cc` is missing.
//!
//! The C program reads and writes raw bytes, so input is fed one byte per
//! character (code point modulo 256) and output compared the same way.

use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use brainsnake::{compile, execute, settings::Settings, Target};

fn cc_available() -> bool {
    Command::new("cc")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn to_bytes(s: &str) -> Vec<u8> {
    s.chars().map(|c| (u32::from(c) % 256) as u8).collect()
}

/// Build `code` into a fresh directory and return the executable path.
fn build(code: &str, name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("brainsnake-c-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let src = dir.join("prog.c");
    let exe = dir.join("prog");
    fs::write(&src, code).unwrap();
    let out = Command::new("cc")
        .arg("-std=c99")
        .arg("-o")
        .arg(&exe)
        .arg(&src)
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "cc failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    exe
}

fn run_c(exe: &PathBuf, input: &[u8]) -> Vec<u8> {
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    out.stdout
}

const CASES: &[(&str, &str)] = &[
    ("", ""),
    ("+.", ""),
    (",.", "A"),
    (",.", ""),
    (",.", "é"),
    (",+.", "\u{ff}"),
    ("-.<+.", ""),
    ("+++[>+++++<-]>.", ""),
    (">,>,<.<.", "AB"),
    ("[]+[-[]].", ""),
    (">,[>,]<[.<]", "stressed"),
    (",[.,]", "naïve ÿ"),
    (
        "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.",
        "",
    ),
];

#[test]
fn test_generated_c_matches_interpreter() {
    if !cc_available() {
        eprintln!("cc not found, skipping");
        return;
    }
    let settings = Settings::default().with_target(Target::C);
    for (idx, &(src, input)) in CASES.iter().enumerate() {
        let expected = execute(src, input, &settings).unwrap();
        let exe = build(&compile(src, &settings).unwrap(), &idx.to_string());
        assert_eq!(
            run_c(&exe, &to_bytes(input)),
            to_bytes(&expected),
            "C run of {src:?}"
        );
    }
}

#[test]
fn test_generated_c_small_tape() {
    if !cc_available() {
        return;
    }
    let settings = Settings::default().with_tape_size(3).with_target(Target::C);
    let src = "<+++>>>.<.";
    let expected = execute(src, "", &settings).unwrap();
    assert_eq!(expected, "\u{3}\u{0}");
    let exe = build(&compile(src, &settings).unwrap(), "small-tape");
    assert_eq!(run_c(&exe, b""), to_bytes(&expected));
}
