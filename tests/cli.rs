//! Runs the command line binary.

use std::process::Command;

use brainsnake::{compile, settings::Settings, Target};

fn brainsnake() -> Command {
    Command::new(env!("CARGO_BIN_EXE_brainsnake"))
}

#[test]
fn test_output_file_is_confirmed() {
    let path = std::env::temp_dir().join(format!("brainsnake-cli-{}.py", std::process::id()));
    let out = brainsnake()
        .args(["--code", "++[->+<]>.", "--compile-only", "-o"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(
        stderr.contains(&format!("Generated code written to {}", path.display())),
        "stderr was {stderr:?}"
    );
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, compile("++[->+<]>.", &Settings::default()).unwrap());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_gen_c_to_stdout() {
    let out = brainsnake()
        .args(["--code", "+.", "--mode", "gen-c", "-m", "16"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let expected = compile("+.", &Settings::default().with_tape_size(16).with_target(Target::C)).unwrap();
    assert_eq!(String::from_utf8(out.stdout).unwrap(), expected);
}

#[test]
fn test_interpret_writes_raw_bytes() {
    let out = brainsnake()
        .args(["--code", ",.-.", "--input", "é"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, vec![0xe9, 0xe8]);
}

#[test]
fn test_syntax_error_fails() {
    let out = brainsnake().args(["--code", "+]"]).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
