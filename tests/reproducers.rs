//! This test all the regressions in the regressions directory.

use std::{env, error::Error, path::PathBuf};

use brainsnake::{
    execute, parse_source,
    settings::{Settings, DEFAULT_TAPE_SIZE},
    test_utils::compare_with_reference,
};

const MAX_STEPS: u64 = 5_000_000;

fn find_regressions() -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut path: PathBuf = env::var("CARGO_MANIFEST_DIR")?.into();
    path.push("tests");
    path.push("regressions");

    let mut results = vec![];
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some("bf") = path.extension().and_then(|x| x.to_str()) {
            results.push(path);
        }
    }
    results.sort();
    Ok(results)
}

fn run_reproducer(
    reproducer: &PathBuf,
    input: Option<PathBuf>,
    expected_output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let src = std::fs::read_to_string(reproducer)?;
    let out = std::fs::read(&expected_output)?;
    let input = match input {
        Some(f) => std::fs::read_to_string(f)?,
        None => String::new(),
    };

    let settings = Settings::default().with_step_limit(MAX_STEPS);
    let output = execute(&src, &input, &settings)?;
    // Every output character is a single byte cell value.
    let output_bytes: Vec<u8> = output.chars().map(|c| c as u32 as u8).collect();
    assert_eq!(output_bytes, out);

    let program = parse_source(&src)?;
    compare_with_reference(&program, DEFAULT_TAPE_SIZE, &input, MAX_STEPS);

    Ok(())
}

#[test]
fn test_regressions() {
    let reproducers = find_regressions().unwrap();
    assert!(!reproducers.is_empty());
    for reproducer in reproducers {
        let in_file = reproducer.with_extension("in");
        let in_file = if in_file.exists() {
            Some(in_file)
        } else {
            None
        };
        let out_file = reproducer.with_extension("out");
        match run_reproducer(&reproducer, in_file, out_file) {
            Ok(_) => (),
            Err(err) => panic!("{err:?} {reproducer:?}"),
        }
    }
}

#[test]
fn test_reference_agreement() {
    let programs = [
        ("", ""),
        ("+.", ""),
        (",.", "A"),
        (",.", ""),
        ("+++[>+++++<-]>.", ""),
        ("++[>+++[>++++<-]<-]>>.", ""),
        (">++[<+++>-]<.", ""),
        ("<<<+>>>-[<+>-]", ""),
        (",+[-.,+]", "hello"),
        ("+[>+<+]", ""),
        ("[[[]]]+[[-]]", ""),
    ];
    for (src, input) in programs {
        let program = parse_source(src).unwrap();
        compare_with_reference(&program, 7, input, 10_000);
        compare_with_reference(&program, DEFAULT_TAPE_SIZE, input, 10_000);
    }
}
