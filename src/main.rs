use std::{
    io::{self, Write},
    path::PathBuf,
};

use thiserror::Error;
use tracing::trace;
use tracing_subscriber::EnvFilter;

use brainsnake::{
    generate, parse_source, run_program, settings::Settings, ExecuteCallbackData, ParseError,
    Target,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Parsing error: {0}")]
    ParserError(#[from] ParseError),
    #[error("{0}")]
    Toolchain(#[from] brainsnake::Error),
    #[error("Either a source file or --code must be given")]
    NoSource,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    /// Interpret the program
    Interpret,
    /// Generate Python code for the program
    GenPython,
    /// Generate C code for the program
    GenC,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Brainfuck source file
    input_file: Option<PathBuf>,

    /// Brainfuck source given directly on the command line
    #[arg(short, long, conflicts_with = "input_file")]
    code: Option<String>,

    /// Input data for the program
    #[arg(short, long, default_value = "")]
    input: String,

    /// Number of tape cells
    #[arg(short, long, default_value_t = brainsnake::settings::DEFAULT_TAPE_SIZE)]
    memory: usize,

    /// Select program mode
    #[arg(long, value_name = "MODE")]
    mode: Option<Mode>,

    /// Only translate to Python, same as `--mode gen-python`
    #[arg(long, default_value_t = false, conflicts_with = "mode")]
    compile_only: bool,

    /// Write generated code here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Abort after executing this many instructions
    #[arg(long)]
    step_limit: Option<u64>,

    /// Log every executed instruction
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();

    let default_filter = if args.trace {
        "brainsnake=trace"
    } else {
        "brainsnake=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();

    let source = match (&args.code, &args.input_file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => String::from_utf8_lossy(&std::fs::read(path)?).into_owned(),
        (None, None) => return Err(ProgramError::NoSource),
    };

    let mut settings = Settings::default().with_tape_size(args.memory);
    if let Some(limit) = args.step_limit {
        settings = settings.with_step_limit(limit);
    }
    settings.validate().map_err(brainsnake::Error::from)?;

    let mode = match (args.mode, args.compile_only) {
        (Some(mode), _) => mode,
        (None, true) => Mode::GenPython,
        (None, false) => Mode::Interpret,
    };

    let program = parse_source(&source)?;

    match mode {
        Mode::Interpret => {
            let trace_on = args.trace;
            let output = run_program(&program, &args.input, &settings, |data, tp| {
                if let (true, ExecuteCallbackData::Step { pc, instr }) = (trace_on, data) {
                    trace!(pc, %instr, tape_ptr = %tp, "step");
                }
            })?;
            // One byte per cell written, not UTF-8.
            let bytes: Vec<u8> = output.chars().map(|c| c as u32 as u8).collect();
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
        Mode::GenPython | Mode::GenC => {
            let target = if mode == Mode::GenC {
                Target::C
            } else {
                Target::Python
            };
            let code = generate(&program, settings.tape_size, target);
            match args.output {
                Some(path) => {
                    std::fs::write(&path, code)?;
                    eprintln!("Generated code written to {}", path.display());
                }
                None => print!("{code}"),
            }
        }
    }

    Ok(())
}
