//! # brainsnake - A Brainfuck interpreter and translator
//!
//! Source text is filtered down to the eight operators, checked for balanced
//! brackets and then either run on a fixed size circular tape
//! ([`execute`]) or lowered to Python or C source ([`compile`]).
//!
//! ```
//! use brainsnake::{compile, execute, settings::Settings};
//!
//! let out = execute("+++[>+++++<-]>.", "", &Settings::default()).unwrap();
//! assert_eq!(out, "\u{f}");
//!
//! let py = compile("++[->+<]", &Settings::default()).unwrap();
//! assert!(py.contains("while memory[pointer] != 0:"));
//! ```

// Re-export some symbols.
pub use ast::Instr;
pub use ast::Program;
pub use brackets::BracketMap;
pub use brackets::ParseError;
pub use codegen::generate;
pub use codegen::generate_c;
pub use codegen::generate_python;
pub use codegen::Target;
pub use driver::compile;
pub use driver::execute;
pub use driver::run_program;
pub use driver::Error;
pub use interpreter::ExecuteCallbackData;
pub use interpreter::ExecuteCallbackResult;
pub use interpreter::ExecutionError;
pub use parser::parse_source;
pub use types::BfNum;
pub use types::TapeAddr;
pub use types::TapeError;

pub mod ast;
pub mod brackets;
mod codegen;
mod driver;
pub mod interpreter;
mod parser;
pub mod settings;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
