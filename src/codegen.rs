//! Code generation

use crate::ast::{Instr, Program};

/// Language to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// A Python 3 module defining `bf_program(input_data)`.
    #[default]
    Python,
    /// A standalone C program using stdin/stdout.
    C,
}

/// Generate code for `program` in the chosen target language.
pub fn generate(program: &Program, tape_size: usize, target: Target) -> String {
    match target {
        Target::Python => generate_python(program, tape_size),
        Target::C => generate_c(program, tape_size),
    }
}

/// Generate Python code
///
/// The result defines `bf_program(input_data)` and binds its return value
/// to `result`, reading the input from a global `input_data` when executed
/// in a namespace, or from stdin when run as a script.
pub fn generate_python(program: &Program, tape_size: usize) -> String {
    lower(program, tape_size, &PythonEmitter)
}

/// Generate C code
///
/// The program reads stdin and writes stdout one byte per cell, so it agrees
/// with [`crate::execute`] when each input character is fed as the byte
/// `code point % 256`.
pub fn generate_c(program: &Program, tape_size: usize) -> String {
    lower(program, tape_size, &CEmitter)
}

/// Accumulates output lines at a given indentation depth.
struct CodeWriter {
    buf: String,
    unit: &'static str,
}

impl CodeWriter {
    fn new(unit: &'static str) -> Self {
        Self {
            buf: String::new(),
            unit,
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.buf += indent(self.unit, depth).as_str();
        self.buf += text;
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }
}

/// One function body being written.
struct Frame {
    w: CodeWriter,
    depth: usize,
    /// One entry per open loop, true once something was emitted inside it.
    blocks: Vec<bool>,
}

impl Frame {
    fn new(unit: &'static str, depth: usize) -> Self {
        Self {
            w: CodeWriter::new(unit),
            depth,
            blocks: Vec::new(),
        }
    }

    fn mark_body(&mut self) {
        if let Some(has_body) = self.blocks.last_mut() {
            *has_body = true;
        }
    }
}

/// Target specific syntax. The block structure itself is tracked by [`lower`].
trait Emitter {
    /// One level of indentation.
    fn indent_unit(&self) -> &'static str;
    /// Depth of the top level program body.
    fn body_depth(&self) -> usize;
    fn preamble(&self, w: &mut CodeWriter, tape_size: usize);
    /// Emit a non-loop instruction.
    fn op(&self, w: &mut CodeWriter, depth: usize, instr: Instr);
    fn open_loop(&self, w: &mut CodeWriter, depth: usize);
    /// `depth` is the depth of the loop header. `has_body` is false for `[]`.
    fn close_loop(&self, w: &mut CodeWriter, depth: usize, has_body: bool);
    fn postamble(&self, w: &mut CodeWriter);

    /// Loops one function may nest. A loop opened below that is moved into
    /// a helper function of its own. `None` means no limit.
    fn max_nesting(&self) -> Option<usize> {
        None
    }

    /// Header of a helper holding one loop. Returns the depth of its body.
    fn begin_helper(&self, _w: &mut CodeWriter, _name: &str) -> usize {
        self.body_depth()
    }

    fn call_helper(&self, _w: &mut CodeWriter, _depth: usize, _name: &str) {}
}

/// Walk the instruction stream, keeping an explicit stack of open blocks.
///
/// Helpers are written out between the preamble and the program body, in
/// the order they are finished.
fn lower(program: &Program, tape_size: usize, emitter: &impl Emitter) -> String {
    let unit = emitter.indent_unit();
    let mut head = CodeWriter::new(unit);
    emitter.preamble(&mut head, tape_size);

    let mut body = Frame::new(unit, emitter.body_depth());
    // Helpers still being written, innermost last.
    let mut open: Vec<Frame> = Vec::new();
    let mut done: Vec<String> = Vec::new();
    let mut helper_count = 0;
    for &instr in program.instructions() {
        match instr {
            Instr::BeginLoop => {
                let spill = {
                    let frame = open.last_mut().unwrap_or(&mut body);
                    frame.mark_body();
                    emitter
                        .max_nesting()
                        .is_some_and(|max| frame.blocks.len() >= max)
                };
                if spill {
                    let name = format!("loop_{helper_count}");
                    helper_count += 1;
                    let caller = open.last_mut().unwrap_or(&mut body);
                    emitter.call_helper(&mut caller.w, caller.depth, &name);
                    let mut helper = Frame::new(unit, 0);
                    helper.depth = emitter.begin_helper(&mut helper.w, &name);
                    open.push(helper);
                }
                let frame = open.last_mut().unwrap_or(&mut body);
                emitter.open_loop(&mut frame.w, frame.depth);
                frame.blocks.push(false);
                frame.depth += 1;
            }
            Instr::EndLoop => {
                let frame = open.last_mut().unwrap_or(&mut body);
                // Always Some, brackets are balanced in a Program.
                if let Some(has_body) = frame.blocks.pop() {
                    frame.depth -= 1;
                    emitter.close_loop(&mut frame.w, frame.depth, has_body);
                }
                // A helper holds exactly one loop.
                if open.last().is_some_and(|f| f.blocks.is_empty()) {
                    if let Some(mut helper) = open.pop() {
                        helper.w.blank();
                        done.push(helper.w.buf);
                    }
                }
            }
            op => {
                let frame = open.last_mut().unwrap_or(&mut body);
                frame.mark_body();
                emitter.op(&mut frame.w, frame.depth, op);
            }
        }
    }

    emitter.postamble(&mut body.w);
    let mut out = head.buf;
    for helper in done {
        out += &helper;
    }
    out += &body.w.buf;
    out
}

const PYTHON_MAX_NESTING: usize = 16;

struct PythonEmitter;

impl Emitter for PythonEmitter {
    fn indent_unit(&self) -> &'static str {
        "    "
    }

    fn body_depth(&self) -> usize {
        1
    }

    fn preamble(&self, w: &mut CodeWriter, tape_size: usize) {
        w.line(0, "def bf_program(input_data):");
        w.line(1, format!("memory_size = {tape_size}").as_str());
        w.line(1, "memory = [0] * memory_size");
        w.line(1, "pointer = 0");
        w.line(1, "output = []");
        w.line(1, "input_iter = iter(input_data)");
        w.blank();
    }

    fn op(&self, w: &mut CodeWriter, depth: usize, instr: Instr) {
        match instr {
            Instr::Right => w.line(depth, "pointer = (pointer + 1) % memory_size"),
            Instr::Left => w.line(depth, "pointer = (pointer + memory_size - 1) % memory_size"),
            Instr::Add => w.line(depth, "memory[pointer] = (memory[pointer] + 1) % 256"),
            Instr::Subtract => w.line(depth, "memory[pointer] = (memory[pointer] + 255) % 256"),
            Instr::Output => w.line(depth, "output.append(chr(memory[pointer]))"),
            Instr::Input => {
                w.line(depth, "try:");
                w.line(depth + 1, "memory[pointer] = ord(next(input_iter)) % 256");
                w.line(depth, "except StopIteration:");
                w.line(depth + 1, "memory[pointer] = 0");
            }
            Instr::BeginLoop | Instr::EndLoop => unreachable!("loops are lowered by the caller"),
        }
    }

    fn open_loop(&self, w: &mut CodeWriter, depth: usize) {
        w.line(depth, "while memory[pointer] != 0:");
    }

    fn close_loop(&self, w: &mut CodeWriter, depth: usize, has_body: bool) {
        // Python has no empty blocks.
        if !has_body {
            w.line(depth + 1, "pass");
        }
    }

    // CPython allows 20 statically nested blocks per function, and `,`
    // lowers to a try/except.
    fn max_nesting(&self) -> Option<usize> {
        Some(PYTHON_MAX_NESTING)
    }

    fn begin_helper(&self, w: &mut CodeWriter, name: &str) -> usize {
        w.line(1, format!("def {name}():").as_str());
        w.line(2, "nonlocal pointer");
        2
    }

    fn call_helper(&self, w: &mut CodeWriter, depth: usize, name: &str) {
        w.line(depth, format!("{name}()").as_str());
    }

    fn postamble(&self, w: &mut CodeWriter) {
        w.blank();
        w.line(1, "return ''.join(output)");
        w.blank();
        w.blank();
        w.line(0, "if __name__ == '__main__':");
        w.line(1, "import sys");
        w.line(1, "result = bf_program(sys.stdin.read())");
        w.line(1, "sys.stdout.write(result)");
        w.line(0, "else:");
        w.line(1, "result = bf_program(globals().get('input_data', ''))");
    }
}

struct CEmitter;

impl Emitter for CEmitter {
    fn indent_unit(&self) -> &'static str {
        "  "
    }

    fn body_depth(&self) -> usize {
        1
    }

    fn preamble(&self, w: &mut CodeWriter, tape_size: usize) {
        w.line(0, "#include <stddef.h>");
        w.line(0, "#include <stdio.h>");
        w.blank();
        w.line(0, format!("#define TAPE_SIZE {tape_size}").as_str());
        w.blank();
        w.line(0, "static unsigned char tape[TAPE_SIZE] = { 0 };");
        w.blank();
        w.line(0, "int main(void) {");
        w.line(1, "size_t ptr = 0;");
        w.line(1, "int c = 0;");
        w.line(1, "(void)c;");
        w.blank();
    }

    fn op(&self, w: &mut CodeWriter, depth: usize, instr: Instr) {
        match instr {
            Instr::Right => w.line(depth, "ptr = (ptr + 1) % TAPE_SIZE;"),
            Instr::Left => w.line(depth, "ptr = (ptr + TAPE_SIZE - 1) % TAPE_SIZE;"),
            Instr::Add => w.line(depth, "tape[ptr]++;"),
            Instr::Subtract => w.line(depth, "tape[ptr]--;"),
            Instr::Output => w.line(depth, "putchar(tape[ptr]);"),
            Instr::Input => {
                w.line(depth, "c = getchar();");
                w.line(depth, "tape[ptr] = c == EOF ? 0 : (unsigned char)c;");
            }
            Instr::BeginLoop | Instr::EndLoop => unreachable!("loops are lowered by the caller"),
        }
    }

    fn open_loop(&self, w: &mut CodeWriter, depth: usize) {
        w.line(depth, "while (tape[ptr]) {");
    }

    fn close_loop(&self, w: &mut CodeWriter, depth: usize, _has_body: bool) {
        w.line(depth, "}");
    }

    fn postamble(&self, w: &mut CodeWriter) {
        w.blank();
        w.line(1, "return 0;");
        w.line(0, "}");
    }
}

/// Compute the indentation string for a given indentation level.
fn indent(unit: &str, i: usize) -> String {
    unit.repeat(i)
}
