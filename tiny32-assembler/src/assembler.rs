//! Two-pass assembly
//!
//! Pass 1 walks the source once to map label names to instruction indices,
//! tracking the pc exactly as pass 2 will. Pass 2 parses and encodes each
//! instruction line, resolving branches against the pass-1 table. The first
//! invalid line aborts the run.

use std::fs;
use std::path::Path;

use tiny32_isa::Program;

use crate::encoder::encode;
use crate::error::Result;
use crate::parser::{parse_instruction, LabelTable};

/// How a trimmed source line participates in assembly
enum Line<'a> {
    /// Blank, or a `#` comment: skipped, pc unchanged
    Skip,
    /// `name:` definition: records the current pc, pc unchanged
    Label(&'a str),
    /// Anything else: one instruction, pc advances by 1
    Instruction(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        Line::Skip
    } else if let Some(name) = line.strip_suffix(':') {
        Line::Label(name.trim())
    } else {
        Line::Instruction(line)
    }
}

/// Pass 1: collect labels. Performs no validation beyond line
/// classification; a duplicate definition silently overwrites the earlier
/// one (last write wins).
fn collect_labels(source: &str) -> LabelTable {
    let mut labels = LabelTable::new();
    let mut pc = 0;
    for line in source.lines() {
        match classify(line) {
            Line::Skip => {}
            Line::Label(name) => {
                labels.insert(name.to_string(), pc);
            }
            Line::Instruction(_) => pc += 1,
        }
    }
    labels
}

/// Assemble source text into a program
pub fn assemble(source: &str) -> Result<Program> {
    let labels = collect_labels(source);

    let mut code = Vec::new();
    let mut pc = 0;
    for (index, line) in source.lines().enumerate() {
        match classify(line) {
            Line::Skip | Line::Label(_) => {}
            Line::Instruction(text) => {
                let instr = parse_instruction(text, index + 1, &labels, pc)?;
                code.push(encode(&instr));
                pc += 1;
            }
        }
    }

    Ok(Program::new(code))
}

/// Read and assemble a source file
pub fn assemble_file(path: &Path) -> Result<Program> {
    let source = fs::read_to_string(path)?;
    assemble(&source)
}
