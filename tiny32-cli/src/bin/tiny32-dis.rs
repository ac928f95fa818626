//! Disassembler front end: binary instruction stream in, mnemonic text out.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tiny32_disassembler::disassemble;
use tiny32_isa::Program;

/// Disassemble a Tiny32 binary into mnemonic text
#[derive(Parser)]
#[command(name = "tiny32-dis", version)]
struct Args {
    /// Input binary file
    input: PathBuf,

    /// Output assembly file
    #[arg(short, long, default_value = "out.s")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let bytes = fs::read(&args.input)
        .with_context(|| format!("cannot open input: {}", args.input.display()))?;

    // a trailing partial word is dropped, not an error
    let program = Program::from_bytes(&bytes);
    let text = disassemble(&program);

    fs::write(&args.output, text)
        .with_context(|| format!("cannot open output: {}", args.output.display()))?;

    println!("Wrote {}", args.output.display());
    Ok(())
}
