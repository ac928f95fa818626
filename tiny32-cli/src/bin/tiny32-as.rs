//! Assembler front end: source text in, binary instruction stream out.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tiny32_assembler::assemble_file;

/// Assemble Tiny32 source into a binary instruction stream
#[derive(Parser)]
#[command(name = "tiny32-as", version)]
struct Args {
    /// Input assembly file
    input: PathBuf,

    /// Output binary file
    #[arg(short, long, default_value = "out.bin")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let program = assemble_file(&args.input)
        .with_context(|| format!("cannot assemble {}", args.input.display()))?;

    fs::write(&args.output, program.to_bytes())
        .with_context(|| format!("cannot open output: {}", args.output.display()))?;

    println!("Wrote {}", args.output.display());
    Ok(())
}
