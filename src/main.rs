use anyhow::Result;
use binutils::{clap, verbose};
use clap::Parser;
use cycles_test::{check, Recording, Reference};

/// Check the instruction timings recorded by the emulator against the
/// reference opcode table.
///
/// Exits with status 1 if any recorded cycle count is not allowed for its
/// opcode.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    styles = binutils::get_styles(),
)]
struct Args {
    /// Path to the opcode table (JSON)
    #[arg(long, default_value = "./opcodes.json")]
    spec: String,

    /// Path to the execution log written by the emulator
    #[arg(long, default_value = "mine.txt")]
    recording: String,

    /// Do not colour the summary line
    #[arg(long)]
    no_color: bool,

    #[command(flatten)]
    verbose: verbose::Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = binutils::verbose_level_to_trace(args.verbose.log_level());
    binutils::logging_setup(log_level, None::<std::fs::File>);

    let reference = Reference::load(&args.spec)?;
    let recording = Recording::load(&args.recording)?;
    let report = check(&reference, &recording)?;

    for mismatch in &report.mismatches {
        println!("{}", mismatch);
    }

    if !report.passed() {
        let summary = report.summary();
        if args.no_color {
            println!("{}", summary);
        } else {
            println!("{}", ansi_term::Colour::Red.bold().paint(summary));
        }
        std::process::exit(1);
    }
    Ok(())
}
