//! smdsum - checksum verifier and repair tool for Sega Mega Drive/Genesis ROMs
//!
//! Usage: smdsum [OPTIONS] <rom>

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use smd_checksum::driver::{self, Outcome};
use smd_checksum::rom::RomImage;

#[derive(Parser, Debug)]
#[command(name = "smdsum")]
#[command(author = "SMD-SDK Team")]
#[command(version = "0.1.0")]
#[command(about = "Verifies and repairs the header checksum of a Sega Mega Drive/Genesis ROM", long_about = None)]
struct Args {
    /// ROM image file (.md, .gen, .bin)
    #[arg(required = true)]
    rom: PathBuf,

    /// Repair a mismatched checksum without prompting
    #[arg(short, long)]
    yes: bool,

    /// Report only, never modify the file; exits 1 on mismatch
    #[arg(short, long, conflicts_with = "yes")]
    check: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut image = RomImage::open(&args.rom)
        .with_context(|| format!("cannot open {}", args.rom.display()))?;

    if args.verbose {
        eprintln!("ROM size: {} bytes ({} KB)", image.size(), image.size() / 1024);
    }

    let outcome = driver::run(&mut image, |stored, computed| {
        println!("Header checksum   = {stored:#06X}");
        println!("Computed checksum = {computed:#06X}");
        println!("WARNING: checksums do not match");
        if args.check {
            false
        } else if args.yes {
            true
        } else {
            confirm("Update the header checksum to the computed value? (y/n) ")
        }
    })
    .with_context(|| format!("{}", args.rom.display()))?;

    match outcome {
        Outcome::Match { checksum } => {
            println!("Header checksum   = {checksum:#06X}");
            println!("Computed checksum = {checksum:#06X}");
            println!("Checksums match.");
        }
        Outcome::Declined { .. } => {
            // Both values were already printed before the prompt
            if args.check {
                process::exit(1);
            }
            println!("Header left unchanged.");
        }
        Outcome::Repaired { new, .. } => {
            println!("Header checksum updated to {new:#06X} and verified.");
        }
    }

    Ok(())
}

/// Ask a y/n question on stdout, re-prompting until the answer is one or the
/// other. EOF counts as "n".
fn confirm(prompt: &str) -> bool {
    let stdin = io::stdin();
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }
        match line.trim() {
            "y" | "Y" => return true,
            "n" | "N" => return false,
            _ => {}
        }
    }
}
