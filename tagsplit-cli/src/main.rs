use std::{
    io::{self, BufReader, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Splits inline tag lines into separate tag and text lines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to reformat; the result is written next to it with `_parsed`
    /// appended to the file stem
    #[arg(required_unless_present = "stdin")]
    file: Option<PathBuf>,

    /// Read the document from stdin and write the reformatted result to
    /// stdout
    #[arg(long, conflicts_with = "file")]
    stdin: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let args = Args::parse();

    if args.stdin {
        handle_stdin()?;
    } else if let Some(file) = &args.file {
        handle_file(file)?;
    }

    Ok(())
}

#[tracing::instrument]
fn handle_stdin() -> Result<()> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let mut stdout = io::stdout();
    tagsplit_reformat::write_to(&input, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

#[tracing::instrument]
fn handle_file(file: &Path) -> Result<()> {
    let output_path = tagsplit_reformat::process_file(file)?;
    println!("Generated parsed file: {}", output_path.to_string_lossy());
    Ok(())
}
