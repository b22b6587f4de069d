//! Extract the plain text of RTF files.
//!
//! Run with:
//! ```bash
//! cargo run --example rtf2txt -- document.rtf
//! RUST_LOG=contexto=debug cargo run --example rtf2txt -- --codepage 1251 --output out.txt document.rtf
//! ```

use clap::Parser;
use contexto::{RtfReadOptions, RtfReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rtf2txt", about = "Extract plain text from RTF files")]
struct Args {
    /// RTF files to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Windows code page for files that are not UTF-8
    #[arg(long, default_value_t = 1252)]
    codepage: u32,

    /// Reject files larger than this many bytes
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Reject files without an RTF header
    #[arg(long)]
    strict: bool,

    /// Write the text here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = RtfReadOptions::new()
        .with_codepage(args.codepage)?
        .with_max_input_len(args.max_bytes)
        .with_require_header(args.strict);
    let reader = RtfReader::new(options);

    let mut combined = String::new();
    for path in &args.files {
        match reader.read_file(path) {
            Ok(text) => {
                combined.push_str(&text);
                if !text.ends_with('\n') {
                    combined.push('\n');
                }
            },
            Err(e) => eprintln!("Could not convert {}: {}", path.display(), e),
        }
    }

    match &args.output {
        Some(path) => std::fs::write(path, combined)?,
        None => print!("{combined}"),
    }
    Ok(())
}
