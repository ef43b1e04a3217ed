/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! `qpoly2json`: convert Barvinok piecewise quasipolynomials to JSON.
//!
//! # Usage
//!
//! - `qpoly2json` - convert `all-qpoly/*.qpoly` into `all-qpoly-json/*.json`
//! - `qpoly2json --input-dir in --output-dir out` - same with other directories
//! - `qpoly2json parse <file>` - print one file's JSON to stdout

use anyhow::Context;
use barvinok_qpoly::{convert_directory, parse_function_in_source, render_json, BatchOptions};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "qpoly2json")]
#[command(about = "Convert Barvinok piecewise quasipolynomials to JSON")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Directory scanned (non-recursively) for input files
    #[arg(long, default_value = "all-qpoly")]
    input_dir: PathBuf,
    /// Directory receiving the JSON files (created if missing)
    #[arg(long, default_value = "all-qpoly-json")]
    output_dir: PathBuf,
    /// Extension of the input files
    #[arg(long, default_value = "qpoly")]
    input_ext: String,
    /// Extension of the output files
    #[arg(long, default_value = "json")]
    output_ext: String,
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one file and print its JSON to stdout
    Parse {
        /// File to parse
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Some(Commands::Parse { file }) => {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read '{}'", file.display()))?;
            let function = parse_function_in_source(&source, &file.display().to_string())?;
            println!("{}", render_json(&function)?);
        }
        None => {
            let options = BatchOptions {
                input_extension: cli.input_ext,
                output_extension: cli.output_ext,
            };
            let report = convert_directory(&cli.input_dir, &cli.output_dir, &options)?;
            info!("Converted {} file(s)", report.converted.len());
        }
    }
    Ok(())
}
