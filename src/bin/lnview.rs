use std::process;

use clap::Parser;

use lnedit::cli::read_input;
use lnedit::{add_line_numbers, add_line_numbers_range};

/// Print a file with right-aligned line numbers: `  <lineno> | <content>`.
#[derive(Debug, Parser)]
#[command(name = "lnview", version)]
struct Args {
    /// File to view, or `-` for stdin.
    file: String,
    /// First line to show (1-based).
    start_line: Option<usize>,
    /// Last line to show (1-based, inclusive). Defaults to `start_line`.
    end_line: Option<usize>,
}

fn main() {
    lnedit::init_logging();
    let args = Args::parse();

    let input = match read_input(&args.file) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    };

    let out = match args.start_line {
        None => add_line_numbers(&input.text),
        Some(start) => {
            let end = args.end_line.unwrap_or(start);
            match add_line_numbers_range(&input.text, start, end) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(2);
                }
            }
        }
    };
    tracing::debug!(file = %args.file, "rendered numbered view");
    println!("{out}");
}
