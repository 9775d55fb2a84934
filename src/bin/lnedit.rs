use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use lnedit::cli::{read_input, read_stdin_text, write_atomic};
use lnedit::{
    add_line_numbers, update_content_by_block, update_content_by_line_number, EditRequest,
    UpdateResult,
};

/// Replace a line or a block of lines in a file, addressed by 1-based line numbers.
///
/// Default mode edits FILE in place and prints the numbered result.
/// With `-` as FILE the buffer is read from stdin and nothing is written.
#[derive(Debug, Parser)]
#[command(name = "lnedit", version)]
struct Args {
    /// Do not write the file; only print what it would become.
    #[arg(long, global = true)]
    dry_run: bool,
    /// Print the edit outcome as JSON instead of a numbered view.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    op: Op,
}

#[derive(Debug, Subcommand)]
enum Op {
    /// Replace one line with TEXT.
    Line {
        /// File to edit, or `-` for stdin.
        file: String,
        #[arg(allow_hyphen_values = true)]
        line_number: String,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Replace lines START..=END with TEXT (read from stdin when omitted).
    Block {
        /// File to edit, or `-` for stdin.
        file: String,
        #[arg(allow_hyphen_values = true)]
        start_line: String,
        #[arg(allow_hyphen_values = true)]
        end_line: String,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    /// Apply a JSON tool-call request, e.g.
    /// `{"tool":"update_content_by_line_number","line_number":"2","new_content":"x"}`.
    Apply {
        /// File to edit, or `-` for stdin.
        file: String,
        request: String,
    },
}

impl Op {
    fn file(&self) -> &str {
        match self {
            Op::Line { file, .. } | Op::Block { file, .. } | Op::Apply { file, .. } => file,
        }
    }
}

fn main() {
    lnedit::init_logging();
    let args = Args::parse();
    let file = args.op.file();
    let stdin_mode = file == "-";

    let input = match read_input(file) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    };

    let result = match &args.op {
        Op::Line {
            line_number, text, ..
        } => update_content_by_line_number(&input.text, line_number, text),
        Op::Block {
            start_line,
            end_line,
            text,
            ..
        } => {
            let text = match text {
                Some(t) => t.clone(),
                None if stdin_mode => {
                    eprintln!("error: block text must be given as an argument when reading the buffer from stdin");
                    process::exit(2);
                }
                None => match read_stdin_text() {
                    Ok(t) => t,
                    Err(e) => {
                        eprintln!("error: {e:#}");
                        process::exit(1);
                    }
                },
            };
            update_content_by_block(&input.text, start_line, end_line, &text)
        }
        Op::Apply { request, .. } => match EditRequest::from_json(request) {
            Ok(req) => req.apply(&input.text),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(2);
            }
        },
    };

    let updated = match &result.updated_text {
        Some(text) if result.success => text.clone(),
        _ => {
            if args.json {
                print_json(&result);
            }
            eprintln!("error: {}", result.message);
            process::exit(2);
        }
    };

    if !stdin_mode && !args.dry_run {
        if let Err(e) = write_atomic(Path::new(file), &input.render(&updated)) {
            eprintln!("error: failed to write {file}: {e}");
            process::exit(1);
        }
        tracing::info!(file, "{}", result.message);
    }

    if args.json {
        print_json(&result);
    } else {
        println!("{}", add_line_numbers(&updated));
    }
}

fn print_json(result: &UpdateResult) {
    match serde_json::to_string(result) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("error: failed to encode result: {e}");
            process::exit(1);
        }
    }
}
