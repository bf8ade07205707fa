use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use sml_interpreter::{execute, repl};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Runs a script written in the sml block language, or starts an interactive
/// prompt when no script is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run.
    #[arg(conflicts_with = "command")]
    file: Option<PathBuf>,

    /// Run the given program text instead of a file.
    #[arg(short, long)]
    command: Option<String>,
}

/// Logs go to stderr and only when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = match (args.command, args.file) {
        (Some(source), _) => source,
        (None, Some(path)) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("Error: failed to read '{}': {}", path.display(), err);
            process::exit(1);
        }),
        (None, None) => {
            let stdin = io::stdin();
            if let Err(err) = repl::start(stdin.lock(), &mut io::stdout()) {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
            return;
        }
    };

    if let Err(err) = execute(&source, io::stdout().lock()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
