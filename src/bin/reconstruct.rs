use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};

use unodeck::logging::{DEFAULT_LOG_FILTER, init_logging};
use unodeck::{DEFAULT_SEED, DeckRecycler, PileSnapshot, SnapshotError, render_reconstruction};

#[derive(Parser, Debug)]
#[command(
    name = "reconstruct",
    about = "Recycle the discard pile of a JSON snapshot into a new draw pile."
)]
struct Args {
    /// Snapshot file ({"deck": [...], "discard": [...]}); reads stdin when omitted
    input: Option<PathBuf>,

    /// Seed for the shuffle
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Reject snapshots whose piles are missing or not arrays
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,

    /// Print a text summary to stderr
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,
}

fn main() {
    init_logging(DEFAULT_LOG_FILTER);
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path).map_err(SnapshotError::from)?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(SnapshotError::from)?;
            buffer
        }
    };

    let snapshot = if args.strict {
        PileSnapshot::parse_strict(&text)?
    } else {
        PileSnapshot::parse_lenient(&text)?
    };

    let mut recycler = DeckRecycler::seeded(args.seed);
    let result = recycler.reconstruct(&snapshot);
    if args.visualize {
        eprint!("{}", render_reconstruction(&result));
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");
    Ok(())
}
