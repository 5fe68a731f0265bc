use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};

use unodeck::logging::{DEFAULT_LOG_FILTER, init_logging};
use unodeck::simulate::{DEFAULT_HAND_SIZE, DEFAULT_MAX_TURNS};
use unodeck::{Simulation, TurnOutcome, render_piles};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Deal a standard deck and draw/discard until the piles run dry or the turn cap."
)]
struct Args {
    /// Seed for dealing, discards and reshuffles
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of players (2-10)
    #[arg(short = 'p', long = "players", default_value_t = 4)]
    players: usize,

    /// Cards dealt to each player
    #[arg(long = "hand-size", default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Stop after the specified number of turns
    #[arg(long = "max-turns", default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Show the piles whenever the draw pile is rebuilt
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
    let mut sim = Simulation::builder(args.players)?
        .with_seed(args.seed)
        .with_hand_size(args.hand_size)
        .with_max_turns(args.max_turns)
        .build()?;

    println!(
        "Starting simulation with {} players, {} cards each.\n",
        args.players, args.hand_size
    );
    if args.visualize {
        println!("{}", render_piles(sim.piles()));
    }
    while !sim.is_finished() {
        let turn = sim.turns() + 1;
        if let TurnOutcome::Played { rebuilt: true } = sim.step() {
            if args.visualize {
                println!("Turn {turn}: draw pile rebuilt");
                println!("{}", render_piles(sim.piles()));
            }
        }
    }

    let report = sim.report();
    if report.stalemate {
        println!(
            "Stalemate after {} turns: nothing left to recycle.",
            report.turns
        );
    } else {
        println!("Turn limit of {} reached.", report.turns);
    }
    println!(
        "Rebuilds: {}  |  Cards in play: {}",
        report.rebuilds, report.cards_in_play
    );
    Ok(())
}
