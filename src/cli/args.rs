//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::app::{OpponentKind, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "menace")]
#[command(version, about = "Matchbox reinforcement learner for turn-based games", long_about = None)]
pub struct Args {
    /// Brain file to load and save (`.json` for JSON, otherwise MessagePack)
    #[arg(long, short = 'b', default_value = "menace.brain")]
    pub brain: PathBuf,

    /// Play against the brain on the terminal
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Do not write the brain back
    #[arg(long, short = 'r')]
    pub read_only: bool,

    /// Random seed for reproducibility
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Number of self-play games
    #[arg(long, short = 'n', default_value_t = 100)]
    pub games: usize,

    /// Beads per option for newly seen states
    #[arg(long)]
    pub initial_beads: Option<u32>,

    /// Never let a weight drop below zero
    #[arg(long)]
    pub clamp: bool,

    /// Opponent for non-interactive sessions
    #[arg(long, value_enum, default_value_t = OpponentKind::SelfPlay)]
    pub opponent: OpponentKind,

    /// Take the first move in interactive mode
    #[arg(long)]
    pub human_first: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        Self {
            brain_path: args.brain,
            interactive: args.interactive,
            read_only: args.read_only,
            seed: args.seed,
            games: args.games,
            initial_beads: args.initial_beads,
            clamp_at_zero: args.clamp,
            opponent: args.opponent,
            human_first: args.human_first,
            verbose: args.verbose,
        }
    }
}
