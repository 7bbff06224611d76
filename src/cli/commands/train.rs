//! Train command - the brain plays itself or a random opponent

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

use super::{app_for, checkpoint, shared_brain};
use crate::{
    app::{OpponentKind, SessionConfig},
    brain::Brain,
    cli::output::{print_brain_stats, print_kv, print_results, print_section},
    pipeline::{LogObserver, ProgressObserver, TrainingConfig, TrainingPipeline},
    players::{BrainPlayer, RandomPlayer},
    ports::Player,
    tictactoe::TicTacToe,
};

pub fn execute(config: &SessionConfig) -> Result<()> {
    let app = app_for(config);
    let brain = shared_brain(&app, config)?;

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        num_games: config.games,
    })
    .with_observer(Box::new(ProgressObserver::new()))
    .with_observer(Box::new(LogObserver::new((config.games / 10).max(1))));
    if let Some(checkpoint) = checkpoint(&app, config, &brain) {
        pipeline = pipeline.with_checkpoint(checkpoint);
    }

    let opponent = config.opponent;
    let seed = config.seed;
    let result = pipeline.run(TicTacToe::new, |game_num| {
        seat_players(&brain, opponent, seed, game_num)
    })?;

    print_section("Training summary");
    print_kv("Brain", &config.brain_path.display().to_string());
    match opponent {
        OpponentKind::SelfPlay => print_results(&result, "X", "O"),
        OpponentKind::Random => print_results(&result, "MENACE", "Random"),
    }

    let brain = brain
        .lock()
        .map_err(|_| anyhow!("brain lock poisoned while summarizing"))?;
    print_brain_stats(&brain.stats(), brain.total_recounts());
    if !config.persists() {
        println!("\nRead-only session: brain not saved.");
    }
    Ok(())
}

/// Players for one game. The brain always holds seat 0.
fn seat_players(
    brain: &Arc<Mutex<Brain>>,
    opponent: OpponentKind,
    seed: Option<u64>,
    game_num: usize,
) -> Vec<Box<dyn Player<TicTacToe>>> {
    let first: Box<dyn Player<TicTacToe>> =
        Box::new(BrainPlayer::new(Arc::clone(brain), "MENACE X"));
    let second: Box<dyn Player<TicTacToe>> = match opponent {
        OpponentKind::SelfPlay => Box::new(BrainPlayer::new(Arc::clone(brain), "MENACE O")),
        OpponentKind::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(
                "Random",
                seed.wrapping_add(game_num as u64 + 1),
            )),
            None => Box::new(RandomPlayer::new("Random")),
        },
    };
    vec![first, second]
}
