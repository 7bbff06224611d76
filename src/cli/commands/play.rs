//! Play command - a human against the brain on the terminal

use std::sync::Arc;

use anyhow::Result;

use super::{app_for, checkpoint, shared_brain};
use crate::{
    app::SessionConfig,
    cli::output::{print_results, print_section},
    pipeline::{TrainingConfig, TrainingPipeline},
    players::{BrainPlayer, HumanPlayer},
    ports::Player,
    tictactoe::TicTacToe,
};

/// Play games until the human closes input (EOF or `q`).
pub fn execute(config: &SessionConfig) -> Result<()> {
    let app = app_for(config);
    let brain = shared_brain(&app, config)?;

    println!("Enter a cell number (1-9) to move, or q to quit.");

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        num_games: usize::MAX,
    });
    if let Some(checkpoint) = checkpoint(&app, config, &brain) {
        pipeline = pipeline.with_checkpoint(checkpoint);
    }

    let human_first = config.human_first;
    let result = pipeline.run(TicTacToe::new, |_| {
        let menace: Box<dyn Player<TicTacToe>> =
            Box::new(BrainPlayer::new(Arc::clone(&brain), "MENACE"));
        let human: Box<dyn Player<TicTacToe>> = Box::new(HumanPlayer::stdio("You"));
        if human_first {
            vec![human, menace]
        } else {
            vec![menace, human]
        }
    })?;

    print_section("Session over");
    if human_first {
        print_results(&result, "Your", "MENACE");
    } else {
        print_results(&result, "MENACE", "Your");
    }
    if !config.persists() {
        println!("\nRead-only session: brain not saved.");
    }
    Ok(())
}
