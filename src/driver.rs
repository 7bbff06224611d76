//! Game driver: alternates turns between players until the game resolves

use crate::{
    Error, Result,
    ports::{GameState, Outcome, Player},
};

/// Play `state` to completion with the given players.
///
/// `players[seat]` moves whenever `state.who() == seat`. Once
/// `state.result()` is available every player is told the outcome, in seat
/// order, and the outcome is returned.
///
/// # Errors
///
/// Returns an error if:
/// - `who()` names a seat with no player
/// - the state is unresolved but offers no options
/// - a player fails to produce a move, or the move is rejected by the state
/// - a player's `finish` fails
///
/// # Examples
///
/// ```
/// use menace_brain::{Player, driver, players::RandomPlayer, tictactoe::TicTacToe};
///
/// let mut game = TicTacToe::new();
/// let mut players: Vec<Box<dyn Player<TicTacToe>>> = vec![
///     Box::new(RandomPlayer::with_seed("a", 1)),
///     Box::new(RandomPlayer::with_seed("b", 2)),
/// ];
/// let outcome = driver::run(&mut game, &mut players)?;
/// assert!(game.is_terminal());
/// assert_eq!(Some(outcome), menace_brain::GameState::result(&game));
/// # Ok::<(), menace_brain::Error>(())
/// ```
pub fn run<G: GameState>(
    state: &mut G,
    players: &mut [Box<dyn Player<G> + '_>],
) -> Result<Outcome> {
    let seats = players.len();
    let outcome = loop {
        if let Some(outcome) = state.result() {
            break outcome;
        }
        if state.options().is_empty() {
            return Err(Error::NoOptions {
                key: state.to_key(),
            });
        }

        let seat = state.who();
        let player = players
            .get_mut(seat)
            .ok_or(Error::UnknownSeat { seat, seats })?;
        let mv = player.get_move(state)?;
        log::trace!(
            "{} (seat {seat}) plays {mv:?} at '{}'",
            player.name(),
            state.to_key()
        );
        state.apply(&mv)?;
    };

    log::debug!("game over at '{}': {outcome:?}", state.to_key());
    for (seat, player) in players.iter_mut().enumerate() {
        player.finish(state, outcome, seat)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::tictactoe::TicTacToe;

    /// Plays a fixed script and records every `finish` call.
    struct Scripted {
        moves: Vec<usize>,
        finished: Arc<Mutex<Vec<(usize, Outcome)>>>,
    }

    impl Player<TicTacToe> for Scripted {
        fn get_move(&mut self, _state: &TicTacToe) -> Result<usize> {
            Ok(self.moves.remove(0))
        }

        fn finish(&mut self, _state: &TicTacToe, outcome: Outcome, me: usize) -> Result<()> {
            self.finished.lock().unwrap().push((me, outcome));
            Ok(())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn scripted(
        moves: &[usize],
        finished: &Arc<Mutex<Vec<(usize, Outcome)>>>,
    ) -> Box<dyn Player<TicTacToe>> {
        Box::new(Scripted {
            moves: moves.to_vec(),
            finished: Arc::clone(finished),
        })
    }

    #[test]
    fn top_row_win_notifies_every_player_in_seat_order() {
        let finished = Arc::new(Mutex::new(Vec::new()));
        let mut players = vec![scripted(&[1, 2, 3], &finished), scripted(&[4, 5], &finished)];
        let mut game = TicTacToe::new();

        let outcome = run(&mut game, &mut players).unwrap();

        assert_eq!(outcome, Outcome::Win(0));
        assert_eq!(
            *finished.lock().unwrap(),
            vec![(0, Outcome::Win(0)), (1, Outcome::Win(0))]
        );
    }

    #[test]
    fn illegal_move_is_an_error() {
        let finished = Arc::new(Mutex::new(Vec::new()));
        let mut players = vec![scripted(&[5], &finished), scripted(&[5], &finished)];
        let mut game = TicTacToe::new();

        let err = run(&mut game, &mut players).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { position: 5 }));
        assert!(finished.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_seat_is_an_error() {
        let finished = Arc::new(Mutex::new(Vec::new()));
        let mut players = vec![scripted(&[5], &finished)];
        let mut game = TicTacToe::new();

        let err = run(&mut game, &mut players).unwrap_err();
        assert!(matches!(err, Error::UnknownSeat { seat: 1, seats: 1 }));
    }

    #[test]
    fn already_finished_state_only_notifies() {
        let finished = Arc::new(Mutex::new(Vec::new()));
        let mut players = vec![scripted(&[], &finished), scripted(&[], &finished)];
        let mut game = TicTacToe::from_key("xoxxoooxx").unwrap();

        let outcome = run(&mut game, &mut players).unwrap();
        assert_eq!(outcome, Outcome::Tie);
        assert_eq!(finished.lock().unwrap().len(), 2);
    }
}
