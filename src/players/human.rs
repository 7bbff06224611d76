//! Interactive player reading moves from a text stream

use std::{
    fmt::Display,
    io::{self, BufRead, StdinLock, Stdout, Write},
    str::FromStr,
};

use colored::Colorize;

use crate::{
    Error, Result,
    ports::{GameState, Outcome, Player},
};

/// A person at a terminal (or any line-based stream).
///
/// Each turn the board and the legal options are written to `output` and a
/// line is read from `input`. Lines that do not parse, or that name a move
/// not currently legal, are rejected and the prompt repeats. End of input or
/// `q`/`quit` ends the session with [`Error::InputClosed`].
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Human on the process's stdin/stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), name)
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            name: name.into(),
        }
    }

    /// Recover the output stream, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").map_err(|source| Error::Io {
            operation: "write to player output".to_string(),
            source,
        })
    }
}

impl<G, R, W> Player<G> for HumanPlayer<R, W>
where
    G: GameState + Display,
    G::Move: FromStr + Display,
    R: BufRead,
    W: Write,
{
    fn get_move(&mut self, state: &G) -> Result<G::Move> {
        let options = state.options();
        let listed: Vec<String> = options.iter().map(ToString::to_string).collect();
        self.write_line(format!("\n{state}"))?;

        loop {
            write!(
                self.output,
                "{} choose one of [{}]: ",
                self.name.bold(),
                listed.join(", ")
            )
            .and_then(|()| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "prompt for a move".to_string(),
                source,
            })?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|source| Error::Io {
                    operation: "read a move".to_string(),
                    source,
                })?;
            let answer = line.trim();
            if read == 0 || answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit")
            {
                return Err(Error::InputClosed);
            }

            match answer.parse::<G::Move>() {
                Ok(mv) if options.contains(&mv) => return Ok(mv),
                _ => self.write_line(format!("'{answer}' is not a legal move").red())?,
            }
        }
    }

    fn finish(&mut self, state: &G, outcome: Outcome, me: usize) -> Result<()> {
        self.write_line(format!("\n{state}"))?;
        let verdict = match outcome {
            Outcome::Tie => "Tie game.".yellow(),
            _ if outcome.is_win_for(me) => "You win!".green(),
            _ => "You lose.".red(),
        };
        self.write_line(verdict.bold())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::TicTacToe;

    fn human(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), "you")
    }

    #[test]
    fn rejects_illegal_then_accepts_legal() {
        let mut game = TicTacToe::new();
        game.apply(&5).unwrap();
        let mut player = human("banana\n5\n10\n3\n");

        let mv = player.get_move(&game).unwrap();
        assert_eq!(mv, 3);

        let written = String::from_utf8(player.into_output()).unwrap();
        assert!(written.contains("'banana' is not a legal move"));
        assert!(written.contains("'5' is not a legal move"));
        assert!(written.contains("'10' is not a legal move"));
    }

    #[test]
    fn end_of_input_closes_session() {
        let mut player = human("");
        let err = Player::<TicTacToe>::get_move(&mut player, &TicTacToe::new()).unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }

    #[test]
    fn quit_closes_session() {
        let mut player = human("quit\n");
        let err = Player::<TicTacToe>::get_move(&mut player, &TicTacToe::new()).unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }

    #[test]
    fn finish_reports_result() {
        let game = TicTacToe::from_key("xxxoo....").unwrap();
        let mut player = human("");
        player.finish(&game, Outcome::Win(0), 1).unwrap();
        let written = String::from_utf8(player.into_output()).unwrap();
        assert!(written.contains("You lose."));
    }
}
