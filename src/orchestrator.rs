//! Game orchestration between the human and computer sides.

use crate::players::{Choice, MoveSource};
use crate::session::{Session, SessionError, TurnOutcome};
use crate::ui;
use anyhow::Result;
use std::io::Write;
use tictac_core::{Scoreboard, Side};
use tracing::{debug, info, instrument, warn};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// A side completed a line.
    Won(Side),
    /// Full board, no winner.
    Tie,
    /// A move source asked to stop mid-round.
    Quit,
}

/// Runs rounds between two move sources and reports to `out`.
pub struct Orchestrator<W> {
    session: Session,
    player: Box<dyn MoveSource>,
    computer: Box<dyn MoveSource>,
    out: W,
    max_rounds: Option<u32>,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator for a fresh session.
    pub fn new(
        session: Session,
        player: Box<dyn MoveSource>,
        computer: Box<dyn MoveSource>,
        out: W,
    ) -> Self {
        Self {
            session,
            player,
            computer,
            out,
            max_rounds: None,
        }
    }

    /// Stops after `rounds` finished rounds.
    pub fn with_max_rounds(mut self, rounds: Option<u32>) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Plays rounds until a source quits or the round limit is hit.
    ///
    /// Returns the final scores.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Scoreboard> {
        info!("Starting game orchestration");
        writeln!(self.out, "{}", ui::score_title(&self.session.board().scores()))?;

        loop {
            if self.round_limit_reached() {
                break;
            }
            let result = self.play_round()?;
            if result == RoundResult::Quit {
                info!(round = self.session.round(), "Session ended by player");
                break;
            }

            let scores = self.session.board().scores();
            writeln!(self.out, "{}", ui::score_title(&scores))?;

            if self.round_limit_reached() {
                break;
            }
            self.session.next_round();
            writeln!(
                self.out,
                "\nRound {}: {} starts.",
                self.session.round(),
                self.session.round_starter()
            )?;
        }

        Ok(self.session.board().scores())
    }

    fn round_limit_reached(&self) -> bool {
        let rounds = self.session.board().scores().rounds();
        let reached = self.max_rounds.is_some_and(|max| rounds >= max);
        if reached {
            info!(rounds, "Round limit reached");
        }
        reached
    }

    /// Plays the current round to its end.
    #[instrument(skip(self), fields(round = self.session.round()))]
    pub fn play_round(&mut self) -> Result<RoundResult> {
        loop {
            let side = self.session.board().turn();
            if side == Side::Player {
                writeln!(self.out, "\n{}", ui::render_board(self.session.board(), None))?;
            }

            let source = match side {
                Side::Player => &mut self.player,
                Side::Computer => &mut self.computer,
            };
            let (row, col) = match source.choose(self.session.board())? {
                Choice::Quit => return Ok(RoundResult::Quit),
                Choice::Cell { row, col } => (row, col),
            };
            debug!(player = source.name(), row, col, "Move chosen");

            match self.session.apply_move(side, row, col) {
                Ok(TurnOutcome::Continue) => {
                    if side == Side::Computer {
                        writeln!(self.out, "Computer plays ({row}, {col}).")?;
                    }
                }
                Ok(TurnOutcome::Won { side, line }) => {
                    writeln!(
                        self.out,
                        "\n{}",
                        ui::render_board(self.session.board(), Some(&line))
                    )?;
                    writeln!(self.out, "Game Over: {}", ui::outcome_message(Some(side)))?;
                    return Ok(RoundResult::Won(side));
                }
                Ok(TurnOutcome::Tie) => {
                    writeln!(self.out, "\n{}", ui::render_board(self.session.board(), None))?;
                    writeln!(self.out, "Game Over: {}", ui::outcome_message(None))?;
                    return Ok(RoundResult::Tie);
                }
                Err(SessionError::Move(err)) if side == Side::Player => {
                    warn!(%err, "Rejected player move");
                    let reason = if err.is_occupied() {
                        "That position is already taken.".to_string()
                    } else {
                        err.to_string()
                    };
                    self.player.rejected(&reason)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
