//! The session engine: turn management, command execution, undo.
//!
//! ## State machine
//!
//! A game is `InProgress` until a win condition, double-pass settlement,
//! or resignation decides it. A decided game rejects move, pass, and
//! resign with [`RuleError::GameOver`]; undo is still accepted and may
//! take the game back to `InProgress` by reversing the deciding command.
//!
//! ## Atomicity
//!
//! All validation happens before the first mutation. The one exception
//! is Go's suicide rule, which must speculatively place and capture
//! before it can tell; `rules::go` unwinds that itself on rejection. So
//! a failed command never changes observable state and never pushes
//! history.

use tracing::debug;

use crate::board::{Board, Coord, Player, Stone};
use crate::error::RuleError;
use crate::rules::{go, gomoku, othello};

use super::factory::{self, Variant};
use super::history::{Command, HistoryEntry, MoveDelta, PassRecord, PriorState, ResignRecord};

/// Final result of a decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// The winning player, if the game was not drawn.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

/// Session progress, derived from the outcome field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Decided(Outcome),
}

/// A turn-based session: one board, the turn state, and the history of
/// executed commands.
///
/// Construct through [`crate::game::create`]; drive through the
/// `execute_*` methods or [`Game::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(crate) variant: Variant,
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) pass_count: u32,
    pub(crate) history: Vec<HistoryEntry>,
}

impl Game {
    /// The variant in play.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The board, for rendering and queries.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The decided result, or `None` while in progress.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Derived state-machine view of [`Game::outcome`].
    #[must_use]
    pub fn status(&self) -> Status {
        match self.outcome {
            Some(outcome) => Status::Decided(outcome),
            None => Status::InProgress,
        }
    }

    /// Consecutive passes leading up to now.
    #[must_use]
    pub fn pass_count(&self) -> u32 {
        self.pass_count
    }

    /// Number of commands available to undo.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Execute any command, dispatching on its tag.
    pub fn execute(&mut self, command: Command) -> Result<(), RuleError> {
        match command {
            Command::Move { coord } => self.execute_move(coord),
            Command::Pass => self.execute_pass(),
            Command::Resign => self.execute_resign(),
        }
    }

    /// Place the current player's stone at `coord`.
    ///
    /// Validation order: decided game, board range, occupancy, then the
    /// variant's own legality (which may fail with
    /// [`RuleError::IllegalMove`]). On success the pass counter resets,
    /// the variant's terminal check runs, the turn advances, and a
    /// [`MoveDelta`] is pushed.
    pub fn execute_move(&mut self, coord: Coord) -> Result<(), RuleError> {
        self.ensure_in_progress()?;
        if !self.board.contains(coord) {
            return Err(RuleError::OutOfRange {
                coord,
                size: self.board.size(),
            });
        }
        if self.board.at(coord) != Stone::Empty {
            return Err(RuleError::Occupied { coord });
        }

        let prior = self.prior_state();
        let player = self.current_player;
        let captured = match self.variant {
            Variant::Gomoku => gomoku::apply_move(&mut self.board, coord, player)?,
            Variant::Go => go::apply_move(&mut self.board, coord, player)?,
            Variant::Othello => othello::apply_move(&mut self.board, coord, player)?,
        };
        self.pass_count = 0;

        // Variant terminal check, evaluated before the turn switch so a
        // winning mover is the recorded winner.
        match self.variant {
            Variant::Gomoku => {
                if gomoku::is_winning_move(&self.board, coord, player) {
                    self.outcome = Some(Outcome::Winner(player));
                } else if self.board.is_full() {
                    self.outcome = Some(Outcome::Draw);
                }
            }
            Variant::Go => {
                // Not reachable through play: a move filling the last
                // cell either captures (re-creating empties) or is
                // rejected as suicide. Mirrors the double-pass rule.
                if self.board.is_full() {
                    self.outcome = Some(go::settle(&self.board));
                }
            }
            Variant::Othello => {
                if self.board.is_full() {
                    self.outcome = Some(othello::settle(&self.board));
                }
            }
        }

        if self.outcome.is_none() {
            match self.variant {
                // Othello skips an opponent with no legal move and may
                // settle when neither side can act.
                Variant::Othello => othello::advance_turn(self),
                Variant::Gomoku | Variant::Go => {
                    self.current_player = player.opponent();
                }
            }
        }

        debug!(
            variant = %self.variant,
            player = %player,
            %coord,
            captures = captured.len(),
            "move applied"
        );
        self.history.push(HistoryEntry::Move(MoveDelta {
            coord,
            player,
            captured,
            prior,
        }));
        Ok(())
    }

    /// Give up the current turn.
    ///
    /// Gomoku has no pass. Go settles by area scoring on the second
    /// consecutive pass. Othello accepts a pass only from a player with
    /// no legal move and settles when the opponent is also stuck.
    pub fn execute_pass(&mut self) -> Result<(), RuleError> {
        self.ensure_in_progress()?;
        if !self.variant.supports_pass() {
            return Err(RuleError::PassUnsupported {
                variant: self.variant,
            });
        }
        if self.variant == Variant::Othello
            && !othello::must_pass(&self.board, self.current_player)
        {
            return Err(RuleError::PassNotAllowed);
        }

        let prior = self.prior_state();
        let player = self.current_player;
        self.pass_count += 1;
        match self.variant {
            Variant::Go => {
                if self.pass_count >= 2 {
                    self.outcome = Some(go::settle(&self.board));
                }
                if self.outcome.is_none() {
                    self.current_player = player.opponent();
                }
            }
            Variant::Othello => {
                self.current_player = player.opponent();
                if othello::must_pass(&self.board, self.current_player) {
                    self.outcome = Some(othello::settle(&self.board));
                }
            }
            Variant::Gomoku => {}
        }

        debug!(variant = %self.variant, player = %player, "pass");
        self.history.push(HistoryEntry::Pass(PassRecord { prior }));
        Ok(())
    }

    /// Concede: the opponent of the current player wins immediately.
    pub fn execute_resign(&mut self) -> Result<(), RuleError> {
        self.ensure_in_progress()?;
        let prior = self.prior_state();
        let winner = self.current_player.opponent();
        self.outcome = Some(Outcome::Winner(winner));

        debug!(variant = %self.variant, resigner = %self.current_player, "resignation");
        self.history.push(HistoryEntry::Resign(ResignRecord { prior }));
        Ok(())
    }

    /// Reverse the most recent command.
    ///
    /// Applies the stored delta only - board cells for a move, the
    /// scalar prior state for every command. Depth is bounded only by
    /// history length; undoing everything reaches the initial position.
    pub fn undo_last(&mut self) -> Result<(), RuleError> {
        let entry = self.history.pop().ok_or(RuleError::EmptyHistory)?;
        match entry {
            HistoryEntry::Move(delta) => {
                let opponent = delta.player.opponent();
                self.board.put(delta.coord, Stone::Empty);
                for &captured in &delta.captured {
                    self.board.put(captured, opponent.stone());
                }
                self.restore_prior(delta.prior);
            }
            HistoryEntry::Pass(record) => self.restore_prior(record.prior),
            HistoryEntry::Resign(record) => self.restore_prior(record.prior),
        }
        debug!(variant = %self.variant, remaining = self.history.len(), "undo");
        Ok(())
    }

    /// Discard this session and start a fresh one.
    ///
    /// Delegates to the factory; on invalid parameters the current game
    /// is left untouched.
    pub fn restart(&mut self, variant: Variant, size: u16) -> Result<(), RuleError> {
        *self = factory::create(variant, size)?;
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), RuleError> {
        if self.outcome.is_some() {
            return Err(RuleError::GameOver);
        }
        Ok(())
    }

    fn prior_state(&self) -> PriorState {
        PriorState {
            current_player: self.current_player,
            outcome: self.outcome,
            pass_count: self.pass_count,
        }
    }

    fn restore_prior(&mut self, prior: PriorState) {
        self.current_player = prior.current_player;
        self.outcome = prior.outcome;
        self.pass_count = prior.pass_count;
    }
}
