//! A single conversation's game, driven as a state machine.

use crate::ai::{self, Difficulty};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::games::{reversi, tictactoe, GameBoard, GameKind, Outcome, Side};
use crate::render::{PromptKey, RenderableState, SummaryStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Where a session stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting for a difficulty pick; no round running.
    AwaitingDifficulty,
    /// A round is running and, at rest, the human is to move.
    InProgress,
    /// The round ended; a rematch offer stands.
    RoundComplete,
}

/// One player's game against the machine.
///
/// Whenever an operation returns with the session in progress, it is
/// the human's turn; machine replies, including capture-game passes,
/// are resolved before control comes back.
#[derive(Debug)]
pub struct GameSession {
    kind: GameKind,
    phase: Phase,
    board: GameBoard,
    to_move: Side,
    difficulty: Option<Difficulty>,
    last_outcome: Option<Outcome>,
    tally: SummaryStats,
    rng: StdRng,
    reply_delay: Duration,
}

impl GameSession {
    /// Creates a session awaiting its difficulty pick.
    #[instrument(skip(config))]
    pub fn new(kind: GameKind, config: &EngineConfig) -> Self {
        let rng = match config.rng_seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        info!(?kind, "Creating game session");
        Self {
            kind,
            phase: Phase::AwaitingDifficulty,
            board: GameBoard::new(kind),
            to_move: Side::Human,
            difficulty: None,
            last_outcome: None,
            tally: SummaryStats::default(),
            rng,
            reply_delay: Duration::from_millis(*config.reply_delay_ms()),
        }
    }

    /// The rule set this session plays.
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// The running win counters.
    pub fn stats(&self) -> SummaryStats {
        self.tally
    }

    /// Stores the difficulty and starts a round with it.
    ///
    /// Valid in every phase, so a player can switch opponents between
    /// moves without losing the score. A difficulty the rule set does
    /// not offer is rejected.
    #[instrument(skip(self), fields(kind = ?self.kind))]
    pub fn select_difficulty(
        &mut self,
        choice: Difficulty,
    ) -> Result<RenderableState, EngineError> {
        if !choice.available_for(self.kind) {
            warn!(?choice, "Difficulty not offered for this game");
            return Err(EngineError::IllegalMove);
        }
        self.difficulty = Some(choice);
        info!(?choice, "Difficulty selected");
        self.begin_round()
    }

    /// Applies the human's move, then lets the machine reply.
    ///
    /// The cosmetic delay runs only when the round survives the
    /// human's move; round-ending moves and machine passes render
    /// immediately.
    #[instrument(skip(self), fields(kind = ?self.kind))]
    pub async fn apply_move(&mut self, pos: usize) -> Result<RenderableState, EngineError> {
        if self.phase != Phase::InProgress {
            warn!(position = pos, "No round in progress");
            return Err(EngineError::IllegalMove);
        }
        self.board.apply(pos, Side::Human)?;
        debug!(position = pos, "Human move applied");
        self.to_move = Side::Machine;
        if self.board.outcome().is_none() {
            tokio::time::sleep(self.reply_delay).await;
        }
        let prompt = self.machine_turns()?;
        Ok(self.render(prompt))
    }

    /// Starts a rematch with the same difficulty and score.
    #[instrument(skip(self), fields(kind = ?self.kind))]
    pub fn play_again(&mut self) -> Result<RenderableState, EngineError> {
        if self.phase != Phase::RoundComplete {
            warn!("No finished round to replay");
            return Err(EngineError::IllegalMove);
        }
        info!("Rematch accepted");
        self.begin_round()
    }

    /// Resets the board, tosses for the first mover, and plays the
    /// machine's opening move right away when it wins the toss.
    fn begin_round(&mut self) -> Result<RenderableState, EngineError> {
        self.board = GameBoard::new(self.kind);
        self.last_outcome = None;
        self.phase = Phase::InProgress;
        if self.rng.gen_bool(0.5) {
            self.to_move = Side::Human;
            info!("Round started; human moves first");
            Ok(self.render(PromptKey::HumanMovesFirst))
        } else {
            self.to_move = Side::Machine;
            info!("Round started; machine moves first");
            let prompt = match self.machine_turns()? {
                PromptKey::YourTurn => PromptKey::MachineMovedFirst,
                other => other,
            };
            Ok(self.render(prompt))
        }
    }

    /// Plays the machine until the human can move or the round ends.
    ///
    /// Covers the capture game's pass rule in both directions: a
    /// moveless machine hands the turn straight back, and a moveless
    /// human lets the machine move again.
    fn machine_turns(&mut self) -> Result<PromptKey, EngineError> {
        let Some(difficulty) = self.difficulty else {
            warn!("No difficulty selected");
            return Err(EngineError::IllegalMove);
        };
        let strategy = difficulty.strategy();
        let mut prompt = PromptKey::YourTurn;
        loop {
            if let Some(outcome) = self.board.outcome() {
                self.finish_round(outcome);
                return Ok(PromptKey::PlayAgain);
            }
            match &mut self.board {
                GameBoard::Reversi(board) => {
                    if self.to_move == Side::Machine {
                        let moves = reversi::legal_moves(board, Side::Machine);
                        if moves.is_empty() {
                            info!("Machine passed");
                            prompt = PromptKey::MachinePassed;
                            self.to_move = Side::Human;
                            continue;
                        }
                        let pos = ai::random::choose(&moves, &mut self.rng)?;
                        reversi::apply(board, pos, Side::Machine)?;
                        self.to_move = Side::Human;
                        continue;
                    }
                    if reversi::legal_moves(board, Side::Human).is_empty() {
                        info!("Human passed");
                        prompt = PromptKey::HumanPassed;
                        self.to_move = Side::Machine;
                        continue;
                    }
                    return Ok(prompt);
                }
                GameBoard::TicTacToe(board) => {
                    if self.to_move == Side::Machine {
                        let pos = strategy.choose(board, Side::Machine, &mut self.rng)?;
                        tictactoe::apply(board, pos, Side::Machine)?;
                        self.to_move = Side::Human;
                        continue;
                    }
                    return Ok(prompt);
                }
            }
        }
    }

    /// Books the outcome and closes the round.
    fn finish_round(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Side::Human) => self.tally.human_wins += 1,
            Outcome::Winner(Side::Machine) => self.tally.machine_wins += 1,
            Outcome::Draw => {}
        }
        self.last_outcome = Some(outcome);
        self.phase = Phase::RoundComplete;
        info!(
            ?outcome,
            human_wins = self.tally.human_wins,
            machine_wins = self.tally.machine_wins,
            "Round finished"
        );
    }

    /// Snapshots the session for the caller.
    pub(crate) fn render(&self, prompt: PromptKey) -> RenderableState {
        RenderableState {
            board: self.board.snapshot(),
            to_move: (self.phase == Phase::InProgress).then_some(self.to_move),
            terminal: self.phase == Phase::RoundComplete,
            prompt,
            outcome: self.last_outcome,
            choices: Difficulty::choices(self.kind),
            tally: self.tally,
        }
    }
}
