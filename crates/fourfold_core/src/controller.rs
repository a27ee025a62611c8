//! Session controller: turn sequencing, AI turns and event delivery.

use std::fmt;

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::action::{MoveError, MoveOutcome};
use crate::ai::{Difficulty, Strategy};
use crate::error::ConfigError;
use crate::events::{GameEvent, GameObserver};
use crate::rules::RUN_LENGTH;
use crate::state::GameState;
use crate::types::{GameStatus, MAX_PLAYERS, MIN_PLAYERS, Player, Roster, Scores, Symbol};

/// How a session is seated.
///
/// With a difficulty set, the last seat is played by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    player_count: usize,
    difficulty: Option<Difficulty>,
}

impl GameConfig {
    /// One human (X) against the computer (O).
    pub fn solo(difficulty: Difficulty) -> Self {
        Self {
            player_count: MIN_PLAYERS,
            difficulty: Some(difficulty),
        }
    }

    /// `player_count` humans sharing the board.
    pub fn local(player_count: usize) -> Self {
        Self {
            player_count,
            difficulty: None,
        }
    }

    /// Builds a validated config from raw inputs.
    ///
    /// # Errors
    ///
    /// Rejects player counts outside 2–4 and unknown difficulty tokens.
    #[instrument]
    pub fn parse(player_count: usize, difficulty: Option<&str>) -> Result<Self, ConfigError> {
        let difficulty = difficulty.map(Difficulty::parse_token).transpose()?;
        let config = Self {
            player_count,
            difficulty,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the player count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PlayerCount`] outside 2–4.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            Ok(())
        } else {
            Err(ConfigError::PlayerCount(self.player_count))
        }
    }

    /// Number of seats.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// AI tier, if a seat is computer-controlled.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }
}

/// The computer-controlled seat and its policy.
#[derive(Debug)]
struct AiSeat {
    seat: usize,
    strategy: Box<dyn Strategy>,
}

impl AiSeat {
    /// Seats the AI last. Medium and hard only model a single opponent, so
    /// larger tables get the random policy.
    fn for_config(config: &GameConfig, roster: &Roster, seed: Option<u64>) -> Option<Self> {
        let requested = config.difficulty?;
        let difficulty = if roster.len() > MIN_PLAYERS && requested != Difficulty::Easy {
            warn!(
                requested = %requested,
                players = roster.len(),
                "Only random play is defined for more than two players"
            );
            Difficulty::Easy
        } else {
            requested
        };

        let strategy = match seed {
            Some(seed) => difficulty.seeded_strategy(seed),
            None => difficulty.strategy(),
        };
        info!(strategy = strategy.name(), seat = roster.len() - 1, "AI seated");
        Some(Self {
            seat: roster.len() - 1,
            strategy,
        })
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct MoveReport {
    /// Square played.
    index: usize,
    /// Symbol placed.
    symbol: Symbol,
    /// Effect on the game.
    outcome: MoveOutcome,
}

impl MoveReport {
    /// Cells to highlight, when the move won.
    pub fn winning_cells(&self) -> Option<[usize; RUN_LENGTH]> {
        self.outcome.winning_cells()
    }
}

/// Owns the active game and drives it on behalf of a presentation layer.
///
/// All mutation goes through [`GameController::apply_move`]; AI turns are an
/// explicit [`GameController::play_ai_turn`] call so the caller can pace them.
pub struct GameController {
    config: GameConfig,
    seed: Option<u64>,
    state: GameState,
    ai: Option<AiSeat>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("ai", &self.ai)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameController {
    /// Starts a session with a fresh board and zeroed scores.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an invalid configuration; nothing is
    /// created in that case.
    #[instrument]
    pub fn start(config: GameConfig) -> Result<Self, ConfigError> {
        Self::build(config, None)
    }

    /// Like [`GameController::start`], with reproducible AI randomness.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an invalid configuration.
    #[instrument]
    pub fn start_seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::build(config, Some(seed))
    }

    fn build(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;
        let roster = Roster::from_palette(config.player_count)?;
        let ai = AiSeat::for_config(&config, &roster, seed);
        info!(players = roster.len(), ai = ai.is_some(), "Session started");
        Ok(Self {
            config,
            seed,
            state: GameState::new(roster),
            ai,
            observers: Vec::new(),
        })
    }

    /// Registers an observer and sends it a `GameStarted` snapshot.
    pub fn subscribe(&mut self, mut observer: impl GameObserver + 'static) {
        observer.notify(&self.started_event());
        self.observers.push(Box::new(observer));
    }

    fn started_event(&self) -> GameEvent {
        GameEvent::GameStarted {
            players: self.state.roster().players().to_vec(),
            scores: self.state.scores().clone(),
        }
    }

    fn emit(&mut self, event: GameEvent) {
        debug!(?event, observers = self.observers.len(), "Emitting event");
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    /// Plays `index` for the player to move.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the game untouched if the move is
    /// illegal.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        let symbol = self.state.current_player().symbol();
        let outcome = self.state.apply_move(index)?;

        self.emit(GameEvent::MovePlayed { index, symbol });
        match outcome {
            MoveOutcome::Won { winner, line } => self.emit(GameEvent::GameWon {
                winner,
                cells: *line.cells(),
                scores: self.state.scores().clone(),
            }),
            MoveOutcome::Draw => self.emit(GameEvent::GameDrawn),
            MoveOutcome::Continue { .. } => self.emit(GameEvent::TurnChanged {
                player: self.state.current_player(),
            }),
        }

        Ok(MoveReport::new(index, symbol, outcome))
    }

    /// True when the game is live and the computer is to move.
    pub fn is_ai_turn(&self) -> bool {
        !self.state.is_terminal()
            && self
                .ai
                .as_ref()
                .is_some_and(|ai| ai.seat == self.state.current_seat())
    }

    /// Asks the AI for its move without playing it.
    ///
    /// Returns `None` unless it is the AI's turn.
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Option<usize> {
        if !self.is_ai_turn() {
            return None;
        }
        let ai = self.ai.as_mut()?;
        let roster = self.state.roster();
        let acting = roster.seat(ai.seat).symbol();
        let opponent = roster.seat((ai.seat + 1) % roster.len()).symbol();
        let choice = ai.strategy.choose_move(&self.state, acting, opponent);
        debug!(?choice, strategy = ai.strategy.name(), "AI chose");
        choice
    }

    /// Plays the AI's move if it is the AI's turn.
    ///
    /// # Errors
    ///
    /// Propagates a [`MoveError`] from [`GameController::apply_move`].
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> Result<Option<MoveReport>, MoveError> {
        match self.request_ai_move() {
            Some(index) => self.apply_move(index).map(Some),
            None => Ok(None),
        }
    }

    /// New board with the same seats and AI, keeping the scores.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = self.state.rematch();
        let event = self.started_event();
        self.emit(event);
    }

    /// Discards the session and starts over with `config`. Observers stay
    /// subscribed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] and keeps the current session if `config`
    /// is invalid.
    #[instrument(skip(self))]
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        let fresh = Self::build(config, self.seed)?;
        self.config = fresh.config;
        self.state = fresh.state;
        self.ai = fresh.ai;
        let event = self.started_event();
        self.emit(event);
        Ok(())
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the active game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Session score tally.
    pub fn scores(&self) -> &Scores {
        self.state.scores()
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Seat index of the computer player, if any.
    pub fn ai_seat(&self) -> Option<usize> {
        self.ai.as_ref().map(|ai| ai.seat)
    }
}
