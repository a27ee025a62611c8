//! Notifications emitted by the controller for a presentation layer.

use serde::Serialize;

use crate::rules::RUN_LENGTH;
use crate::types::{Player, Scores, Symbol};

/// Something observable happened to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh board is ready.
    GameStarted {
        /// Seated players in turn order.
        players: Vec<Player>,
        /// Session tally carried into this game.
        scores: Scores,
    },
    /// A symbol was placed.
    MovePlayed {
        /// Square played.
        index: usize,
        /// Symbol placed.
        symbol: Symbol,
    },
    /// The next player is up.
    TurnChanged {
        /// Player to move.
        player: Player,
    },
    /// The last move won the game.
    GameWon {
        /// Winning symbol.
        winner: Symbol,
        /// Cells to highlight.
        cells: [usize; RUN_LENGTH],
        /// Tally after the win.
        scores: Scores,
    },
    /// The last move filled the board without a winner.
    GameDrawn,
}

/// Receives [`GameEvent`]s from a [`GameController`](crate::GameController).
pub trait GameObserver {
    /// Called once per event, in emission order.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}
