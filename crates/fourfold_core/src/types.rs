//! Core domain types for the grid game.

use std::collections::BTreeMap;

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

use crate::error::ConfigError;

/// Side length of the playing grid.
pub const GRID_SIZE: usize = 6;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can seat (one per palette symbol).
pub const MAX_PLAYERS: usize = 4;

/// A player's marker on the board.
///
/// Variants are listed in palette order: a roster of `n` players always uses
/// the first `n` symbols.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
)]
pub enum Symbol {
    /// First seat.
    #[display("X")]
    X,
    /// Second seat.
    #[display("O")]
    O,
    /// Third seat.
    #[display("▲")]
    Triangle,
    /// Fourth seat.
    #[display("●")]
    Circle,
}

impl Symbol {
    /// Display color paired with this symbol, as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Symbol::X => "#00c6ff",
            Symbol::O => "#ff6b6b",
            Symbol::Triangle => "#feca57",
            Symbol::Circle => "#1dd1a1",
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player's symbol.
    Occupied(Symbol),
}

/// A seated player: symbol plus display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, new)]
pub struct Player {
    symbol: Symbol,
    color: &'static str,
}

impl Player {
    /// Seats a player using the palette color of `symbol`.
    pub fn from_symbol(symbol: Symbol) -> Self {
        Self::new(symbol, symbol.color())
    }

    /// The player's marker.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The player's display color.
    pub fn color(&self) -> &'static str {
        self.color
    }
}

/// Ordered list of 2–4 players with distinct symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster(Vec<Player>);

impl Roster {
    /// Seats the first `count` palette symbols in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PlayerCount`] if `count` is outside 2–4.
    #[instrument]
    pub fn from_palette(count: usize) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ConfigError::PlayerCount(count));
        }
        Ok(Self(
            Symbol::iter().take(count).map(Player::from_symbol).collect(),
        ))
    }

    /// Number of seats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a roster has at least two seats.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Player in seat `seat`. Panics if the seat does not exist.
    pub fn seat(&self, seat: usize) -> Player {
        self.0[seat]
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.0
    }

    /// Symbols in turn order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().map(Player::symbol)
    }
}

/// Win tally per symbol for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Scores(BTreeMap<Symbol, u32>);

impl Scores {
    /// Zeroed tally with one entry per roster symbol.
    pub fn for_roster(roster: &Roster) -> Self {
        Self(roster.symbols().map(|symbol| (symbol, 0)).collect())
    }

    /// Wins recorded for `symbol`.
    pub fn get(&self, symbol: Symbol) -> u32 {
        self.0.get(&symbol).copied().unwrap_or(0)
    }

    /// Credits one win to `symbol`.
    pub(crate) fn record_win(&mut self, symbol: Symbol) {
        *self.0.entry(symbol).or_insert(0) += 1;
    }

    /// Iterates `(symbol, wins)` in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.0.iter().map(|(symbol, wins)| (*symbol, *wins))
    }

    /// Total number of decided games.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Symbol),
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if there is one.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            _ => None,
        }
    }
}
