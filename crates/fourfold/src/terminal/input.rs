//! Parsing of typed commands.

use fourfold_core::{ConfigError, GameConfig, MIN_PLAYERS};

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play this square.
    Cell(usize),
    /// Start a new game, keeping scores.
    Restart,
    /// Go back to mode selection.
    Modes,
    /// Leave.
    Quit,
    /// Show the command list.
    Help,
}

/// Parses `row col`, a bare cell index, or a command letter.
///
/// A bare index is passed through unchecked; `row col` pairs must both be
/// on the grid.
pub fn parse_input(line: &str, grid_size: usize) -> Option<Input> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "r" | "restart" => return Some(Input::Restart),
        "m" | "mode" | "modes" => return Some(Input::Modes),
        "q" | "quit" | "exit" => return Some(Input::Quit),
        "h" | "?" | "help" => return Some(Input::Help),
        _ => {}
    }

    let numbers = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    match numbers.as_slice() {
        [index] => Some(Input::Cell(*index)),
        [row, col] if *row < grid_size && *col < grid_size => {
            Some(Input::Cell(row * grid_size + col))
        }
        _ => None,
    }
}

/// Parses a mode choice: `solo [easy|medium|hard]` (or `1`) for a game
/// against the computer, or a player count for a local game.
///
/// Returns `None` for input that names no mode.
pub fn parse_mode(line: &str) -> Option<Result<GameConfig, ConfigError>> {
    let line = line.trim().to_lowercase();
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;
    let second = tokens.next();

    match first {
        "s" | "solo" | "1" => Some(GameConfig::parse(MIN_PLAYERS, Some(second.unwrap_or("easy")))),
        count => {
            let count = count.parse::<usize>().ok()?;
            Some(GameConfig::parse(count, None))
        }
    }
}
