//! Text rendering of the board, scoreboard and event messages.

use std::fmt::Write;

use fourfold_core::{GameEvent, GameState, Scores, Square, Symbol};

/// Wraps `text` in a 24-bit ANSI foreground color when `color` is set.
fn paint(text: &str, hex: &str, color: bool) -> String {
    match hex_rgb(hex) {
        Some((r, g, b)) if color => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        _ => text.to_string(),
    }
}

/// Parses `#rrggbb`.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn symbol_text(symbol: Symbol, color: bool) -> String {
    paint(&symbol.to_string(), symbol.color(), color)
}

/// Renders the grid with row and column labels.
///
/// Winning cells are bracketed: `[X]`.
pub fn render_board(state: &GameState, color: bool) -> String {
    let board = state.board();
    let grid = board.grid_size();
    let highlight = state.winning_line();

    let mut out = String::from("   ");
    for col in 0..grid {
        let _ = write!(out, " {col} ");
    }
    out.push('\n');

    for row in 0..grid {
        let _ = write!(out, "{row:>2} ");
        for col in 0..grid {
            let idx = board.index(row, col);
            let cell = match board.get(idx) {
                Square::Empty => ".".to_string(),
                Square::Occupied(symbol) => symbol_text(symbol, color),
            };
            if highlight.is_some_and(|line| line.contains(idx)) {
                let _ = write!(out, "[{cell}]");
            } else {
                let _ = write!(out, " {cell} ");
            }
        }
        out.push('\n');
    }
    out
}

/// One-line tally, e.g. `X 2 | O 1`.
pub fn scoreboard(scores: &Scores) -> String {
    scores
        .iter()
        .map(|(symbol, wins)| format!("{symbol} {wins}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Human-readable message for an event, if it warrants one.
///
/// Turn changes are left to the prompt.
pub fn describe(event: &GameEvent, grid_size: usize) -> Option<String> {
    match event {
        GameEvent::GameStarted { players, scores } => {
            let seats = players
                .iter()
                .map(|player| player.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" vs ");
            Some(format!("New game: {seats}. Score: {}", scoreboard(scores)))
        }
        GameEvent::MovePlayed { index, symbol } => Some(format!(
            "{symbol} played row {}, col {}",
            index / grid_size,
            index % grid_size
        )),
        GameEvent::TurnChanged { .. } => None,
        GameEvent::GameWon { winner, scores, .. } => {
            Some(format!("{winner} wins! Score: {}", scoreboard(scores)))
        }
        GameEvent::GameDrawn => Some("Draw! The board is full.".to_string()),
    }
}
