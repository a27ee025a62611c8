//! Turn order and terminal-state machine.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::action::{MoveError, MoveOutcome};
use crate::board::Board;
use crate::rules::{self, WinningLine};
use crate::types::{GRID_SIZE, GameStatus, Player, Roster, Scores};

/// Complete state of one game plus the session's score tally.
///
/// [`GameState::apply_move`] is the only operation that mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    roster: Roster,
    mover: usize,
    scores: Scores,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    history: Vec<usize>,
}

impl GameState {
    /// Creates a new game on the standard grid with zeroed scores.
    #[instrument(skip(roster), fields(players = roster.len()))]
    pub fn new(roster: Roster) -> Self {
        Self::with_grid_size(roster, GRID_SIZE)
    }

    /// Creates a new game on a `grid_size`×`grid_size` board.
    pub fn with_grid_size(roster: Roster, grid_size: usize) -> Self {
        let scores = Scores::for_roster(&roster);
        Self {
            board: Board::new(grid_size),
            roster,
            mover: 0,
            scores,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Builds a state around an existing position, for analysis.
    ///
    /// The status is derived from the board: the first roster symbol with a
    /// winning pattern wins, otherwise a full board is a draw. Scores start at
    /// zero and the history is empty.
    #[instrument(skip(roster, board))]
    pub fn from_position(roster: Roster, board: Board, mover: usize) -> Self {
        let mover = mover % roster.len();
        let scores = Scores::for_roster(&roster);

        let won = roster.symbols().find_map(|symbol| {
            rules::locate_winning_cells(&board, symbol).map(|line| (symbol, line))
        });
        let (status, winning_line) = match won {
            Some((symbol, line)) => (GameStatus::Won(symbol), Some(line)),
            None if rules::is_full(&board) => (GameStatus::Draw, None),
            None => (GameStatus::InProgress, None),
        };

        Self {
            board,
            roster,
            mover,
            scores,
            status,
            winning_line,
            history: Vec::new(),
        }
    }

    /// Replays `moves` from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit while replaying.
    #[instrument(skip(roster))]
    pub fn replay(roster: Roster, moves: &[usize]) -> Result<Self, MoveError> {
        let mut state = Self::new(roster);
        for &index in moves {
            state.apply_move(index)?;
        }
        Ok(state)
    }

    /// Fresh game with the same roster and grid, keeping the score tally.
    #[instrument(skip(self))]
    pub fn rematch(&self) -> Self {
        debug!(games_decided = self.scores.total(), "Starting rematch");
        Self {
            scores: self.scores.clone(),
            ..Self::with_grid_size(self.roster.clone(), self.board.grid_size())
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seated players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Seat index of the player to move.
    pub fn current_seat(&self) -> usize {
        self.mover
    }

    /// The player to move (or the player who made the last move, once terminal).
    pub fn current_player(&self) -> Player {
        self.roster.seat(self.mover)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the session score tally.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Winning pattern of a won game.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Indices played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Places the current player's symbol at `index`.
    ///
    /// # Errors
    ///
    /// Rejects the move without touching any state if the game is over, the
    /// index is off the board, or the square is taken.
    #[instrument(skip(self), fields(player = %self.current_player().symbol()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            warn!("Move attempted after game over");
            return Err(MoveError::GameOver);
        }
        if index >= self.board.len() {
            warn!("Move off the board");
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board.is_vacant(index) {
            warn!("Move onto occupied square");
            return Err(MoveError::Occupied(index));
        }

        let symbol = self.current_player().symbol();
        self.board.set(index, symbol);
        self.history.push(index);

        if let Some(line) = rules::locate_winning_cells(&self.board, symbol) {
            self.scores.record_win(symbol);
            self.status = GameStatus::Won(symbol);
            self.winning_line = Some(line);
            info!(winner = %symbol, cells = ?line.cells(), "Game won");
            return Ok(MoveOutcome::Won {
                winner: symbol,
                line,
            });
        }

        if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
            return Ok(MoveOutcome::Draw);
        }

        self.mover = (self.mover + 1) % self.roster.len();
        let next = self.current_player().symbol();
        debug!(next = %next, "Turn passes");
        Ok(MoveOutcome::Continue { next })
    }
}
