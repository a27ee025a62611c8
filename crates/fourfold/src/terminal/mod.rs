//! Line-based terminal front end.

mod input;
mod render;

pub use input::{Input, parse_input, parse_mode};
pub use render::{describe, render_board, scoreboard};

use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use fourfold_core::{GRID_SIZE, GameController, GameEvent, GameObserver};
use tracing::{debug, info, instrument, warn};

use crate::settings::{EventFormat, Settings};

const HELP: &str = "\
Commands:
  row col   play a square, e.g. `2 3`
  N         play square N (0-35, row-major)
  r         restart, keeping scores
  m         choose a new mode
  q         quit";

const MODE_PROMPT: &str = "Mode: `solo [easy|medium|hard]` against the computer, or 2-4 for local play";

/// Prints controller events to stdout.
#[derive(Debug, Clone, Copy)]
pub struct EventPrinter {
    format: EventFormat,
}

impl EventPrinter {
    /// Creates a printer for `format`.
    pub fn new(format: EventFormat) -> Self {
        Self { format }
    }
}

impl GameObserver for EventPrinter {
    fn notify(&mut self, event: &GameEvent) {
        match self.format {
            EventFormat::Text => {
                if let Some(message) = describe(event, GRID_SIZE) {
                    println!("{message}");
                }
            }
            EventFormat::Json => match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!(error = %e, "Failed to encode event"),
            },
        }
    }
}

/// Plays an interactive game on stdin/stdout.
///
/// In JSON mode stdout carries only the event stream; the board and
/// prompts go to stderr.
#[instrument(skip(settings))]
pub fn play(settings: &Settings) -> Result<()> {
    let mut controller = GameController::start(settings.game_config()?)?;
    let format = *settings.events();
    controller.subscribe(EventPrinter::new(format));

    let delay = Duration::from_millis(*settings.ai_delay_ms());
    let stdin = io::stdin();
    match format {
        EventFormat::Text => {
            let color = io::stdout().is_terminal();
            run_session(&mut controller, stdin.lock(), &mut io::stdout(), delay, color)
        }
        EventFormat::Json => {
            run_session(&mut controller, stdin.lock(), &mut io::stderr(), delay, false)
        }
    }
}

/// Drives `controller` from `input` until quit or end of input.
pub fn run_session(
    controller: &mut GameController,
    input: impl BufRead,
    screen: &mut impl Write,
    delay: Duration,
    color: bool,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        if controller.is_ai_turn() {
            thread::sleep(delay);
            controller.play_ai_turn()?;
            continue;
        }

        draw(controller, screen, color)?;
        let Some(line) = lines.next() else {
            info!("Input closed");
            break;
        };
        let line = line?;
        let grid = controller.state().board().grid_size();

        match parse_input(&line, grid) {
            Some(Input::Cell(index)) => {
                if let Err(e) = controller.apply_move(index) {
                    debug!(index, error = %e, "Move rejected");
                    writeln!(screen, "{e}")?;
                }
            }
            Some(Input::Restart) => controller.restart(),
            Some(Input::Modes) => {
                if !choose_mode(controller, &mut lines, screen)? {
                    break;
                }
            }
            Some(Input::Quit) => break,
            Some(Input::Help) => writeln!(screen, "{HELP}")?,
            None => writeln!(screen, "Unrecognized input {:?}; type h for help", line.trim())?,
        }
    }

    writeln!(screen, "Final score: {}", scoreboard(controller.scores()))?;
    Ok(())
}

fn draw(controller: &GameController, screen: &mut impl Write, color: bool) -> Result<()> {
    let state = controller.state();
    writeln!(screen)?;
    write!(screen, "{}", render_board(state, color))?;
    writeln!(screen, "Score: {}", scoreboard(state.scores()))?;
    if state.is_terminal() {
        writeln!(screen, "Game over. r to play again, m to change mode, q to quit")?;
    } else {
        writeln!(screen, "{} to move", state.current_player().symbol())?;
    }
    screen.flush()?;
    Ok(())
}

/// Prompts until a valid mode is entered. Returns false if input ran out.
fn choose_mode(
    controller: &mut GameController,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    screen: &mut impl Write,
) -> Result<bool> {
    loop {
        writeln!(screen, "{MODE_PROMPT}")?;
        screen.flush()?;
        let Some(line) = lines.next() else {
            return Ok(false);
        };
        match parse_mode(&line?) {
            Some(Ok(config)) => {
                info!(?config, "Mode selected");
                controller.reconfigure(config)?;
                return Ok(true);
            }
            Some(Err(e)) => writeln!(screen, "{e}")?,
            None => writeln!(screen, "Unrecognized mode")?,
        }
    }
}
