//! The select-then-move interaction loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use termchess_core::Board;

use crate::command::{Command, parse_command};
use crate::error::PlayError;
use crate::render::{AnsiPainter, CLEAR_SCREEN, Painter, PlainPainter, render_board, render_status};

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Line that ends the session from either state.
    pub quit_token: String,
    /// Line that drops the selection while a destination is awaited.
    pub cancel_token: String,
    /// Line printed when the session ends.
    pub farewell: String,
    /// Clear the screen before every redraw.
    pub clear_screen: bool,
    /// Draw pieces with ANSI colors and highlight the selected square.
    pub color: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            quit_token: "q".to_string(),
            cancel_token: "c".to_string(),
            farewell: "done.".to_string(),
            clear_screen: true,
            color: true,
        }
    }
}

/// Where the loop is in the select-then-move protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Waiting for the square to move from.
    #[default]
    AwaitingSelection,
    /// A square is selected; waiting for the square to move to.
    AwaitingDestination,
}

impl State {
    /// Prompt shown while in this state.
    pub const fn prompt(self) -> &'static str {
        match self {
            State::AwaitingSelection => "Select a piece: ",
            State::AwaitingDestination => "Select where to move: ",
        }
    }
}

/// Whether the loop keeps going after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A single local game session. Owns its board exclusively.
pub struct Game {
    board: Board,
    state: State,
    config: PlayConfig,
    /// Message about the last rejected line, shown on the next redraw.
    notice: Option<String>,
}

impl Game {
    /// Create a session on the starting layout.
    pub fn new(config: PlayConfig) -> Self {
        Self::with_board(Board::starting_position(), config)
    }

    /// Create a session on an arbitrary board.
    pub fn with_board(board: Board, config: PlayConfig) -> Self {
        Self {
            board,
            state: State::default(),
            config,
            notice: None,
        }
    }

    /// Return the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Return the message about the last rejected line, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handle one input line.
    ///
    /// Malformed squares and illegal moves leave the state and the selection
    /// untouched and are reported through [`Game::notice`].
    pub fn handle_line(&mut self, line: &str) -> Flow {
        self.notice = None;
        let result = parse_command(line, self.state, &self.config).and_then(|cmd| self.apply(cmd));
        match result {
            Ok(flow) => flow,
            Err(e) => {
                warn!(error = %e, state = ?self.state, "input rejected");
                self.notice = Some(e.to_string());
                Flow::Continue
            }
        }
    }

    /// Apply a parsed command to the board and advance the state.
    pub fn apply(&mut self, command: Command) -> Result<Flow, PlayError> {
        match (self.state, command) {
            (_, Command::Quit) => return Ok(Flow::Quit),
            (State::AwaitingSelection, Command::Square(square)) => {
                let piece = self.board.select(square);
                debug!(%square, %piece, "selected");
                self.state = State::AwaitingDestination;
            }
            (State::AwaitingSelection, Command::Cancel) => {
                // Only parsed in the destination state.
                debug!("cancel with nothing selected");
            }
            (State::AwaitingDestination, Command::Cancel) => {
                debug!(square = %self.board.selected(), "selection cancelled");
                self.board.unselect();
                self.state = State::AwaitingSelection;
            }
            (State::AwaitingDestination, Command::Square(to)) => {
                let from = self.board.selected();
                if !self.board.is_valid_move(from, to) {
                    return Err(PlayError::IllegalMove { from, to });
                }
                self.board.move_piece(from, to);
                debug!(%from, %to, "moved");
                self.state = State::AwaitingSelection;
            }
        }
        Ok(Flow::Continue)
    }

    /// Run the loop: redraw, prompt, read one line, handle it.
    ///
    /// Returns when the quit token is read or the input is exhausted. Only
    /// I/O failures are returned as errors.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), PlayError> {
        info!("session started");

        loop {
            self.draw(&mut output)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                info!("input closed");
                writeln!(output)?;
                break;
            }

            if self.handle_line(&line) == Flow::Quit {
                break;
            }
        }

        writeln!(output, "{}", self.config.farewell)?;
        output.flush()?;
        info!("session ended");
        Ok(())
    }

    /// Write one full frame: board, status, notice, prompt.
    fn draw<W: Write>(&self, output: &mut W) -> Result<(), PlayError> {
        if self.config.clear_screen {
            write!(output, "{CLEAR_SCREEN}")?;
        }

        let painter: &dyn Painter = if self.config.color {
            &AnsiPainter
        } else {
            &PlainPainter
        };
        write!(output, "{}", render_board(&self.board, painter))?;
        writeln!(output, "{}", render_status(&self.board))?;
        if let Some(notice) = &self.notice {
            writeln!(output, "{notice}")?;
        }
        write!(output, "{}", self.state.prompt())?;
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Flow, Game, PlayConfig, State};
    use termchess_core::{Board, Coordinate, Piece, PieceKind, Side};

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn new_game() -> Game {
        Game::new(PlayConfig::default())
    }

    #[test]
    fn starts_awaiting_selection() {
        let game = new_game();
        assert_eq!(game.state(), State::AwaitingSelection);
        assert_eq!(game.board().selected(), Coordinate::NONE);
        assert!(game.notice().is_none());
    }

    #[test]
    fn select_then_move() {
        let mut game = new_game();
        assert_eq!(game.handle_line("a7"), Flow::Continue);
        assert_eq!(game.state(), State::AwaitingDestination);
        assert_eq!(game.board().selected(), sq("a7"));

        assert_eq!(game.handle_line("a6"), Flow::Continue);
        assert_eq!(game.state(), State::AwaitingSelection);
        assert_eq!(game.board().get(sq("a6")), Piece::new(PieceKind::Pawn, Side::White));
        assert_eq!(game.board().get(sq("a7")), Piece::EMPTY);
        assert_eq!(game.board().selected(), Coordinate::NONE);
    }

    #[test]
    fn illegal_move_keeps_selection() {
        let mut game = new_game();
        game.handle_line("e2");
        game.handle_line("e2");
        assert_eq!(game.state(), State::AwaitingDestination);
        assert_eq!(game.board().selected(), sq("e2"));
        assert_eq!(game.board().get(sq("e2")), Piece::new(PieceKind::Pawn, Side::Black));
        assert_eq!(game.notice(), Some("illegal move: e2 to e2"));

        // A later legal destination still works from the kept selection.
        game.handle_line("e4");
        assert_eq!(game.state(), State::AwaitingSelection);
        assert_eq!(game.board().get(sq("e4")), Piece::new(PieceKind::Pawn, Side::Black));
        assert!(game.notice().is_none());
    }

    #[test]
    fn empty_to_empty_is_rejected() {
        let mut game = new_game();
        game.handle_line("a5");
        assert_eq!(game.state(), State::AwaitingDestination);
        game.handle_line("a4");
        assert_eq!(game.state(), State::AwaitingDestination);
        assert_eq!(game.board().selected(), sq("a5"));
    }

    #[test]
    fn cancel_unselects() {
        let mut game = new_game();
        game.handle_line("b8");
        game.handle_line("c");
        assert_eq!(game.state(), State::AwaitingSelection);
        assert_eq!(game.board().selected(), Coordinate::NONE);
    }

    #[test]
    fn malformed_input_changes_nothing() {
        let mut game = new_game();
        game.handle_line("z9");
        assert_eq!(game.state(), State::AwaitingSelection);
        assert_eq!(game.board().selected(), Coordinate::NONE);
        assert!(game.notice().is_some_and(|n| n.contains("z9")));

        game.handle_line("d7");
        game.handle_line("D5");
        assert_eq!(game.state(), State::AwaitingDestination);
        assert_eq!(game.board().selected(), sq("d7"));
    }

    #[test]
    fn quit_from_either_state() {
        let mut game = new_game();
        assert_eq!(game.handle_line("q"), Flow::Quit);

        let mut game = new_game();
        game.handle_line("g1");
        assert_eq!(game.handle_line("q"), Flow::Quit);
        assert_eq!(game.board().selected(), sq("g1"));
    }

    #[test]
    fn empty_square_may_move_onto_a_piece() {
        let mut board = Board::new();
        let rook = Piece::new(PieceKind::Rook, Side::Black);
        board.set(rook, sq("h1"));
        let mut game = Game::with_board(board, PlayConfig::default());

        game.handle_line("a1");
        game.handle_line("h1");
        assert_eq!(game.state(), State::AwaitingSelection);
        assert_eq!(game.board().get(sq("h1")), Piece::EMPTY);
        assert_eq!(game.board().get(sq("a1")), Piece::EMPTY);
        assert_eq!(game.board().piece_count(), 0);
    }

    #[test]
    fn capture_replaces_target() {
        let mut game = new_game();
        game.handle_line("d8");
        game.handle_line("d2");
        assert_eq!(game.board().get(sq("d2")), Piece::new(PieceKind::Queen, Side::White));
        assert_eq!(game.board().piece_count(), 31);
    }
}
