//! Terminal interaction for termchess: command parsing, the select/move loop, and board rendering.

pub mod command;
pub mod engine;
pub mod error;
pub mod render;

pub use command::{Command, parse_command};
pub use engine::{Flow, Game, PlayConfig, State};
pub use error::PlayError;
pub use render::{AnsiPainter, Painter, PlainPainter, render_board, render_status};
