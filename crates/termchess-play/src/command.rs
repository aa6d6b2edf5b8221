//! Input line parsing.

use termchess_core::Coordinate;

use crate::engine::{PlayConfig, State};
use crate::error::PlayError;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Quit token -- leave the loop.
    Quit,
    /// Cancel token -- drop the current selection. Destination state only.
    Cancel,
    /// A square reference such as `e2`.
    Square(Coordinate),
}

/// Parse a single input line into a [`Command`].
///
/// The cancel token is only recognized while a destination is awaited; in
/// the selection state it is treated as (malformed) square text.
pub fn parse_command(line: &str, state: State, config: &PlayConfig) -> Result<Command, PlayError> {
    let input = line.trim();

    if input == config.quit_token {
        return Ok(Command::Quit);
    }
    if state == State::AwaitingDestination && input == config.cancel_token {
        return Ok(Command::Cancel);
    }

    Ok(Command::Square(input.parse::<Coordinate>()?))
}

#[cfg(test)]
mod tests {
    use super::{Command, parse_command};
    use crate::engine::{PlayConfig, State};
    use crate::error::PlayError;
    use termchess_core::Coordinate;

    fn parse(line: &str, state: State) -> Result<Command, PlayError> {
        parse_command(line, state, &PlayConfig::default())
    }

    #[test]
    fn parse_quit_in_both_states() {
        assert_eq!(parse("q", State::AwaitingSelection).unwrap(), Command::Quit);
        assert_eq!(parse("q\n", State::AwaitingDestination).unwrap(), Command::Quit);
    }

    #[test]
    fn parse_cancel_only_when_awaiting_destination() {
        assert_eq!(parse("c", State::AwaitingDestination).unwrap(), Command::Cancel);
        assert!(matches!(
            parse("c", State::AwaitingSelection),
            Err(PlayError::MalformedCoordinate(_))
        ));
    }

    #[test]
    fn parse_square() {
        assert_eq!(
            parse("e2", State::AwaitingSelection).unwrap(),
            Command::Square(Coordinate::new(5, 2))
        );
        assert_eq!(
            parse("  h8 ", State::AwaitingDestination).unwrap(),
            Command::Square(Coordinate::new(8, 8))
        );
    }

    #[test]
    fn parse_malformed() {
        for line in ["", "Q", "E2", "i4", "a9", "quit"] {
            assert!(
                matches!(
                    parse(line, State::AwaitingSelection),
                    Err(PlayError::MalformedCoordinate(_))
                ),
                "{line:?} should be malformed"
            );
        }
    }

    #[test]
    fn custom_tokens() {
        let config = PlayConfig {
            quit_token: "exit".to_string(),
            cancel_token: "back".to_string(),
            ..PlayConfig::default()
        };
        assert_eq!(
            parse_command("exit", State::AwaitingSelection, &config).unwrap(),
            Command::Quit
        );
        assert_eq!(
            parse_command("back", State::AwaitingDestination, &config).unwrap(),
            Command::Cancel
        );
        assert!(parse_command("q", State::AwaitingSelection, &config).is_err());
    }
}
