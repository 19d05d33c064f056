use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::{Coord, CoordParseError, Orientation};

lazy_static! {
    static ref PLACE_PATTERN: Regex =
        Regex::new(r"^(p|place)\s+(?P<coord>\S+)(\s+(?P<orientation>\S+))?$").unwrap();
    static ref SHOOT_PATTERN: Regex = Regex::new(r"^(s|shoot)\s+(?P<coord>\S+)$").unwrap();
    static ref BARE_COORD_PATTERN: Regex = Regex::new(r"^[a-z][0-9]+$").unwrap();
    static ref BOARD_PATTERN: Regex = Regex::new("^(b|board)$").unwrap();
    static ref HELP_PATTERN: Regex = Regex::new(r"^(\?|help)$").unwrap();
    static ref QUIT_PATTERN: Regex = Regex::new("^(q|quit|exit)$").unwrap();
}

/// Something a player wants to do.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// Place the next ship with its top-left field at a coordinate.
    Place {
        top_left: Coord,
        orientation: Orientation,
    },
    /// Shoot at a field on the opponent's grid.
    Shoot(Coord),
    /// Show both grids.
    Board,
    Help,
    Quit,
}

/// An error while parsing input.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum InputParseError {
    #[error("I don't understand that.")]
    UnknownCommand,
    #[error(transparent)]
    InvalidCoord(#[from] CoordParseError),
    #[error("which way should it face? Add \"h\" or \"v\".")]
    MissingOrientation,
    #[error("{0:?} isn't a direction, use \"h\" or \"v\".")]
    InvalidOrientation(String),
}

/// Parses the provided string to a `Command`.
pub fn parse_input(input: &str) -> Result<Command, InputParseError> {
    let input = input.trim().to_lowercase();
    debug!("Parsing input: {input:?}");

    if let Some(captures) = PLACE_PATTERN.captures(&input) {
        let top_left = captures["coord"].parse()?;
        let orientation = match captures.name("orientation") {
            Some(orientation) => orientation
                .as_str()
                .parse()
                .map_err(|_| InputParseError::InvalidOrientation(orientation.as_str().to_string()))?,
            None => return Err(InputParseError::MissingOrientation),
        };
        return Ok(Command::Place {
            top_left,
            orientation,
        });
    }

    if let Some(captures) = SHOOT_PATTERN.captures(&input) {
        return Ok(Command::Shoot(captures["coord"].parse()?));
    }

    if BARE_COORD_PATTERN.is_match(&input) {
        return Ok(Command::Shoot(input.parse()?));
    }

    if BOARD_PATTERN.is_match(&input) {
        return Ok(Command::Board);
    }

    if HELP_PATTERN.is_match(&input) {
        return Ok(Command::Help);
    }

    if QUIT_PATTERN.is_match(&input) {
        return Ok(Command::Quit);
    }

    Err(InputParseError::UnknownCommand)
}
