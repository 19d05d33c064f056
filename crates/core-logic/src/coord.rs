use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// The number of columns that can be written as a letter.
const NUM_COLUMNS: u8 = 26;

lazy_static! {
    static ref COORD_PATTERN: Regex = Regex::new("^([a-zA-Z])([0-9]+)$").unwrap();
}

/// A field on a grid.
///
/// Written as a column letter followed by a 1-based row number, so `Coord { x: 0, y: 0 }` is "A1".
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Coord {
    /// The column, starting at 0 for "A".
    pub x: usize,
    /// The row, starting at 0 for "1".
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Coord {
        Coord { x, y }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let column = u8::try_from(self.x)
            .ok()
            .filter(|x| *x < NUM_COLUMNS)
            .map(|x| char::from(b'A' + x))
            .unwrap_or('?');
        match self.y.checked_add(1) {
            Some(row) => write!(f, "{column}{row}"),
            None => write!(f, "{column}?"),
        }
    }
}

/// An error while parsing a coordinate.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoordParseError {
    #[error("{0:?} is not a coordinate, try something like \"A1\"")]
    Malformed(String),
    #[error("row numbers start at 1")]
    ZeroRow,
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let captures = COORD_PATTERN
            .captures(input)
            .ok_or_else(|| CoordParseError::Malformed(input.to_string()))?;

        let column = captures[1].to_ascii_uppercase().as_bytes()[0];
        let row = captures[2]
            .parse::<usize>()
            .map_err(|_| CoordParseError::Malformed(input.to_string()))?;
        if row == 0 {
            return Err(CoordParseError::ZeroRow);
        }

        Ok(Coord {
            x: (column - b'A') as usize,
            y: row - 1,
        })
    }
}
