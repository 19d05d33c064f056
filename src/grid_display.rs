use core_logic::*;
use crossterm::style::{style, StyledContent, Stylize};
use itertools::Itertools;

const EMPTY_FIELD: &str = ".";
const SHIP_FIELD: &str = "#";
const HIT_FIELD: &str = "X";
const MISS_FIELD: &str = "o";
const GRID_SEPARATOR: &str = "    ";

/// What to show for a single field of a rendered grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Field {
    /// Nothing known to be there.
    Unknown,
    /// One of the player's own ships that hasn't been hit there.
    Ship,
    Hit,
    Miss,
}

impl Field {
    fn styled(self) -> StyledContent<&'static str> {
        match self {
            Field::Unknown => style(EMPTY_FIELD).dark_grey(),
            Field::Ship => style(SHIP_FIELD).cyan(),
            Field::Hit => style(HIT_FIELD).red().bold(),
            Field::Miss => style(MISS_FIELD).white(),
        }
    }
}

/// Renders a player's own grid next to what they know about their opponent's grid.
pub fn render_boards(own_grid: &Grid, own_moves: &[Move], opponent_moves: &[Move]) -> String {
    let size = own_grid.size();
    let fleet = render_grid("Your fleet", size, |coord| {
        own_field(own_grid, opponent_moves, coord)
    });
    let shots = render_grid("Your shots", size, |coord| shot_field(own_moves, coord));

    format_side_by_side(&fleet, &shots, GRID_SEPARATOR)
}

/// Determines what to show for a field on the player's own grid.
fn own_field(grid: &Grid, opponent_moves: &[Move], coord: Coord) -> Field {
    match grid.get(coord) {
        Some(Cell::Ship(_)) => Field::Ship,
        Some(Cell::Shot) => shot_field(opponent_moves, coord),
        Some(Cell::Empty) | None => Field::Unknown,
    }
}

/// Determines what to show for a field based on the shots taken at it.
fn shot_field(moves: &[Move], coord: Coord) -> Field {
    match moves.iter().find(|m| m.coord == coord) {
        Some(Move { ship: Some(_), .. }) => Field::Hit,
        Some(Move { ship: None, .. }) => Field::Miss,
        None => Field::Unknown,
    }
}

/// Renders a grid with a title, column letters, and row numbers.
fn render_grid(title: &str, size: usize, field_at: impl Fn(Coord) -> Field) -> String {
    // each field takes up two characters, plus two for the row number
    let width = 2 + size * 2;
    let header = (0..size)
        .map(|x| Coord::new(x, 0).to_string().chars().next().unwrap_or(' '))
        .join(" ");
    let rows = (0..size).map(|y| {
        let fields = (0..size)
            .map(|x| field_at(Coord::new(x, y)).styled())
            .join(" ");
        format!("{:<2}{fields} ", y + 1)
    });

    [format!("{title:<width$}"), format!("  {header} ")]
        .into_iter()
        .chain(rows)
        .join("\n")
}

/// Combines the provided strings into a new string with the contents of the strings next to each other, separated by the provided separator.
fn format_side_by_side(str1: &str, str2: &str, separator: &str) -> String {
    str1.lines()
        .zip_longest(str2.lines())
        .map(|pair| {
            let (a, b) = pair.or_default();
            format!("{a}{separator}{b}")
        })
        .join("\n")
}
