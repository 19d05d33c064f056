use itertools::Itertools;
use nonempty::NonEmpty;

use crate::Coord;

/// Formats a space-separated list of coordinates into a single phrase.
///
/// The last coordinate is replaced with "and" before joining, and then appended after it,
/// so `"A1 A2 A3"` becomes `"A1, A2, and A3"` and `"A1 A2"` becomes `"A1, and A2"`.
/// A single coordinate is returned unchanged.
pub fn split_coords(coords: &str) -> String {
    let mut split = coords.split(' ');
    // `split` always yields at least one item, even for an empty string
    let first = split.next().unwrap_or_default();
    let mut tokens = NonEmpty::from((first, split.collect::<Vec<&str>>()));

    if tokens.len() == 1 {
        return tokens.head.to_string();
    }

    let last_coord = *tokens.last();
    *tokens.last_mut() = "and";

    format!("{} {last_coord}", tokens.iter().join(", "))
}

/// Formats a list of coordinates into a single phrase, like "A1, A2, and A3".
pub fn format_coords(coords: &[Coord]) -> String {
    split_coords(&coords.iter().join(" "))
}
