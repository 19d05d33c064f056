mod coord;
pub use coord::*;

mod dialog;
pub use dialog::*;

mod document;
pub use document::*;

mod formatting;
pub use formatting::*;

mod game;
pub use game::*;

mod grid;
pub use grid::*;

mod input_parser;
pub use input_parser::*;

mod opponent;
pub use opponent::*;

mod player_view;
pub use player_view::*;

mod ship;
pub use ship::*;
