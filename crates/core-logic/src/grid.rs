use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{format_coords, Coord};

/// The width and height of each player's grid.
pub const GRID_SIZE: usize = 6;

/// What's on a single field of a grid.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    Empty,
    /// Part of a ship, identified by its index in the owning player's fleet.
    Ship(usize),
    /// The field has been shot at.
    Shot,
}

/// An error while placing a ship on a grid.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PlacementError {
    #[error("{0} is off the grid")]
    OutOfBounds(Coord),
    #[error("{} already occupied", format_coords(.0))]
    OccupiedFields(Vec<Coord>),
}

/// A square field of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    /// Indexed by x, then y.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(size: usize) -> Grid {
        Grid {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the provided coordinate, or `None` if it's off the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.x)?.get(coord.y).copied()
    }

    /// Gets a mutable reference to the cell at the provided coordinate, or `None` if it's off the grid.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut(coord.x)?.get_mut(coord.y)
    }

    /// All the coordinates on the grid, column by column.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        (0..self.size)
            .cartesian_product(0..self.size)
            .map(|(x, y)| Coord::new(x, y))
    }

    /// Puts the ship with the provided fleet index on all the provided coordinates.
    ///
    /// Nothing is changed if any of the coordinates are off the grid or already occupied.
    pub fn put(&mut self, ship_index: usize, coords: &[Coord]) -> Result<(), PlacementError> {
        if let Some(coord) = coords.iter().find(|coord| self.get(**coord).is_none()) {
            return Err(PlacementError::OutOfBounds(*coord));
        }

        let occupied_fields = coords
            .iter()
            .filter(|coord| self.get(**coord) != Some(Cell::Empty))
            .copied()
            .collect::<Vec<Coord>>();
        if !occupied_fields.is_empty() {
            return Err(PlacementError::OccupiedFields(occupied_fields));
        }

        for coord in coords {
            if let Some(cell) = self.get_mut(*coord) {
                *cell = Cell::Ship(ship_index);
            }
        }
        debug!("Put ship {ship_index} at {}", format_coords(coords));

        Ok(())
    }
}
