use std::collections::HashSet;

use log::{debug, trace};
use rand::{seq::SliceRandom, Rng};

use crate::{Coord, GameError, Grid, Move, Orientation, PlayerView};

/// The number of random positions to try for a single ship before giving up.
const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Places all the remaining ships of the viewing player at random positions.
pub fn place_fleet_randomly<R: Rng>(view: &mut PlayerView, rng: &mut R) -> Result<(), GameError> {
    while let Some(kind) = view.ship_to_place()?.map(|ship| ship.kind) {
        let size = view.grid()?.size();
        let mut attempts = 0;
        loop {
            let orientation = if rng.gen_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let top_left = Coord::new(rng.gen_range(0..size), rng.gen_range(0..size));

            match view.place_ship(top_left, orientation) {
                Ok(()) => {
                    debug!("Randomly placed {kind} at {top_left} {orientation}");
                    break;
                }
                Err(GameError::Placement(e)) => {
                    trace!("Couldn't place {kind} at {top_left} {orientation}: {e}");
                    attempts += 1;
                    if attempts >= MAX_PLACEMENT_ATTEMPTS {
                        return Err(GameError::Placement(e));
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}

/// Chooses a random field on the opponent's grid that hasn't been shot at yet.
///
/// Returns `None` if every field has been shot at.
pub fn choose_target<R: Rng>(opponent_grid: &Grid, moves_done: &[Move], rng: &mut R) -> Option<Coord> {
    let already_shot = moves_done
        .iter()
        .map(|m| m.coord)
        .collect::<HashSet<Coord>>();
    let candidates = opponent_grid
        .coords()
        .filter(|coord| !already_shot.contains(coord))
        .collect::<Vec<Coord>>();

    candidates.choose(rng).copied()
}
