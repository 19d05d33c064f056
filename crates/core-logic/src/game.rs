use log::{debug, info};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::{
    generate_ships_to_place, Cell, Coord, Grid, PlacementError, PlayerView, Ship, ShipKind,
    GRID_SIZE,
};

/// Which way a ship extends from its top-left field.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Orientation {
    #[strum(serialize = "horizontal", serialize = "h")]
    Horizontal,
    #[strum(serialize = "vertical", serialize = "v")]
    Vertical,
}

/// The state of the game from the perspective of one player.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
#[strum(serialize_all = "camelCase")]
pub enum GameState {
    Won,
    Lost,
    /// It's the player's turn to shoot.
    CanPlay,
    /// The player is waiting for the opponent to place ships or shoot.
    Wait,
}

/// The outcome of shooting at a field.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
#[strum(serialize_all = "camelCase")]
pub enum ShotResult {
    Hit,
    Miss,
    Sunk,
    AlreadyShot,
}

/// A shot that was taken.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Move {
    /// The field on the opponent's grid that was shot.
    pub coord: Coord,
    /// The kind of ship that was hit, if any.
    pub ship: Option<ShipKind>,
}

/// Uniquely identifies a player in a game.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct PlayerToken(pub String);

impl From<&str> for PlayerToken {
    fn from(token: &str) -> Self {
        PlayerToken(token.to_string())
    }
}

impl std::fmt::Display for PlayerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An error while performing an operation in a game.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("player {0} is not in this game")]
    UnknownPlayer(PlayerToken),
    #[error("it's not your turn")]
    NotYourTurn,
    #[error("all your ships have already been placed")]
    NoShipToPlace,
    #[error("{0} is off the grid")]
    OutOfBounds(Coord),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Everything one player owns in a game.
#[derive(Clone, Debug)]
struct Player {
    token: PlayerToken,
    /// The player's ships, in placement order.
    ships: Vec<Ship>,
    /// The number of ships that have been placed so far.
    num_placed: usize,
    grid: Grid,
    /// The shots this player has taken at the opponent's grid.
    moves_done: Vec<Move>,
}

impl Player {
    fn new(token: PlayerToken) -> Player {
        Player {
            token,
            ships: generate_ships_to_place(),
            num_placed: 0,
            grid: Grid::new(GRID_SIZE),
            moves_done: Vec::new(),
        }
    }

    fn all_ships_placed(&self) -> bool {
        self.num_placed >= self.ships.len()
    }

    fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}

/// A game between two players.
///
/// All operations take the token of the player performing them. Use `Game::view` to avoid
/// passing the token around.
#[derive(Clone, Debug)]
pub struct Game {
    players: [Player; 2],
    /// The index of the player whose turn it is.
    whose_turn: usize,
}

impl Game {
    /// Creates a game where the first player shoots first.
    pub fn new(p1_token: PlayerToken, p2_token: PlayerToken) -> Game {
        info!("Starting game between {p1_token} and {p2_token}");
        Game {
            players: [Player::new(p1_token), Player::new(p2_token)],
            whose_turn: 0,
        }
    }

    /// Creates a view of this game from the perspective of the provided player.
    pub fn view(&mut self, player_token: &PlayerToken) -> Result<PlayerView<'_>, GameError> {
        self.player_index(player_token)?;
        Ok(PlayerView::new(self, player_token.clone()))
    }

    /// Determines the state of the game from the perspective of the provided player.
    pub fn game_state(&self, player_token: &PlayerToken) -> Result<GameState, GameError> {
        let index = self.player_index(player_token)?;
        let player = &self.players[index];
        let opponent = &self.players[opponent_index(index)];

        let state = if player.all_ships_sunk() {
            GameState::Lost
        } else if opponent.all_ships_sunk() {
            GameState::Won
        } else if player.all_ships_placed()
            && opponent.all_ships_placed()
            && self.whose_turn == index
        {
            GameState::CanPlay
        } else {
            GameState::Wait
        };

        Ok(state)
    }

    /// Determines whether it's the provided player's turn.
    pub fn is_players_turn(&self, player_token: &PlayerToken) -> Result<bool, GameError> {
        Ok(self.whose_turn == self.player_index(player_token)?)
    }

    /// Finds the ship the provided player has to place next, if any.
    pub fn ship_to_place(&self, player_token: &PlayerToken) -> Result<Option<&Ship>, GameError> {
        let player = &self.players[self.player_index(player_token)?];
        Ok(player.ships.get(player.num_placed))
    }

    /// Places the provided player's next ship with its top-left field at the provided coordinate.
    pub fn place_ship(
        &mut self,
        player_token: &PlayerToken,
        top_left: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let index = self.player_index(player_token)?;
        let player = &mut self.players[index];
        let ship_index = player.num_placed;
        let ship = player
            .ships
            .get_mut(ship_index)
            .ok_or(GameError::NoShipToPlace)?;

        // a ship that would run past the largest representable coordinate is off the grid too
        let coords = (0..ship.size())
            .map(|offset| match orientation {
                Orientation::Horizontal => top_left
                    .x
                    .checked_add(offset)
                    .map(|x| Coord::new(x, top_left.y)),
                Orientation::Vertical => top_left
                    .y
                    .checked_add(offset)
                    .map(|y| Coord::new(top_left.x, y)),
            })
            .collect::<Option<Vec<Coord>>>()
            .ok_or(PlacementError::OutOfBounds(top_left))?;

        player.grid.put(ship_index, &coords)?;
        debug!("{player_token} placed {} at {top_left} {orientation}", ship.kind);
        ship.coords = coords;
        player.num_placed += 1;

        Ok(())
    }

    /// Shoots at a field on the opponent's grid.
    ///
    /// Shooting a field that was already shot doesn't use up the player's turn.
    pub fn shoot_field(
        &mut self,
        player_token: &PlayerToken,
        opponent_field: Coord,
    ) -> Result<ShotResult, GameError> {
        if self.game_state(player_token)? != GameState::CanPlay {
            return Err(GameError::NotYourTurn);
        }

        let index = self.player_index(player_token)?;
        let opponent = &mut self.players[opponent_index(index)];
        let cell = opponent
            .grid
            .get_mut(opponent_field)
            .ok_or(GameError::OutOfBounds(opponent_field))?;

        let current = *cell;
        let (result, ship) = match current {
            Cell::Empty => {
                *cell = Cell::Shot;
                (ShotResult::Miss, None)
            }
            Cell::Shot => (ShotResult::AlreadyShot, None),
            Cell::Ship(ship_index) => {
                *cell = Cell::Shot;
                let ship = &mut opponent.ships[ship_index];
                ship.hit();
                let result = if ship.is_sunk() {
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                };
                (result, Some(ship.kind))
            }
        };
        debug!("{player_token} shot at {opponent_field}: {result}");

        if result != ShotResult::AlreadyShot {
            self.players[index].moves_done.push(Move {
                coord: opponent_field,
                ship,
            });
            self.whose_turn = opponent_index(index);
        }

        Ok(result)
    }

    /// Finds the most recent shot the provided player's opponent took, if any.
    pub fn last_opponent_move(&self, player_token: &PlayerToken) -> Result<Option<Move>, GameError> {
        let index = self.player_index(player_token)?;
        Ok(self.players[opponent_index(index)].moves_done.last().copied())
    }

    /// All the shots the provided player has taken, oldest first.
    pub fn moves_done(&self, player_token: &PlayerToken) -> Result<&[Move], GameError> {
        Ok(&self.players[self.player_index(player_token)?].moves_done)
    }

    /// The provided player's own grid.
    pub fn grid(&self, player_token: &PlayerToken) -> Result<&Grid, GameError> {
        Ok(&self.players[self.player_index(player_token)?].grid)
    }

    /// The provided player's fleet, in placement order.
    pub fn ships(&self, player_token: &PlayerToken) -> Result<&[Ship], GameError> {
        Ok(&self.players[self.player_index(player_token)?].ships)
    }

    fn player_index(&self, player_token: &PlayerToken) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|player| &player.token == player_token)
            .ok_or_else(|| GameError::UnknownPlayer(player_token.clone()))
    }
}

fn opponent_index(index: usize) -> usize {
    1 - index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p1() -> PlayerToken {
        PlayerToken::from("p1")
    }

    fn p2() -> PlayerToken {
        PlayerToken::from("p2")
    }

    /// Places every ship in its own row, starting at column A.
    fn place_all(game: &mut Game, player: &PlayerToken) {
        let mut row = 0;
        while game.ship_to_place(player).unwrap().is_some() {
            game.place_ship(player, Coord::new(0, row), Orientation::Horizontal)
                .unwrap();
            row += 1;
        }
    }

    fn placed_game() -> Game {
        let mut game = Game::new(p1(), p2());
        place_all(&mut game, &p1());
        place_all(&mut game, &p2());
        game
    }

    #[test]
    fn both_wait_while_placing() {
        let mut game = Game::new(p1(), p2());
        place_all(&mut game, &p1());

        assert_eq!(Ok(GameState::Wait), game.game_state(&p1()));
        assert_eq!(Ok(GameState::Wait), game.game_state(&p2()));
    }

    #[test]
    fn first_player_can_play_once_placed() {
        let game = placed_game();

        assert_eq!(Ok(GameState::CanPlay), game.game_state(&p1()));
        assert_eq!(Ok(GameState::Wait), game.game_state(&p2()));
        assert_eq!(Ok(true), game.is_players_turn(&p1()));
    }

    #[test]
    fn ships_are_placed_in_fleet_order() {
        let mut game = Game::new(p1(), p2());

        assert_eq!(
            Some(ShipKind::Battleship),
            game.ship_to_place(&p1()).unwrap().map(|ship| ship.kind)
        );
        game.place_ship(&p1(), Coord::new(0, 0), Orientation::Vertical)
            .unwrap();
        assert_eq!(
            Some(ShipKind::Destroyer),
            game.ship_to_place(&p1()).unwrap().map(|ship| ship.kind)
        );

        assert_eq!(
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(0, 3)
            ],
            game.ships(&p1()).unwrap()[0].coords
        );
        let grid = game.grid(&p1()).unwrap();
        assert_eq!(Some(Cell::Ship(0)), grid.get(Coord::new(0, 3)));
        assert_eq!(Some(Cell::Empty), grid.get(Coord::new(0, 4)));
    }

    #[test]
    fn failed_placement_keeps_ship_to_place() {
        let mut game = Game::new(p1(), p2());

        let result = game.place_ship(&p1(), Coord::new(4, 0), Orientation::Horizontal);

        assert_eq!(
            Err(GameError::Placement(PlacementError::OutOfBounds(
                Coord::new(6, 0)
            ))),
            result
        );
        assert_eq!(
            Some(ShipKind::Battleship),
            game.ship_to_place(&p1()).unwrap().map(|ship| ship.kind)
        );
    }

    #[test]
    fn placement_past_largest_coordinate() {
        let mut game = Game::new(p1(), p2());
        let far_away = Coord::new(0, usize::MAX - 1);

        assert_eq!(
            Err(GameError::Placement(PlacementError::OutOfBounds(far_away))),
            game.place_ship(&p1(), far_away, Orientation::Vertical)
        );
        assert_eq!(
            Err(GameError::Placement(PlacementError::OutOfBounds(
                Coord::new(usize::MAX, 0)
            ))),
            game.place_ship(&p1(), Coord::new(usize::MAX, 0), Orientation::Horizontal)
        );
        assert_eq!(
            Some(ShipKind::Battleship),
            game.ship_to_place(&p1()).unwrap().map(|ship| ship.kind)
        );
    }

    #[test]
    fn placement_at_parsed_huge_row() {
        let mut game = Game::new(p1(), p2());
        let top_left = "A18446744073709551615".parse::<Coord>().unwrap();

        assert_eq!(
            Err(GameError::Placement(PlacementError::OutOfBounds(top_left))),
            game.place_ship(&p1(), top_left, Orientation::Vertical)
        );
    }

    #[test]
    fn overlapping_placement() {
        let mut game = Game::new(p1(), p2());
        game.place_ship(&p1(), Coord::new(0, 0), Orientation::Horizontal)
            .unwrap();

        let result = game.place_ship(&p1(), Coord::new(2, 0), Orientation::Vertical);

        assert_eq!(
            Err(GameError::Placement(PlacementError::OccupiedFields(vec![
                Coord::new(2, 0)
            ]))),
            result
        );
    }

    #[test]
    fn no_ship_to_place() {
        let mut game = Game::new(p1(), p2());
        place_all(&mut game, &p1());

        assert_eq!(Ok(None), game.ship_to_place(&p1()));
        assert_eq!(
            Err(GameError::NoShipToPlace),
            game.place_ship(&p1(), Coord::new(0, 5), Orientation::Horizontal)
        );
    }

    #[test]
    fn shooting_before_placement_is_not_allowed() {
        let mut game = Game::new(p1(), p2());

        assert_eq!(
            Err(GameError::NotYourTurn),
            game.shoot_field(&p1(), Coord::new(0, 0))
        );
    }

    #[test]
    fn shooting_out_of_turn() {
        let mut game = placed_game();

        assert_eq!(
            Err(GameError::NotYourTurn),
            game.shoot_field(&p2(), Coord::new(0, 0))
        );
    }

    #[test]
    fn miss_passes_turn() {
        let mut game = placed_game();

        assert_eq!(
            Ok(ShotResult::Miss),
            game.shoot_field(&p1(), Coord::new(5, 5))
        );
        assert_eq!(Ok(GameState::Wait), game.game_state(&p1()));
        assert_eq!(Ok(GameState::CanPlay), game.game_state(&p2()));
        assert_eq!(
            Ok(Some(Move {
                coord: Coord::new(5, 5),
                ship: None
            })),
            game.last_opponent_move(&p2())
        );
    }

    #[test]
    fn hit_then_already_shot() {
        let mut game = placed_game();

        assert_eq!(Ok(ShotResult::Hit), game.shoot_field(&p1(), Coord::new(0, 0)));
        assert_eq!(Ok(ShotResult::Miss), game.shoot_field(&p2(), Coord::new(5, 5)));

        assert_eq!(
            Ok(ShotResult::AlreadyShot),
            game.shoot_field(&p1(), Coord::new(0, 0))
        );
        // still p1's turn, and nothing recorded
        assert_eq!(Ok(true), game.is_players_turn(&p1()));
        assert_eq!(1, game.moves_done(&p1()).unwrap().len());
        assert_eq!(
            Ok(Some(Move {
                coord: Coord::new(0, 0),
                ship: Some(ShipKind::Battleship)
            })),
            game.last_opponent_move(&p2())
        );
    }

    #[test]
    fn sinking_a_ship() {
        let mut game = placed_game();

        // the first submarine is in row 3
        assert_eq!(Ok(ShotResult::Hit), game.shoot_field(&p1(), Coord::new(0, 2)));
        game.shoot_field(&p2(), Coord::new(5, 5)).unwrap();
        assert_eq!(Ok(ShotResult::Sunk), game.shoot_field(&p1(), Coord::new(1, 2)));

        assert!(game.ships(&p2()).unwrap()[2].is_sunk());
        assert!(!game.ships(&p2()).unwrap()[3].is_sunk());
    }

    #[test]
    fn shooting_off_grid() {
        let mut game = placed_game();

        assert_eq!(
            Err(GameError::OutOfBounds(Coord::new(6, 0))),
            game.shoot_field(&p1(), Coord::new(6, 0))
        );
        assert_eq!(Ok(true), game.is_players_turn(&p1()));
    }

    #[test]
    fn winning_and_losing() {
        let mut game = placed_game();
        let ship_fields = game
            .grid(&p2())
            .unwrap()
            .coords()
            .filter(|coord| matches!(game.grid(&p2()).unwrap().get(*coord), Some(Cell::Ship(_))))
            .collect::<Vec<Coord>>();
        // p1's ships only take up the first four rows
        let mut misses = game
            .grid(&p1())
            .unwrap()
            .coords()
            .filter(|coord| coord.y >= 4)
            .collect::<Vec<Coord>>()
            .into_iter();
        for (i, coord) in ship_fields.iter().enumerate() {
            game.shoot_field(&p1(), *coord).unwrap();
            if i < ship_fields.len() - 1 {
                game.shoot_field(&p2(), misses.next().unwrap()).unwrap();
            }
        }

        assert_eq!(Ok(GameState::Won), game.game_state(&p1()));
        assert_eq!(Ok(GameState::Lost), game.game_state(&p2()));
        assert_eq!(
            Err(GameError::NotYourTurn),
            game.shoot_field(&p2(), Coord::new(0, 0))
        );
    }

    #[test]
    fn unknown_player() {
        let game = Game::new(p1(), p2());
        let stranger = PlayerToken::from("p3");

        assert_eq!(
            Err(GameError::UnknownPlayer(stranger.clone())),
            game.game_state(&stranger)
        );
    }

    #[test]
    fn state_names() {
        assert_eq!("canPlay", GameState::CanPlay.to_string());
        assert_eq!("alreadyShot", ShotResult::AlreadyShot.to_string());
    }

    #[test]
    fn parse_orientation() {
        assert_eq!(Ok(Orientation::Horizontal), "h".parse());
        assert_eq!(Ok(Orientation::Vertical), "Vertical".parse());
        assert!("diagonal".parse::<Orientation>().is_err());
    }
}
