use crate::{Coord, Game, GameError, GameState, Grid, Move, Orientation, PlayerToken, Ship, ShotResult};

/// A game as seen by one of its players.
///
/// Every operation is performed as the player this view was created for.
pub struct PlayerView<'g> {
    game: &'g mut Game,
    player_token: PlayerToken,
}

impl<'g> PlayerView<'g> {
    pub(crate) fn new(game: &'g mut Game, player_token: PlayerToken) -> PlayerView<'g> {
        PlayerView { game, player_token }
    }

    /// The player this view belongs to.
    pub fn player_token(&self) -> &PlayerToken {
        &self.player_token
    }

    pub fn game_state(&self) -> Result<GameState, GameError> {
        self.game.game_state(&self.player_token)
    }

    pub fn is_players_turn(&self) -> Result<bool, GameError> {
        self.game.is_players_turn(&self.player_token)
    }

    pub fn ship_to_place(&self) -> Result<Option<&Ship>, GameError> {
        self.game.ship_to_place(&self.player_token)
    }

    pub fn place_ship(&mut self, top_left: Coord, orientation: Orientation) -> Result<(), GameError> {
        self.game.place_ship(&self.player_token, top_left, orientation)
    }

    pub fn shoot_field(&mut self, opponent_field: Coord) -> Result<ShotResult, GameError> {
        self.game.shoot_field(&self.player_token, opponent_field)
    }

    pub fn last_opponent_move(&self) -> Result<Option<Move>, GameError> {
        self.game.last_opponent_move(&self.player_token)
    }

    pub fn moves_done(&self) -> Result<&[Move], GameError> {
        self.game.moves_done(&self.player_token)
    }

    pub fn grid(&self) -> Result<&Grid, GameError> {
        self.game.grid(&self.player_token)
    }

    pub fn ships(&self) -> Result<&[Ship], GameError> {
        self.game.ships(&self.player_token)
    }
}
