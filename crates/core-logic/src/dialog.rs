use std::collections::HashMap;

use log::debug;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::{attr, format_coords, Coord, ShipKind};

/// The messages shown to a player over the course of a game.
///
/// Each message is read from the attribute of the same name on the root element of a dialog document.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum DialogKey {
    Greeting,
    Place,
    Shoot,
    Hit,
    Miss,
    Sunk,
    AlreadyShot,
    Won,
    Lost,
    Wait,
}

impl DialogKey {
    /// The text to use if the dialog document doesn't provide this message.
    fn default_text(&self) -> &'static str {
        match self {
            DialogKey::Greeting => "Welcome to battleships!",
            DialogKey::Place => "Place your {ship}.",
            DialogKey::Shoot => "Your turn to shoot.",
            DialogKey::Hit => "Hit at {coords}!",
            DialogKey::Miss => "Miss at {coords}.",
            DialogKey::Sunk => "The {ship} at {coords} has been sunk!",
            DialogKey::AlreadyShot => "{coords} has already been shot at.",
            DialogKey::Won => "You won!",
            DialogKey::Lost => "You lost.",
            DialogKey::Wait => "Waiting for your opponent.",
        }
    }
}

/// An error while loading a dialog document.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("invalid dialog document")]
    Xml(#[from] roxmltree::Error),
}

/// Message templates loaded from a dialog document.
#[derive(Debug, Clone)]
pub struct Dialog {
    messages: HashMap<DialogKey, String>,
}

impl Default for Dialog {
    fn default() -> Self {
        Dialog {
            messages: DialogKey::iter()
                .map(|key| (key, key.default_text().to_string()))
                .collect(),
        }
    }
}

impl Dialog {
    /// Parses a dialog document, like `<dialog greeting="Hello!" won="Nice."/>`.
    pub fn parse(xml: &str) -> Result<Dialog, DialogError> {
        let document = roxmltree::Document::parse(xml)?;

        let messages = DialogKey::iter()
            .map(|key| {
                let text = attr(&document, key.as_ref()).unwrap_or_else(|| {
                    debug!("Dialog has no {:?} message, using default", key.as_ref());
                    key.default_text().to_string()
                });
                (key, text)
            })
            .collect();

        Ok(Dialog { messages })
    }

    /// Gets the raw template for the provided message.
    pub fn get(&self, key: DialogKey) -> &str {
        self.messages
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }

    /// Fills in the `{ship}` and `{coords}` placeholders of the provided message.
    pub fn render(&self, key: DialogKey, ship: Option<ShipKind>, coords: &[Coord]) -> String {
        let ship = ship.map(|kind| kind.to_string()).unwrap_or_default();

        self.get(key)
            .replace("{ship}", &ship)
            .replace("{coords}", &format_coords(coords))
    }
}
