//! Game settings.

use crate::error::{Error, Result};
use crate::palette::ColorTable;
use crate::{DEFAULT_KEY_LENGTH, DEFAULT_MAX_ATTEMPTS};

/// Settings for a game: key length, attempt budget and the color catalog.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub key_length: usize,
    pub max_attempts: u32,
    pub colors: ColorTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            colors: ColorTable::default(),
        }
    }
}

impl GameConfig {
    /// Check the settings describe a playable game.
    pub fn validate(&self) -> Result<()> {
        let palette_size = self.colors.palette().len();
        if self.key_length == 0 || self.key_length > palette_size {
            return Err(Error::InvalidLength {
                length: self.key_length,
                palette_size,
            });
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidAttempts);
        }
        Ok(())
    }
}
