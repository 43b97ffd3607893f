//! Secret key generation.
//!
//! Keys are drawn without replacement: a working pool starts as the whole
//! palette and each pick removes the chosen symbol, so no color repeats and
//! every ordered arrangement of distinct colors is equally likely.

use crate::error::{Error, Result};
use crate::key::Key;
use crate::palette::Palette;
use rand::Rng;

/// Draw a secret key of `length` distinct symbols from `palette`.
///
/// Fails with [`Error::InvalidLength`] unless `1 <= length <= palette.len()`.
pub fn generate<R: Rng + ?Sized>(palette: &Palette, length: usize, rng: &mut R) -> Result<Key> {
    if length == 0 || length > palette.len() {
        return Err(Error::InvalidLength {
            length,
            palette_size: palette.len(),
        });
    }

    let mut pool = palette.symbols().to_vec();
    let mut key = Vec::with_capacity(length);
    for _ in 0..length {
        let picked = pool[rng.gen_range(0..pool.len())];
        key.push(picked);
        pool.retain(|&s| s != picked);
    }

    let key = Key::new(key);
    tracing::trace!(%key, "generated secret key");
    Ok(key)
}
