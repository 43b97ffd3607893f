//! # Codebreaker
//!
//! A color code-breaking game in the style of Mastermind.
//!
//! A secret key of distinct colors is drawn from a palette and the player
//! guesses it. Each guess is answered with the number of colors in the right
//! position and the number of further colors that appear elsewhere in the key.
//! An entropy-based solver can suggest guesses or play a round unattended.

pub mod config;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod key;
pub mod palette;
pub mod round;
pub mod solver;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use feedback::{grade, score, Feedback, Peg};
pub use generator::generate;
pub use key::Key;
pub use palette::{ColorSpec, ColorTable, Palette, Symbol};
pub use round::{Outcome, Round};
pub use solver::CodeSolver;

/// Default number of colors in a secret key
pub const DEFAULT_KEY_LENGTH: usize = 3;

/// Default number of guesses allowed per round
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Built-in color catalog, one `-<initial>|<name>:<hex>;` entry per color
pub const DEFAULT_COLORS: &str = "
-n|naranjo:#F6421B;
-c|celeste:#26B2EB;
-v|verde:#24D417;
-a|amarillo:#F6C202;
-p|purpura:#8217D4;
-z|azul:#00f;
-r|rosado:#f0f;
";
