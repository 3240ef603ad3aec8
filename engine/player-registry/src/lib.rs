//! Player Registry - resolves AFL Fantasy players to price snapshots
//!
//! Loads the round's player data (price, breakeven, recent scores) from JSON
//! and hands calculators validated `PlayerSnapshot`s.

pub mod registry;
pub mod types;

pub use registry::PlayerRegistry;
pub use types::{PlayerData, PlayerLookupError, PlayerRecord};
