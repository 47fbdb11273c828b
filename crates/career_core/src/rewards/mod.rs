//! Game rewards
//!
//! Pure conversion of a box score into XP and fan gains. Callers apply the
//! result to a snapshot.

pub mod calculator;

pub use calculator::{GameRewards, RewardCalculator};
