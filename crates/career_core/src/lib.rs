//! # career_core - Career Progression Engine
//!
//! Economy rules for a single simulated basketball career: XP and fan gains
//! from box scores, attribute and badge upgrades, sponsorship deals, playing
//! contracts, seasons and playoffs.
//!
//! ## Features
//! - Immutable snapshots, replaced wholesale by each mutation
//! - Seedable randomness for every simulated game
//! - Validating JSON save/load with stable output
//! - Tunable economy via [`EconomyConfig`]

pub mod career;
pub mod config;
pub mod data;
pub mod endorsement;
pub mod error;
pub mod models;
pub mod rewards;
pub mod save;
pub mod state;
pub mod upgrade;

#[cfg(test)]
pub(crate) mod test_support;

pub use career::{CareerSetup, ContractLifecycle, SeasonPhase, SeasonSimulator, SeriesStatus};
pub use config::{ConfigError, EconomyConfig};
pub use data::Catalog;
pub use endorsement::EndorsementLifecycle;
pub use error::{ProgressionError, Resource, Result, TransitionError};
pub use models::{BadgeTier, BoxScore, Contract, GameOutcome, GameResult, PlayerSnapshot, Position};
pub use rewards::{GameRewards, RewardCalculator};
pub use save::SnapshotError;
pub use state::ProgressionStore;
pub use upgrade::{AttributeUpgradeEngine, BadgeUpgradeEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
