//! Career flow: creation, games, seasons, playoffs and contracts.

pub mod contract;
pub mod creation;
pub mod game;
pub mod playoffs;
pub mod season;

pub use contract::ContractLifecycle;
pub use creation::{new_career, CareerSetup};
pub use game::{play_game, PlayedGame};
pub use playoffs::{
    next_playoff_slot, season_phase, series_status, won_championship, SeasonPhase, SeriesState,
    SeriesStatus,
};
pub use season::{generate_score, SeasonSimulator, SimulationSummary};
