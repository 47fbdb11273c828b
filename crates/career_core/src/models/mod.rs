pub mod badge;
pub mod contract;
pub mod endorsement;
pub mod game;
pub mod player;

pub use badge::BadgeTier;
pub use contract::{Contract, DraftStatus};
pub use endorsement::{
    ActiveEndorsement, Endorsement, EndorsementRequirements, EndorsementRewards, EndorsementTier,
};
pub use game::{BoxScore, GameOutcome, GameResult};
pub use player::{
    AttributeMap, BadgeMap, PlayerSnapshot, PlayoffStats, Position, TeamRecord,
    DEFAULT_OVERALL_RATING,
};
