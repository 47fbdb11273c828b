//! XP sinks: attribute levels and badge tiers

pub mod attribute;
pub mod badge;

pub use attribute::{AttributeUpgrade, AttributeUpgradeEngine};
pub use badge::{BadgeUpgrade, BadgeUpgradeEngine};
