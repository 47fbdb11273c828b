use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::UpgradeConfig;
use crate::data::Catalog;
use crate::error::{ProgressionError, Resource, Result, TransitionError};
use crate::models::{BadgeTier, PlayerSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeUpgrade {
    pub category: String,
    pub badge: String,
    pub from: BadgeTier,
    pub to: BadgeTier,
    pub xp_spent: u64,
}

/// One-step tier advancement for badges. Tiers only move up.
#[derive(Debug, Clone, Copy)]
pub struct BadgeUpgradeEngine<'a> {
    config: &'a UpgradeConfig,
    catalog: &'a Catalog,
}

impl<'a> BadgeUpgradeEngine<'a> {
    pub fn new(config: &'a UpgradeConfig, catalog: &'a Catalog) -> Self {
        Self { config, catalog }
    }

    pub fn next_tier(current: BadgeTier) -> Option<BadgeTier> {
        current.next()
    }

    /// XP to move up from `current`, `None` at Legend.
    pub fn cost(&self, current: BadgeTier) -> Option<u64> {
        current.next().map(|tier| self.config.badge_cost(tier))
    }

    pub fn upgrade(
        &self,
        snapshot: &PlayerSnapshot,
        category: &str,
        badge: &str,
    ) -> Result<(PlayerSnapshot, BadgeUpgrade)> {
        if !self.catalog.has_badge(category, badge) {
            return Err(TransitionError::UnknownBadge {
                category: category.to_string(),
                badge: badge.to_string(),
            }
            .into());
        }

        let from = snapshot.badge_tier(category, badge).unwrap_or_default();
        let Some(to) = from.next() else {
            return Err(TransitionError::BadgeMaxed { badge: badge.to_string() }.into());
        };
        let cost = self.config.badge_cost(to);
        if snapshot.xp < cost {
            return Err(ProgressionError::insufficient(Resource::Xp, cost, snapshot.xp));
        }

        let mut next = snapshot.clone();
        next.spend_xp(cost);
        next.badges.entry(category.to_string()).or_default().insert(badge.to_string(), to);

        debug!(category, badge, %from, %to, cost, "badge upgraded");
        Ok((
            next,
            BadgeUpgrade {
                category: category.to_string(),
                badge: badge.to_string(),
                from,
                to,
                xp_spent: cost,
            },
        ))
    }
}
