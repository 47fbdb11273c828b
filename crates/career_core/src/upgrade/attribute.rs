//! Attribute upgrades
//!
//! Each level is priced at the level it starts from, so a bulk upgrade of
//! `n` levels costs the sum of `n` single-level prices.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::UpgradeConfig;
use crate::data::Catalog;
use crate::error::{ProgressionError, Resource, Result, TransitionError};
use crate::models::PlayerSnapshot;

/// What an accepted attribute upgrade did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeUpgrade {
    pub category: String,
    pub attribute: String,
    pub from: u8,
    pub to: u8,
    pub xp_spent: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct AttributeUpgradeEngine<'a> {
    config: &'a UpgradeConfig,
    catalog: &'a Catalog,
}

impl<'a> AttributeUpgradeEngine<'a> {
    pub fn new(config: &'a UpgradeConfig, catalog: &'a Catalog) -> Self {
        Self { config, catalog }
    }

    /// XP to go from `level` to `level + 1`.
    pub fn cost(&self, level: u8) -> u64 {
        let exponent = level as f64 / self.config.cost_step;
        (self.config.cost_base * self.config.cost_growth.powf(exponent)).round() as u64
    }

    /// XP to raise `level` by `quantity`, pricing every step at its own level.
    pub fn bulk_cost(&self, level: u8, quantity: u8) -> u64 {
        (0..quantity as u16)
            .map(|i| self.cost((level as u16 + i).min(u8::MAX as u16) as u8))
            .fold(0u64, u64::saturating_add)
    }

    /// Levels that can still be bought before the cap.
    pub fn headroom(&self, level: u8) -> u8 {
        self.config.max_level.saturating_sub(level)
    }

    /// Current level, treating catalog attributes missing from the snapshot
    /// as sitting at the floor.
    pub fn current_level(
        &self,
        snapshot: &PlayerSnapshot,
        category: &str,
        attribute: &str,
    ) -> Result<u8> {
        if !self.catalog.has_attribute(category, attribute) {
            return Err(TransitionError::UnknownAttribute {
                category: category.to_string(),
                attribute: attribute.to_string(),
            }
            .into());
        }
        Ok(snapshot
            .attribute_level(category, attribute)
            .unwrap_or(self.config.min_level)
            .max(self.config.min_level))
    }

    /// Apply the upgrade to a copy of `snapshot`.
    pub fn upgrade(
        &self,
        snapshot: &PlayerSnapshot,
        category: &str,
        attribute: &str,
        quantity: u8,
    ) -> Result<(PlayerSnapshot, AttributeUpgrade)> {
        let level = self.current_level(snapshot, category, attribute)?;
        if quantity == 0 {
            return Err(TransitionError::ZeroQuantity.into());
        }
        if quantity > self.headroom(level) {
            return Err(TransitionError::LevelCap {
                attribute: attribute.to_string(),
                level,
                quantity,
                max: self.config.max_level,
            }
            .into());
        }

        let cost = self.bulk_cost(level, quantity);
        if snapshot.xp < cost {
            return Err(ProgressionError::insufficient(Resource::Xp, cost, snapshot.xp));
        }

        let to = level + quantity;
        let mut next = snapshot.clone();
        next.spend_xp(cost);
        next.attributes
            .entry(category.to_string())
            .or_default()
            .insert(attribute.to_string(), to);

        debug!(category, attribute, from = level, to, cost, "attribute upgraded");
        Ok((
            next,
            AttributeUpgrade {
                category: category.to_string(),
                attribute: attribute.to_string(),
                from: level,
                to,
                xp_spent: cost,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rookie;

    fn with_engine<F: FnOnce(AttributeUpgradeEngine<'_>)>(f: F) {
        let config = UpgradeConfig::default();
        let catalog = Catalog::standard();
        f(AttributeUpgradeEngine::new(&config, &catalog));
    }

    #[test]
    fn test_cost_curve_anchors() {
        with_engine(|engine| {
            assert_eq!(engine.cost(25), 276);
            assert_eq!(engine.cost(40), 506);
            assert_eq!(engine.cost(50), 759);
        });
    }

    #[test]
    fn test_single_upgrade_debits_cost() {
        with_engine(|engine| {
            let player = rookie();
            let (next, receipt) = engine.upgrade(&player, "Shooting", "Free throw", 1).unwrap();
            assert_eq!(receipt.xp_spent, 276);
            assert_eq!(next.xp, 724);
            assert_eq!(next.attribute_level("Shooting", "Free throw"), Some(26));
            // the input snapshot is untouched
            assert_eq!(player.xp, 1_000);
            assert_eq!(player.attribute_level("Shooting", "Free throw"), Some(25));
        });
    }

    #[test]
    fn test_bulk_cost_is_per_level() {
        with_engine(|engine| {
            let expected = engine.cost(25) + engine.cost(26) + engine.cost(27);
            assert_eq!(engine.bulk_cost(25, 3), expected);
            assert_ne!(engine.bulk_cost(25, 3), engine.cost(25) * 3);

            let mut player = rookie();
            player.xp = 10_000;
            let (next, receipt) = engine.upgrade(&player, "Physical", "Speed", 3).unwrap();
            assert_eq!(receipt.xp_spent, expected);
            assert_eq!(next.xp, 10_000 - expected);
            assert_eq!(receipt.to, 28);
        });
    }

    #[test]
    fn test_rejects_unknown_key() {
        with_engine(|engine| {
            let err = engine.upgrade(&rookie(), "Shooting", "Juggling", 1).unwrap_err();
            assert!(matches!(
                err,
                ProgressionError::InvalidTransition(TransitionError::UnknownAttribute { .. })
            ));
        });
    }

    #[test]
    fn test_rejects_zero_quantity() {
        with_engine(|engine| {
            let err = engine.upgrade(&rookie(), "Shooting", "Free throw", 0).unwrap_err();
            assert_eq!(err, ProgressionError::InvalidTransition(TransitionError::ZeroQuantity));
        });
    }

    #[test]
    fn test_rejects_past_cap() {
        with_engine(|engine| {
            let mut player = rookie();
            player.xp = u64::MAX / 2;
            player.attributes.get_mut("Shooting").unwrap().insert("Free throw".into(), 98);
            assert!(engine.upgrade(&player, "Shooting", "Free throw", 1).is_ok());
            let err = engine.upgrade(&player, "Shooting", "Free throw", 2).unwrap_err();
            assert!(matches!(
                err,
                ProgressionError::InvalidTransition(TransitionError::LevelCap { level: 98, .. })
            ));
        });
    }

    #[test]
    fn test_rejects_when_xp_short() {
        with_engine(|engine| {
            let mut player = rookie();
            player.xp = 275;
            let err = engine.upgrade(&player, "Shooting", "Free throw", 1).unwrap_err();
            assert_eq!(err, ProgressionError::insufficient(Resource::Xp, 276, 275));
        });
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_cost_matches_curve(level in 25u8..=98) {
                let config = UpgradeConfig::default();
                let catalog = Catalog::standard();
                let engine = AttributeUpgradeEngine::new(&config, &catalog);
                let expected = (100.0 * 1.5f64.powf(level as f64 / 10.0)).round() as u64;
                prop_assert_eq!(engine.cost(level), expected);
            }

            #[test]
            fn prop_upgrade_stays_in_range(
                start in 25u8..=99,
                quantity in 0u8..=80,
                xp in 0u64..2_000_000,
            ) {
                let config = UpgradeConfig::default();
                let catalog = Catalog::standard();
                let engine = AttributeUpgradeEngine::new(&config, &catalog);
                let mut player = rookie();
                player.xp = xp;
                player.attributes.get_mut("Defense").unwrap().insert("Block".into(), start);

                match engine.upgrade(&player, "Defense", "Block", quantity) {
                    Ok((next, receipt)) => {
                        let level = next.attribute_level("Defense", "Block").unwrap();
                        prop_assert!((25..=99).contains(&level));
                        prop_assert_eq!(next.xp, xp - receipt.xp_spent);
                    }
                    Err(_) => {
                        prop_assert_eq!(player.attribute_level("Defense", "Block"), Some(start))
                    }
                }
            }
        }
    }
}
