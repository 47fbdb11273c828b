use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EconomyConfig;
use crate::data::{contract_for_pick, Catalog};
use crate::error::{Result, TransitionError};
use crate::models::{AttributeMap, PlayerSnapshot, Position, TeamRecord};
use crate::save::normalize;

/// Everything the player chooses when starting a career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSetup {
    pub name: String,
    pub position: Position,
    /// 0 = undrafted, 1..=30 first round, anything higher second round
    #[serde(default)]
    pub draft_pick: u32,
    /// Starting levels; anything missing starts at the floor
    #[serde(default)]
    pub attributes: AttributeMap,
}

impl CareerSetup {
    pub fn new(name: impl Into<String>, position: Position, draft_pick: u32) -> Self {
        Self { name: name.into(), position, draft_pick, attributes: AttributeMap::new() }
    }

    pub fn with_attribute(mut self, category: &str, attribute: &str, level: u8) -> Self {
        self.attributes
            .entry(category.to_string())
            .or_default()
            .insert(attribute.to_string(), level);
        self
    }
}

/// Fresh career: starting economy, rookie-scale contract, every catalog
/// attribute and badge present.
pub fn new_career(
    setup: &CareerSetup,
    config: &EconomyConfig,
    catalog: &Catalog,
    created_at: DateTime<Utc>,
) -> Result<PlayerSnapshot> {
    let name = setup.name.trim();
    if name.is_empty() {
        return Err(TransitionError::InvalidPlayer("name must not be empty".into()).into());
    }
    for (category, levels) in &setup.attributes {
        if let Some(attribute) = levels.keys().find(|a| !catalog.has_attribute(category, a)) {
            return Err(TransitionError::UnknownAttribute {
                category: category.clone(),
                attribute: attribute.clone(),
            }
            .into());
        }
    }

    let start = &config.starting;
    let mut snapshot = PlayerSnapshot {
        name: name.to_string(),
        position: setup.position.clone(),
        overall_rating: start.overall_rating,
        xp: start.xp,
        fan_base: start.fan_base,
        bank_balance: start.bank_balance,
        completed_games: Vec::new(),
        team_record: TeamRecord::default(),
        win_streak: 0,
        active_endorsements: Vec::new(),
        attributes: setup.attributes.clone(),
        badges: Default::default(),
        contract: Some(contract_for_pick(setup.draft_pick)),
        completed_seasons: 0,
        playoff_stats: None,
        made_playoffs: None,
        created_at,
    };
    normalize(&mut snapshot, &config.upgrades, catalog);

    info!(
        name = %snapshot.name,
        position = %snapshot.position,
        pick = setup.draft_pick,
        "career created"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProgressionError;
    use crate::models::{BadgeTier, DraftStatus};

    fn create(setup: &CareerSetup) -> Result<PlayerSnapshot> {
        new_career(setup, &EconomyConfig::default(), &Catalog::standard(), Utc::now())
    }

    #[test]
    fn test_starting_economy() {
        let player = create(&CareerSetup::new("Ava Cole", Position::PointGuard, 5)).unwrap();
        assert_eq!(player.xp, 1_000);
        assert_eq!(player.fan_base, 12_000);
        assert_eq!(player.bank_balance, 50_000);
        assert_eq!(player.overall_rating, 60);
        assert_eq!(player.attribute_level("Defense", "Steal"), Some(25));
        assert_eq!(player.badge_tier("Outside Scoring", "Deadeye"), Some(BadgeTier::Locked));
        assert!(player.completed_games.is_empty());
    }

    #[test]
    fn test_contract_follows_draft_slot() {
        let first = create(&CareerSetup::new("A", Position::Center, 1)).unwrap();
        let contract = first.contract.unwrap();
        assert_eq!(contract.years, 4);
        assert_eq!(contract.draft_status(), DraftStatus::FirstRound);

        let second = create(&CareerSetup::new("B", Position::Center, 44)).unwrap();
        assert_eq!(second.contract.as_ref().map(|c| c.years), Some(2));
        assert_eq!(second.years_remaining(), 2);

        let undrafted = create(&CareerSetup::new("C", Position::Center, 0)).unwrap();
        assert_eq!(undrafted.contract.map(|c| c.draft_status()), Some(DraftStatus::Undrafted));
    }

    #[test]
    fn test_custom_levels_are_clamped() {
        let setup = CareerSetup::new("D", Position::SmallForward, 10)
            .with_attribute("Shooting", "Three-point shot", 120)
            .with_attribute("Physical", "Speed", 10)
            .with_attribute("Physical", "Vertical", 70);
        let player = create(&setup).unwrap();
        assert_eq!(player.attribute_level("Shooting", "Three-point shot"), Some(99));
        assert_eq!(player.attribute_level("Physical", "Speed"), Some(25));
        assert_eq!(player.attribute_level("Physical", "Vertical"), Some(70));
    }

    #[test]
    fn test_rejects_blank_name_and_unknown_attribute() {
        let err = create(&CareerSetup::new("  ", Position::Center, 0)).unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::InvalidTransition(TransitionError::InvalidPlayer(_))
        ));

        let setup =
            CareerSetup::new("E", Position::Center, 0).with_attribute("Shooting", "Juggling", 50);
        assert!(create(&setup).is_err());
    }
}
