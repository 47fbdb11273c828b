//! Fill and clamp a snapshot against the catalog
//!
//! Runs once per snapshot entering the store: after a load and at career
//! creation. The team record and win streak are derived from the game log,
//! whatever the save says.

use crate::config::UpgradeConfig;
use crate::data::Catalog;
use crate::models::{BadgeTier, PlayerSnapshot};

pub fn normalize(snapshot: &mut PlayerSnapshot, config: &UpgradeConfig, catalog: &Catalog) {
    for (category, attribute) in catalog.attribute_keys() {
        snapshot
            .attributes
            .entry(category.to_string())
            .or_default()
            .entry(attribute.to_string())
            .or_insert(config.min_level);
    }
    for levels in snapshot.attributes.values_mut() {
        for level in levels.values_mut() {
            *level = (*level).clamp(config.min_level, config.max_level);
        }
    }

    for (category, badge) in catalog.badge_keys() {
        snapshot
            .badges
            .entry(category.to_string())
            .or_default()
            .entry(badge.to_string())
            .or_insert(BadgeTier::Locked);
    }

    let mut seen = std::collections::BTreeSet::new();
    snapshot.active_endorsements.retain(|a| seen.insert(a.endorsement_id.clone()));

    snapshot.rebuild_record();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActiveEndorsement, GameOutcome, TeamRecord};
    use crate::test_support::{playoff_game, regular_game, rookie};

    #[test]
    fn test_fills_missing_keys() {
        let config = UpgradeConfig::default();
        let catalog = Catalog::standard();
        let mut player = rookie();
        player.attributes.clear();
        player.badges.clear();

        normalize(&mut player, &config, &catalog);
        assert_eq!(player.attribute_level("Physical", "Agility"), Some(25));
        assert_eq!(player.badge_tier("Defense", "Clamps"), Some(BadgeTier::Locked));
        let total: usize = player.attributes.values().map(|m| m.len()).sum();
        assert_eq!(total, 34);
    }

    #[test]
    fn test_clamps_levels_and_keeps_tiers() {
        let config = UpgradeConfig::default();
        let catalog = Catalog::standard();
        let mut player = rookie();
        player.attributes.get_mut("Shooting").unwrap().insert("Free throw".into(), 3);
        player.attributes.get_mut("Physical").unwrap().insert("Speed".into(), 140);
        player.badges.get_mut("Defense").unwrap().insert("Clamps".into(), BadgeTier::Gold);

        normalize(&mut player, &config, &catalog);
        assert_eq!(player.attribute_level("Shooting", "Free throw"), Some(25));
        assert_eq!(player.attribute_level("Physical", "Speed"), Some(99));
        assert_eq!(player.badge_tier("Defense", "Clamps"), Some(BadgeTier::Gold));
    }

    #[test]
    fn test_drops_duplicate_endorsements() {
        let config = UpgradeConfig::default();
        let catalog = Catalog::standard();
        let mut player = rookie();
        let deal = ActiveEndorsement {
            endorsement_id: "local-gym".into(),
            games_remaining: 4,
            total_claims: 1,
        };
        player.active_endorsements = vec![deal.clone(), deal.clone()];

        normalize(&mut player, &config, &catalog);
        assert_eq!(player.active_endorsements, vec![deal]);
    }

    #[test]
    fn test_record_and_streak_follow_the_game_log() {
        let config = UpgradeConfig::default();
        let catalog = Catalog::standard();
        let mut player = rookie();
        player.completed_games = vec![
            regular_game(1, GameOutcome::Loss),
            regular_game(2, GameOutcome::Win),
            regular_game(3, GameOutcome::Win),
            playoff_game(1, 1, GameOutcome::Win),
        ];
        player.team_record = TeamRecord { wins: u32::MAX, losses: 0 };
        player.win_streak = u32::MAX;

        normalize(&mut player, &config, &catalog);
        assert_eq!(player.team_record, TeamRecord { wins: 2, losses: 1 });
        assert_eq!(player.win_streak, 3);
        assert_eq!(player.completed_games.len(), 4);
    }
}
