//! Sponsorship deal lifecycle
//!
//! ```text
//! Inactive --activate--> Active(n) --advance--> ... --> Active(0) --claim--> Active(n)
//! ```
//!
//! `n` is the deal's claim interval. A deal stays active once signed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::Catalog;
use crate::error::{ProgressionError, Resource, Result, TransitionError};
use crate::models::{ActiveEndorsement, Endorsement, EndorsementRewards, PlayerSnapshot};

/// Lifetime payout of one deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndorsementEarnings {
    pub endorsement_id: String,
    pub name: String,
    pub total_claims: u32,
    pub xp: u64,
    pub fans: u64,
    pub money: u64,
}

/// Count down every active deal by one game, stopping at zero.
pub fn advance_all(active: &mut [ActiveEndorsement]) {
    for deal in active.iter_mut() {
        deal.games_remaining = deal.games_remaining.saturating_sub(1);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EndorsementLifecycle<'a> {
    catalog: &'a Catalog,
}

impl<'a> EndorsementLifecycle<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    fn lookup(&self, id: &str) -> Result<&'a Endorsement> {
        self.catalog
            .endorsement(id)
            .ok_or_else(|| TransitionError::UnknownEndorsement(id.to_string()).into())
    }

    pub fn activate(&self, snapshot: &PlayerSnapshot, id: &str) -> Result<PlayerSnapshot> {
        let endorsement = self.lookup(id)?;
        if snapshot.active_endorsement(id).is_some() {
            return Err(TransitionError::EndorsementAlreadyActive(id.to_string()).into());
        }
        let min_fans = endorsement.requirements.min_fans;
        if snapshot.fan_base < min_fans {
            return Err(ProgressionError::insufficient(Resource::Fans, min_fans, snapshot.fan_base));
        }

        let mut next = snapshot.clone();
        next.active_endorsements.push(ActiveEndorsement::new(endorsement));
        info!(
            endorsement = id,
            interval = endorsement.requirements.claim_interval,
            "endorsement activated"
        );
        Ok(next)
    }

    /// One completed game for every active deal.
    pub fn advance(&self, snapshot: &PlayerSnapshot) -> PlayerSnapshot {
        let mut next = snapshot.clone();
        advance_all(&mut next.active_endorsements);
        next
    }

    pub fn claim(
        &self,
        snapshot: &PlayerSnapshot,
        id: &str,
    ) -> Result<(PlayerSnapshot, EndorsementRewards)> {
        let endorsement = self.lookup(id)?;
        let Some(active) = snapshot.active_endorsement(id) else {
            return Err(TransitionError::EndorsementNotActive(id.to_string()).into());
        };
        if !active.is_claimable() {
            return Err(TransitionError::EndorsementNotClaimable {
                id: id.to_string(),
                games_remaining: active.games_remaining,
            }
            .into());
        }

        let rewards = endorsement.rewards;
        let mut next = snapshot.clone();
        next.credit(rewards.xp, rewards.fans, rewards.money);
        if let Some(deal) = next.active_endorsements.iter_mut().find(|a| a.endorsement_id == id) {
            deal.games_remaining = endorsement.requirements.claim_interval;
            deal.total_claims += 1;
        }
        debug!(
            endorsement = id,
            xp = rewards.xp,
            fans = rewards.fans,
            money = rewards.money,
            "endorsement claimed"
        );
        Ok((next, rewards))
    }

    /// Active deals whose countdown has reached zero.
    pub fn claimable(&self, snapshot: &PlayerSnapshot) -> Vec<&'a Endorsement> {
        snapshot
            .active_endorsements
            .iter()
            .filter(|a| a.is_claimable())
            .filter_map(|a| self.catalog.endorsement(&a.endorsement_id))
            .collect()
    }

    /// Deals not yet signed whose fan requirement is met.
    pub fn eligible(&self, snapshot: &PlayerSnapshot) -> Vec<&'a Endorsement> {
        self.catalog
            .endorsements
            .iter()
            .filter(|e| snapshot.active_endorsement(&e.id).is_none())
            .filter(|e| snapshot.fan_base >= e.requirements.min_fans)
            .collect()
    }

    pub fn earnings(&self, snapshot: &PlayerSnapshot) -> Vec<EndorsementEarnings> {
        snapshot
            .active_endorsements
            .iter()
            .filter_map(|active| {
                let e = self.catalog.endorsement(&active.endorsement_id)?;
                let claims = active.total_claims as u64;
                Some(EndorsementEarnings {
                    endorsement_id: e.id.clone(),
                    name: e.name.clone(),
                    total_claims: active.total_claims,
                    xp: e.rewards.xp.saturating_mul(claims),
                    fans: e.rewards.fans.saturating_mul(claims),
                    money: e.rewards.money.saturating_mul(claims),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rookie;

    #[test]
    fn test_activation_requires_fans() {
        let catalog = Catalog::standard();
        let lifecycle = EndorsementLifecycle::new(&catalog);
        let mut player = rookie();
        player.fan_base = 10_000;

        let err = lifecycle.activate(&player, "local-gym").unwrap_err();
        assert_eq!(err, ProgressionError::insufficient(Resource::Fans, 15_000, 10_000));
        assert!(player.active_endorsements.is_empty());
    }

    #[test]
    fn test_activation_starts_countdown() {
        let catalog = Catalog::standard();
        let lifecycle = EndorsementLifecycle::new(&catalog);
        let mut player = rookie();
        player.fan_base = 15_000;

        let next = lifecycle.activate(&player, "local-gym").unwrap();
        let deal = next.active_endorsement("local-gym").unwrap();
        assert_eq!(deal.games_remaining, 10);
        assert_eq!(deal.total_claims, 0);

        let err = lifecycle.activate(&next, "local-gym").unwrap_err();
        assert_eq!(
            err,
            ProgressionError::InvalidTransition(TransitionError::EndorsementAlreadyActive(
                "local-gym".into()
            ))
        );
    }

    #[test]
    fn test_claimable_exactly_after_interval() {
        let catalog = Catalog::standard();
        let lifecycle = EndorsementLifecycle::new(&catalog);
        let mut player = rookie();
        player.fan_base = 20_000;
        player = lifecycle.activate(&player, "local-gym").unwrap();

        for game in 1..=10 {
            assert!(lifecycle.claim(&player, "local-gym").is_err());
            player = lifecycle.advance(&player);
            let remaining = player.active_endorsement("local-gym").unwrap().games_remaining;
            assert_eq!(remaining, 10 - game);
        }
        assert_eq!(lifecycle.claimable(&player).len(), 1);

        let (claimed, rewards) = lifecycle.claim(&player, "local-gym").unwrap();
        assert_eq!(rewards.money, 250_000);
        assert_eq!(claimed.xp, player.xp + 500);
        assert_eq!(claimed.fan_base, player.fan_base + 500);
        assert_eq!(claimed.bank_balance, player.bank_balance + 250_000);
        let deal = claimed.active_endorsement("local-gym").unwrap();
        assert_eq!(deal.games_remaining, 10);
        assert_eq!(deal.total_claims, 1);
    }

    #[test]
    fn test_advance_floors_at_zero() {
        let mut deals = vec![ActiveEndorsement {
            endorsement_id: "local-gym".into(),
            games_remaining: 0,
            total_claims: 2,
        }];
        advance_all(&mut deals);
        assert_eq!(deals[0].games_remaining, 0);
    }

    #[test]
    fn test_claim_rejects_inactive_and_unknown() {
        let catalog = Catalog::standard();
        let lifecycle = EndorsementLifecycle::new(&catalog);
        let player = rookie();
        assert_eq!(
            lifecycle.claim(&player, "local-gym").unwrap_err(),
            ProgressionError::InvalidTransition(TransitionError::EndorsementNotActive(
                "local-gym".into()
            ))
        );
        assert_eq!(
            lifecycle.claim(&player, "moon-base").unwrap_err(),
            ProgressionError::InvalidTransition(TransitionError::UnknownEndorsement(
                "moon-base".into()
            ))
        );
    }

    #[test]
    fn test_eligible_and_earnings() {
        let catalog = Catalog::standard();
        let lifecycle = EndorsementLifecycle::new(&catalog);
        let mut player = rookie();
        player.fan_base = 25_000;

        let eligible: Vec<_> = lifecycle.eligible(&player).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(eligible, vec!["local-gym", "energy-drink-startup", "local-car-dealership"]);

        player = lifecycle.activate(&player, "energy-drink-startup").unwrap();
        player.active_endorsements[0].total_claims = 3;
        assert_eq!(lifecycle.eligible(&player).len(), 2);

        let earnings = lifecycle.earnings(&player);
        assert_eq!(earnings.len(), 1);
        assert_eq!(earnings[0].money, 1_500_000);
        assert_eq!(earnings[0].xp, 1_800);
    }
}
