use serde::{Deserialize, Serialize};

/// Sponsor tier, 1 (local) through 5 (global)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EndorsementTier {
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
    #[serde(rename = "Tier 4")]
    Tier4,
    #[serde(rename = "Tier 5")]
    Tier5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsementRewards {
    pub xp: u64,
    pub fans: u64,
    pub money: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndorsementRequirements {
    /// Games between claims
    pub claim_interval: u32,
    pub min_fans: u64,
}

/// Catalog entry for a sponsorship deal (read-only reference data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endorsement {
    pub id: String,
    pub tier: EndorsementTier,
    pub name: String,
    pub description: String,
    pub rewards: EndorsementRewards,
    pub requirements: EndorsementRequirements,
}

/// A deal the player has signed, counting down to its next payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEndorsement {
    pub endorsement_id: String,
    pub games_remaining: u32,
    #[serde(default)]
    pub total_claims: u32,
}

impl ActiveEndorsement {
    pub fn new(endorsement: &Endorsement) -> Self {
        Self {
            endorsement_id: endorsement.id.clone(),
            games_remaining: endorsement.requirements.claim_interval,
            total_claims: 0,
        }
    }

    pub fn is_claimable(&self) -> bool {
        self.games_remaining == 0
    }
}
