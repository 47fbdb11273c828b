//! Standard sponsorship catalog

use crate::models::{Endorsement, EndorsementRequirements, EndorsementRewards, EndorsementTier};

struct Row {
    id: &'static str,
    tier: EndorsementTier,
    name: &'static str,
    description: &'static str,
    xp: u64,
    fans: u64,
    money: u64,
    claim_interval: u32,
    min_fans: u64,
}

const ROWS: &[Row] = &[
    Row {
        id: "local-gym",
        tier: EndorsementTier::Tier1,
        name: "Local Gym",
        description: "Promote a local gym on social media.",
        xp: 500,
        fans: 500,
        money: 250_000,
        claim_interval: 10,
        min_fans: 15_000,
    },
    Row {
        id: "energy-drink-startup",
        tier: EndorsementTier::Tier1,
        name: "Energy Drink Startup",
        description: "Endorse a small, up-and-coming energy drink company.",
        xp: 600,
        fans: 750,
        money: 500_000,
        claim_interval: 15,
        min_fans: 20_000,
    },
    Row {
        id: "regional-fast-food",
        tier: EndorsementTier::Tier2,
        name: "Regional Fast Food Chain",
        description: "Partner with a regional fast food chain, promoting new products.",
        xp: 1_000,
        fans: 2_000,
        money: 1_500_000,
        claim_interval: 25,
        min_fans: 30_000,
    },
    Row {
        id: "local-car-dealership",
        tier: EndorsementTier::Tier2,
        name: "Local Car Dealership",
        description: "Collaborate with a car dealership to attract customers.",
        xp: 750,
        fans: 1_500,
        money: 1_000_000,
        claim_interval: 20,
        min_fans: 25_000,
    },
    Row {
        id: "national-energy-drink",
        tier: EndorsementTier::Tier3,
        name: "National Energy Drink",
        description: "Represent a major energy drink brand with nationwide reach.",
        xp: 1_500,
        fans: 5_000,
        money: 5_000_000,
        claim_interval: 30,
        min_fans: 50_000,
    },
    Row {
        id: "clothing-line",
        tier: EndorsementTier::Tier3,
        name: "Clothing Line",
        description: "Endorse a trendy clothing brand.",
        xp: 1_200,
        fans: 4_000,
        money: 3_000_000,
        claim_interval: 25,
        min_fans: 45_000,
    },
    Row {
        id: "footwear-premium",
        tier: EndorsementTier::Tier4,
        name: "Footwear Company (Premium Line)",
        description: "Collaborate with a top footwear brand on select campaigns.",
        xp: 2_000,
        fans: 8_000,
        money: 10_000_000,
        claim_interval: 50,
        min_fans: 100_000,
    },
    Row {
        id: "high-end-fashion",
        tier: EndorsementTier::Tier4,
        name: "High-End Fashion Brand",
        description: "Become a face for a luxury fashion line.",
        xp: 2_500,
        fans: 10_000,
        money: 15_000_000,
        claim_interval: 60,
        min_fans: 120_000,
    },
    Row {
        id: "signature-shoe",
        tier: EndorsementTier::Tier5,
        name: "Signature Shoe Deal",
        description: "Develop a signature shoe with a renowned brand.",
        xp: 5_000,
        fans: 20_000,
        money: 25_000_000,
        claim_interval: 75,
        min_fans: 200_000,
    },
    Row {
        id: "hollywood-film",
        tier: EndorsementTier::Tier5,
        name: "Hollywood Film Deal",
        description: "Star in a high-profile film production.",
        xp: 5_000,
        fans: 25_000,
        money: 50_000_000,
        claim_interval: 100,
        min_fans: 250_000,
    },
];

pub fn standard_endorsements() -> Vec<Endorsement> {
    ROWS.iter()
        .map(|row| Endorsement {
            id: row.id.to_string(),
            tier: row.tier,
            name: row.name.to_string(),
            description: row.description.to_string(),
            rewards: EndorsementRewards { xp: row.xp, fans: row.fans, money: row.money },
            requirements: EndorsementRequirements {
                claim_interval: row.claim_interval,
                min_fans: row.min_fans,
            },
        })
        .collect()
}
