//! Reference catalogs
//!
//! Attribute names, badge names, sponsorship deals and the rookie scale are
//! read-only data. Mutations validate their keys against a [`Catalog`].

pub mod attributes;
pub mod badges;
pub mod contracts;
pub mod endorsements;

use serde::{Deserialize, Serialize};

use crate::models::Endorsement;

pub use contracts::{contract_for_pick, second_round_contract, undrafted_contract};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeCategory {
    /// Key used in the snapshot's attribute map
    pub key: String,
    pub label: String,
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeCategory {
    pub name: String,
    pub badges: Vec<BadgeInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub attributes: Vec<AttributeCategory>,
    pub badges: Vec<BadgeCategory>,
    pub endorsements: Vec<Endorsement>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            attributes: attributes::standard_attributes(),
            badges: badges::standard_badges(),
            endorsements: endorsements::standard_endorsements(),
        }
    }

    pub fn has_attribute(&self, category: &str, attribute: &str) -> bool {
        self.attributes
            .iter()
            .any(|c| c.key == category && c.attributes.iter().any(|a| a == attribute))
    }

    pub fn has_badge(&self, category: &str, badge: &str) -> bool {
        self.badges.iter().any(|c| c.name == category && c.badges.iter().any(|b| b.name == badge))
    }

    pub fn endorsement(&self, id: &str) -> Option<&Endorsement> {
        self.endorsements.iter().find(|e| e.id == id)
    }

    /// (category, attribute) pairs in catalog order
    pub fn attribute_keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .flat_map(|c| c.attributes.iter().map(move |a| (c.key.as_str(), a.as_str())))
    }

    pub fn badge_keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.badges
            .iter()
            .flat_map(|c| c.badges.iter().map(move |b| (c.name.as_str(), b.name.as_str())))
    }
}
