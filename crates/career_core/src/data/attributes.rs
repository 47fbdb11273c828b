//! Standard attribute categories

use super::AttributeCategory;

const SHOOTING: &[&str] = &[
    "Close shot",
    "Mid-range shot",
    "Three-point shot",
    "Free throw",
    "Shot IQ",
    "Post fade",
    "Offensive consistency",
];

const PLAYMAKING: &[&str] =
    &["Ball handle", "Pass IQ", "Pass accuracy", "Pass vision", "Hands", "Pass perception"];

const FINISHING: &[&str] = &[
    "Driving layup",
    "Standing dunk",
    "Driving dunk",
    "Post hook",
    "Post control",
    "Draw foul",
];

const DEFENSE: &[&str] = &[
    "Interior defense",
    "Perimeter defense",
    "Help defense IQ",
    "Block",
    "Steal",
    "Offensive rebound",
    "Defensive rebound",
    "Defensive consistency",
];

const PHYSICAL: &[&str] =
    &["Speed", "Speed with ball", "Vertical", "Strength", "Stamina", "Hustle", "Agility"];

pub fn standard_attributes() -> Vec<AttributeCategory> {
    [
        ("Shooting", "Shooting Attributes", SHOOTING),
        ("Playmaking", "Playmaking Attributes", PLAYMAKING),
        ("Finishing", "Finishing Attributes", FINISHING),
        ("Defense", "Defense Attributes", DEFENSE),
        ("Physical", "Physical Attributes", PHYSICAL),
    ]
    .into_iter()
    .map(|(key, label, names)| AttributeCategory {
        key: key.to_string(),
        label: label.to_string(),
        attributes: names.iter().map(|n| n.to_string()).collect(),
    })
    .collect()
}
