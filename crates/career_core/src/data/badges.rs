//! Standard badge categories

use super::{BadgeCategory, BadgeInfo};

const CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Outside Scoring",
        &[
            ("Deadeye", "Increases accuracy on contested shots"),
            ("Limitless Range", "Extends the range for making 3-pointers"),
            ("Mini Marksman", "Improves mid-range shooting"),
            ("Set Shot Specialist", "Boosts shot accuracy for set shots"),
            ("Shifty Shooter", "Increases accuracy for shots taken off the dribble"),
        ],
    ),
    (
        "Inside Scoring",
        &[
            ("Acrobat", "Enhances layup accuracy, especially for tricky shots"),
            ("Putback King", "Boosts putback shots after offensive rebounds"),
            ("Relentless Finisher", "Reduces fatigue when performing contact finishes"),
            ("Post Spin Master", "Increases effectiveness of post spin moves"),
            ("Contact Specialist", "Improves finishing through contact"),
        ],
    ),
    (
        "Playmaking",
        &[
            ("Quick First Step", "Increases acceleration with the ball"),
            ("Dimer", "Boosts teammate's shot accuracy following a pass"),
            ("Ankle Breaker", "Increases chances of breaking a defender's ankles"),
            ("Needle Threader", "Improves accuracy for difficult passes"),
            ("Handles for Days", "Reduces stamina loss for dribbling moves"),
        ],
    ),
    (
        "Defense",
        &[
            ("Clamps", "Enhances on-ball defense against dribbling opponents"),
            ("Pick Dodger", "Increases effectiveness at navigating around screens"),
            ("Interceptor", "Improves chances of intercepting passes"),
            ("Rim Protector", "Boosts shot-blocking ability"),
            ("Intimidator", "Reduces opponent shooting accuracy when closely guarded"),
        ],
    ),
    (
        "Rebounding",
        &[
            ("Rebound Chaser", "Improves ability to track down rebounds"),
            ("Box Out Master", "Increases effectiveness of boxing out opponents"),
            ("Break Starter", "Improves accuracy for outlet passes after rebounds"),
            ("Glass Cleaner", "Boosts success rate of rebound attempts"),
            ("Second Chance Specialist", "Increases shot accuracy after offensive rebounds"),
        ],
    ),
    (
        "General/All Around",
        &[
            ("Floor General", "Provides a slight boost to teammates' offensive skills"),
            ("Leader of the Pack", "Adds a small boost to team morale when on the floor"),
            ("Stamina Saver", "Reduces stamina consumption throughout the game"),
            ("Clutch Performer", "Increases accuracy and effectiveness in late-game situations"),
            ("Hot Streak", "Slightly increases shot accuracy after making consecutive shots"),
        ],
    ),
];

pub fn standard_badges() -> Vec<BadgeCategory> {
    CATEGORIES
        .iter()
        .map(|(name, badges)| BadgeCategory {
            name: name.to_string(),
            badges: badges
                .iter()
                .map(|(badge, description)| BadgeInfo {
                    name: badge.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        })
        .collect()
}
