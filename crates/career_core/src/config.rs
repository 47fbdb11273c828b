//! Economy tuning
//!
//! Every constant the reward, upgrade and season rules use lives here so a
//! balance pass can be shipped as a JSON file instead of a rebuild. The
//! defaults are the shipped balance.
//!
//! A config file can be selected at runtime with the `CAREER_ECONOMY_CONFIG`
//! environment variable (see [`EconomyConfig::from_env`]).

use std::path::Path;
use std::{env, fs};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::models::BadgeTier;

pub const ECONOMY_CONFIG_PATH_ENV: &str = "CAREER_ECONOMY_CONFIG";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Per-stat weights applied to a box score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatWeights {
    pub fgm: f64,
    pub three_pm: f64,
    pub ftm: f64,
    pub ast: f64,
    /// Applied to dreb + oreb
    pub rebounds: f64,
    pub stl: f64,
    pub blk: f64,
    /// Subtracted per turnover
    pub turnovers: f64,
    /// Subtracted per foul
    pub fouls: f64,
    pub plus_minus: f64,
}

impl Default for StatWeights {
    fn default() -> Self {
        Self::xp()
    }
}

impl StatWeights {
    fn xp() -> Self {
        Self {
            fgm: 10.0,
            three_pm: 15.0,
            ftm: 5.0,
            ast: 12.0,
            rebounds: 8.0,
            stl: 15.0,
            blk: 15.0,
            turnovers: 10.0,
            fouls: 5.0,
            plus_minus: 5.0,
        }
    }

    fn fans() -> Self {
        Self {
            fgm: 40.0,
            three_pm: 0.0,
            ftm: 0.0,
            ast: 30.0,
            rebounds: 25.0,
            stl: 50.0,
            blk: 50.0,
            turnovers: 20.0,
            fouls: 10.0,
            plus_minus: 10.0,
        }
    }
}

/// One reward formula: base + weighted stats, then outcome multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RewardCurve {
    pub base_regular: f64,
    pub base_playoff: f64,
    pub weights: StatWeights,
    pub win_multiplier: f64,
    pub loss_multiplier: f64,
    pub playoff_multiplier: f64,
}

impl Default for RewardCurve {
    fn default() -> Self {
        Self::xp()
    }
}

impl RewardCurve {
    fn xp() -> Self {
        Self {
            base_regular: 100.0,
            base_playoff: 200.0,
            weights: StatWeights::xp(),
            win_multiplier: 1.2,
            loss_multiplier: 0.9,
            playoff_multiplier: 1.5,
        }
    }

    fn fans() -> Self {
        Self {
            base_regular: 500.0,
            base_playoff: 1000.0,
            weights: StatWeights::fans(),
            win_multiplier: 1.5,
            loss_multiplier: 0.9,
            playoff_multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RewardConfig {
    pub xp: RewardCurve,
    /// Partial sections fill in from the fan curve, not the XP curve
    #[serde(deserialize_with = "fans_curve")]
    pub fans: RewardCurve,
    /// Bounds the per-game XP modifier is clamped into
    pub modifier_min: f64,
    pub modifier_max: f64,
    /// Fan base at which fan gains drop to zero
    pub fan_saturation: u64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            xp: RewardCurve::xp(),
            fans: RewardCurve::fans(),
            modifier_min: 0.1,
            modifier_max: 2.0,
            fan_saturation: 100_000_000,
        }
    }
}

fn fans_curve<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RewardCurve, D::Error> {
    let overrides = Value::deserialize(deserializer)?;
    let mut curve = serde_json::to_value(RewardCurve::fans()).map_err(de::Error::custom)?;
    overlay(&mut curve, overrides);
    serde_json::from_value(curve).map_err(de::Error::custom)
}

/// Recursively replace the keys of `base` that `overrides` names.
fn overlay(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpgradeConfig {
    pub min_level: u8,
    pub max_level: u8,
    /// cost(L) = round(base * growth^(L / step))
    pub cost_base: f64,
    pub cost_growth: f64,
    pub cost_step: f64,
    /// XP to reach Bronze, Silver, Gold, Hall of Fame, Legend
    pub badge_costs: [u64; 5],
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            min_level: 25,
            max_level: 99,
            cost_base: 100.0,
            cost_growth: 1.5,
            cost_step: 10.0,
            badge_costs: [1_000, 2_000, 4_000, 8_000, 16_000],
        }
    }
}

impl UpgradeConfig {
    /// XP needed to move into `tier`. Locked is free.
    pub fn badge_cost(&self, tier: BadgeTier) -> u64 {
        match tier.rank() {
            0 => 0,
            rank => self.badge_costs[rank - 1],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeasonConfig {
    pub regular_season_games: u32,
    pub playoff_rounds: u8,
    /// Wins needed to take a series
    pub series_wins: u8,
    /// Simulated playoff win chance = min(cap, rating / 99 * scale)
    pub playoff_win_scale: f64,
    pub playoff_win_cap: f64,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            regular_season_games: 82,
            playoff_rounds: 4,
            series_wins: 4,
            playoff_win_scale: 0.7,
            playoff_win_cap: 0.9,
        }
    }
}

impl SeasonConfig {
    pub fn series_length(&self) -> u8 {
        self.series_wins * 2 - 1
    }
}

/// Economy a new career starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartingConfig {
    pub xp: u64,
    pub fan_base: u64,
    pub bank_balance: u64,
    pub overall_rating: u32,
}

impl Default for StartingConfig {
    fn default() -> Self {
        Self { xp: 1_000, fan_base: 12_000, bank_balance: 50_000, overall_rating: 60 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EconomyConfig {
    pub rewards: RewardConfig,
    pub upgrades: UpgradeConfig,
    pub season: SeasonConfig,
    pub starting: StartingConfig,
}

impl EconomyConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse and validate. Missing sections and fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EconomyConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Config from the file named by `CAREER_ECONOMY_CONFIG`, or the
    /// defaults when the variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(ECONOMY_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let config = Self::load(path).map_err(|e| match e {
            ConfigError::Io(msg) => {
                ConfigError::Io(format!("{ECONOMY_CONFIG_PATH_ENV}='{path}': {msg}"))
            }
            ConfigError::Parse(msg) => {
                ConfigError::Parse(format!("{ECONOMY_CONFIG_PATH_ENV}='{path}': {msg}"))
            }
            ConfigError::Validation(msg) => {
                ConfigError::Validation(format!("{ECONOMY_CONFIG_PATH_ENV}='{path}': {msg}"))
            }
        })?;
        info!(path, "loaded economy config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.rewards;
        if !(r.modifier_min > 0.0 && r.modifier_min <= r.modifier_max) {
            return Err(ConfigError::Validation(format!(
                "modifier range must satisfy 0 < min <= max, got {}..={}",
                r.modifier_min, r.modifier_max
            )));
        }
        if r.fan_saturation == 0 {
            return Err(ConfigError::Validation("fan_saturation must be positive".into()));
        }
        for (name, curve) in [("xp", &r.xp), ("fans", &r.fans)] {
            let multipliers =
                [curve.win_multiplier, curve.loss_multiplier, curve.playoff_multiplier];
            if multipliers.iter().any(|m| *m < 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{name} multipliers must be non-negative"
                )));
            }
        }

        let u = &self.upgrades;
        if u.min_level == 0 || u.min_level >= u.max_level {
            return Err(ConfigError::Validation(format!(
                "level range must satisfy 0 < min < max, got {}..={}",
                u.min_level, u.max_level
            )));
        }
        if u.cost_base <= 0.0 || u.cost_growth < 1.0 || u.cost_step <= 0.0 {
            return Err(ConfigError::Validation(
                "cost curve needs base > 0, growth >= 1 and step > 0".into(),
            ));
        }
        if u.badge_costs.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Validation(format!(
                "badge costs must be strictly ascending, got {:?}",
                u.badge_costs
            )));
        }

        let s = &self.season;
        if s.regular_season_games == 0 {
            return Err(ConfigError::Validation("regular_season_games must be positive".into()));
        }
        if s.playoff_rounds == 0 || s.series_wins == 0 {
            return Err(ConfigError::Validation(
                "playoff_rounds and series_wins must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&s.playoff_win_cap) || s.playoff_win_scale < 0.0 {
            return Err(ConfigError::Validation(format!(
                "playoff win cap must be 0.0-1.0, got {}",
                s.playoff_win_cap
            )));
        }

        if self.starting.overall_rating == 0 {
            return Err(ConfigError::Validation("starting overall_rating must be positive".into()));
        }
        Ok(())
    }
}
