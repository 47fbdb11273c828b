//! Box score -> XP and fan gains
//!
//! XP   = (base + Σ stat·weight + plusMinus·w) × outcome × modifier × playoff
//! Fans = (base + Σ stat·weight + plusMinus·w) × outcome × playoff × saturation
//!
//! saturation = max(0, 1 − fanBase / fan_saturation)

use serde::{Deserialize, Serialize};

use crate::config::{RewardConfig, RewardCurve};
use crate::models::BoxScore;

/// Resource gains for one game, already rounded and floored at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRewards {
    pub xp: u64,
    pub fans: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct RewardCalculator<'a> {
    config: &'a RewardConfig,
}

impl<'a> RewardCalculator<'a> {
    pub fn new(config: &'a RewardConfig) -> Self {
        Self { config }
    }

    /// XP modifier clamped into the configured range. Non-finite input counts as 1.0.
    pub fn clamp_modifier(&self, modifier: f64) -> f64 {
        let modifier = if modifier.is_finite() { modifier } else { 1.0 };
        modifier.clamp(self.config.modifier_min, self.config.modifier_max)
    }

    pub fn calculate_xp(&self, stats: &BoxScore, is_playoff: bool) -> u64 {
        let curve = &self.config.xp;
        let raw = raw_gain(curve, stats, is_playoff)
            * outcome_multiplier(curve, stats.win)
            * self.clamp_modifier(stats.modifier)
            * playoff_multiplier(curve, is_playoff);
        to_gain(raw)
    }

    pub fn calculate_fans(&self, stats: &BoxScore, is_playoff: bool, current_fans: u64) -> u64 {
        let curve = &self.config.fans;
        let raw = raw_gain(curve, stats, is_playoff)
            * outcome_multiplier(curve, stats.win)
            * playoff_multiplier(curve, is_playoff);
        to_gain(raw * self.saturation(current_fans))
    }

    /// Share of a fan gain that still lands at this fan base, in 0.0..=1.0.
    pub fn saturation(&self, current_fans: u64) -> f64 {
        let ratio = current_fans as f64 / self.config.fan_saturation as f64;
        (1.0 - ratio).max(0.0)
    }

    pub fn evaluate(&self, stats: &BoxScore, is_playoff: bool, current_fans: u64) -> GameRewards {
        GameRewards {
            xp: self.calculate_xp(stats, is_playoff),
            fans: self.calculate_fans(stats, is_playoff, current_fans),
        }
    }
}

fn raw_gain(curve: &RewardCurve, s: &BoxScore, is_playoff: bool) -> f64 {
    let w = &curve.weights;
    let base = if is_playoff { curve.base_playoff } else { curve.base_regular };
    let performance = s.fgm as f64 * w.fgm
        + s.three_pm as f64 * w.three_pm
        + s.ftm as f64 * w.ftm
        + s.ast as f64 * w.ast
        + s.rebounds() as f64 * w.rebounds
        + s.stl as f64 * w.stl
        + s.blk as f64 * w.blk
        - s.turnovers as f64 * w.turnovers
        - s.fouls as f64 * w.fouls;
    base + performance + s.plus_minus as f64 * w.plus_minus
}

fn outcome_multiplier(curve: &RewardCurve, win: bool) -> f64 {
    if win {
        curve.win_multiplier
    } else {
        curve.loss_multiplier
    }
}

fn playoff_multiplier(curve: &RewardCurve, is_playoff: bool) -> f64 {
    if is_playoff {
        curve.playoff_multiplier
    } else {
        1.0
    }
}

fn to_gain(raw: f64) -> u64 {
    if raw.is_finite() && raw > 0.0 {
        raw.round() as u64
    } else {
        0
    }
}
