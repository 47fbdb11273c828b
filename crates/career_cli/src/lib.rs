//! Career CLI library
//!
//! File-backed sessions around [`ProgressionStore`]: one JSON save per
//! career, read at startup and rewritten after every successful command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use career_core::career::{SeasonPhase, SeriesState};
use career_core::{BoxScore, EconomyConfig, PlayerSnapshot, ProgressionStore};

/// Default save location when `--save` is not given.
pub const DEFAULT_SAVE_PATH: &str = "career.json";

/// Economy config from an explicit file, else from `CAREER_ECONOMY_CONFIG`,
/// else the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<EconomyConfig> {
    match path {
        Some(path) => EconomyConfig::load(path)
            .with_context(|| format!("Failed to load economy config: {}", path.display())),
        None => EconomyConfig::from_env().context("Failed to load economy config from environment"),
    }
}

/// Deterministic generator when seeded, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Box score from a JSON file using the save-file key names (`3pm`, `to`, `fls`, ...).
pub fn read_box_score(path: &Path) -> Result<BoxScore> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read box score: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid box score JSON: {}", path.display()))
}

/// A career bound to its save file.
#[derive(Debug)]
pub struct Session {
    store: ProgressionStore,
    path: PathBuf,
}

impl Session {
    /// Open the save at `path`. A missing file gives an empty session.
    pub fn open(path: impl Into<PathBuf>, config: EconomyConfig) -> Result<Self> {
        let path = path.into();
        let mut store = ProgressionStore::with_config(config, Default::default());

        if path.exists() {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read save: {}", path.display()))?;
            store
                .load_json(&json)
                .with_context(|| format!("Failed to load save: {}", path.display()))?;
            debug!(path = %path.display(), "save opened");
        }

        Ok(Self { store, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &ProgressionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProgressionStore {
        &mut self.store
    }

    pub fn snapshot(&self) -> Result<std::sync::Arc<PlayerSnapshot>> {
        self.store.snapshot().with_context(|| {
            format!("No career in {}; run `career new` first", self.path.display())
        })
    }

    /// Write the current career back to disk.
    pub fn save(&self) -> Result<()> {
        let json = self.store.save_json()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write save: {}", self.path.display()))?;
        info!(path = %self.path.display(), "career saved");
        Ok(())
    }
}

/// Human-readable career overview.
pub fn render_summary(store: &ProgressionStore) -> Result<String> {
    let snapshot = store.snapshot().context("No career loaded")?;
    let mut lines = vec![
        format!("{} ({}), overall {}", snapshot.name, snapshot.position, snapshot.overall_rating),
        format!(
            "XP {} | Fans {} | Bank ${}",
            snapshot.xp, snapshot.fan_base, snapshot.bank_balance
        ),
        format!(
            "Record {}-{} | Streak {} | Games left {}",
            snapshot.team_record.wins,
            snapshot.team_record.losses,
            snapshot.win_streak,
            store.games_remaining()?
        ),
    ];

    match &snapshot.contract {
        Some(contract) => lines.push(format!(
            "Contract {} yrs, ${:.2}M/yr | {} remaining",
            contract.years,
            contract.average,
            snapshot.years_remaining()
        )),
        None => lines.push("No contract".to_string()),
    }

    let phase = match store.season_phase()? {
        SeasonPhase::RegularSeason => "Regular season".to_string(),
        SeasonPhase::Playoffs => match store.series_status()? {
            Some(status) => {
                format!("Playoffs round {} ({}-{})", status.round, status.wins, status.losses)
            }
            None => "Playoffs".to_string(),
        },
        SeasonPhase::SeasonComplete => match store.series_status()? {
            Some(status) if status.state == SeriesState::Champion => "Champions".to_string(),
            Some(status) => format!("Season over, out in round {}", status.round),
            None => "Season over".to_string(),
        },
        SeasonPhase::ContractExpired => "Contract expired; sign a new deal".to_string(),
    };
    lines.push(phase);

    for deal in &snapshot.active_endorsements {
        let name = store
            .catalog()
            .endorsement(&deal.endorsement_id)
            .map_or(deal.endorsement_id.as_str(), |e| e.name.as_str());
        let due = if deal.is_claimable() {
            "ready to claim".to_string()
        } else {
            format!("{} games to payout", deal.games_remaining)
        };
        lines.push(format!("  {name}: {due}"));
    }

    Ok(lines.join("\n"))
}
