//! Progression store
//!
//! `ProgressionStore` owns the current career and is the only place a new
//! snapshot replaces the old one. Every mutation runs against the snapshot
//! in effect at call time and either swaps in a complete new snapshot or
//! returns an error with nothing changed.
//!
//! Snapshots are shared as `Arc<PlayerSnapshot>`, so a reader that grabbed
//! [`ProgressionStore::snapshot`] keeps a consistent view after later
//! mutations.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::career::{
    self, CareerSetup, ContractLifecycle, PlayedGame, SeasonPhase, SeasonSimulator, SeriesStatus,
    SimulationSummary,
};
use crate::config::EconomyConfig;
use crate::data::Catalog;
use crate::endorsement::{EndorsementEarnings, EndorsementLifecycle};
use crate::error::{ProgressionError, Result, TransitionError};
use crate::models::{BoxScore, Endorsement, EndorsementRewards, GameResult, PlayerSnapshot};
use crate::save;
use crate::upgrade::{AttributeUpgrade, AttributeUpgradeEngine, BadgeUpgrade, BadgeUpgradeEngine};

#[derive(Debug, Clone, Default)]
pub struct ProgressionStore {
    current: Option<Arc<PlayerSnapshot>>,
    config: EconomyConfig,
    catalog: Catalog,
}

impl ProgressionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EconomyConfig, catalog: Catalog) -> Self {
        Self { current: None, config, catalog }
    }

    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current snapshot, if a career is active.
    pub fn snapshot(&self) -> Option<Arc<PlayerSnapshot>> {
        self.current.clone()
    }

    pub fn has_career(&self) -> bool {
        self.current.is_some()
    }

    fn current(&self) -> Result<&PlayerSnapshot> {
        self.current.as_deref().ok_or_else(|| TransitionError::NoActiveCareer.into())
    }

    fn replace(&mut self, next: PlayerSnapshot) -> Arc<PlayerSnapshot> {
        let next = Arc::new(next);
        self.current = Some(Arc::clone(&next));
        next
    }

    // ---------------------------------------------------------------
    // Career
    // ---------------------------------------------------------------

    pub fn create_career(&mut self, setup: &CareerSetup) -> Result<Arc<PlayerSnapshot>> {
        let snapshot = career::new_career(setup, &self.config, &self.catalog, Utc::now())?;
        Ok(self.replace(snapshot))
    }

    /// Drop the current career.
    pub fn reset(&mut self) {
        if self.current.take().is_some() {
            info!("career reset");
        }
    }

    // ---------------------------------------------------------------
    // Games and seasons
    // ---------------------------------------------------------------

    pub fn play_game<R: Rng + ?Sized>(
        &mut self,
        stats: &BoxScore,
        rng: &mut R,
    ) -> Result<PlayedGame> {
        let (next, played) = career::play_game(self.current()?, stats, &self.config, rng)?;
        self.replace(next);
        Ok(played)
    }

    pub fn simulate_to_target<R: Rng + ?Sized>(
        &mut self,
        target_wins: u32,
        games_remaining: u32,
        made_playoffs: bool,
        rng: &mut R,
    ) -> Result<SimulationSummary> {
        let simulator = SeasonSimulator::new(&self.config.season);
        let (next, summary) = simulator.simulate_to_target(
            self.current()?,
            target_wins,
            games_remaining,
            made_playoffs,
            rng,
        )?;
        self.replace(next);
        Ok(summary)
    }

    /// Simulate the rest of the regular season toward `target_wins`.
    pub fn simulate_season<R: Rng + ?Sized>(
        &mut self,
        target_wins: u32,
        made_playoffs: bool,
        rng: &mut R,
    ) -> Result<SimulationSummary> {
        let remaining = self.games_remaining()?;
        self.simulate_to_target(target_wins, remaining, made_playoffs, rng)
    }

    pub fn simulate_playoff_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameResult> {
        let simulator = SeasonSimulator::new(&self.config.season);
        let (next, game) = simulator.simulate_playoff_game(self.current()?, rng)?;
        self.replace(next);
        Ok(game)
    }

    pub fn complete_season(&mut self, won_championship: bool) -> Result<Arc<PlayerSnapshot>> {
        let next = ContractLifecycle::complete_season(
            self.current()?,
            won_championship,
            &self.config.season,
        )?;
        Ok(self.replace(next))
    }

    pub fn start_new_season(&mut self) -> Result<Arc<PlayerSnapshot>> {
        let next = ContractLifecycle::start_new_season(self.current()?)?;
        Ok(self.replace(next))
    }

    pub fn sign_contract(
        &mut self,
        years: u32,
        average_salary: f64,
        draft_pick: u32,
    ) -> Result<Arc<PlayerSnapshot>> {
        let next = ContractLifecycle::sign(self.current()?, years, average_salary, draft_pick)?;
        Ok(self.replace(next))
    }

    // ---------------------------------------------------------------
    // Upgrades
    // ---------------------------------------------------------------

    pub fn upgrade_attribute(
        &mut self,
        category: &str,
        attribute: &str,
        quantity: u8,
    ) -> Result<AttributeUpgrade> {
        let engine = AttributeUpgradeEngine::new(&self.config.upgrades, &self.catalog);
        let (next, receipt) = engine.upgrade(self.current()?, category, attribute, quantity)?;
        self.replace(next);
        Ok(receipt)
    }

    pub fn upgrade_badge(&mut self, category: &str, badge: &str) -> Result<BadgeUpgrade> {
        let engine = BadgeUpgradeEngine::new(&self.config.upgrades, &self.catalog);
        let (next, receipt) = engine.upgrade(self.current()?, category, badge)?;
        self.replace(next);
        Ok(receipt)
    }

    /// XP to raise an attribute by `quantity` from its current level.
    pub fn attribute_upgrade_cost(
        &self,
        category: &str,
        attribute: &str,
        quantity: u8,
    ) -> Result<u64> {
        let engine = AttributeUpgradeEngine::new(&self.config.upgrades, &self.catalog);
        let level = engine.current_level(self.current()?, category, attribute)?;
        Ok(engine.bulk_cost(level, quantity))
    }

    // ---------------------------------------------------------------
    // Endorsements
    // ---------------------------------------------------------------

    pub fn activate_endorsement(&mut self, id: &str) -> Result<Arc<PlayerSnapshot>> {
        let next = EndorsementLifecycle::new(&self.catalog).activate(self.current()?, id)?;
        Ok(self.replace(next))
    }

    pub fn claim_endorsement(&mut self, id: &str) -> Result<EndorsementRewards> {
        let (next, rewards) = EndorsementLifecycle::new(&self.catalog).claim(self.current()?, id)?;
        self.replace(next);
        Ok(rewards)
    }

    pub fn claimable_endorsements(&self) -> Result<Vec<&Endorsement>> {
        Ok(EndorsementLifecycle::new(&self.catalog).claimable(self.current()?))
    }

    pub fn eligible_endorsements(&self) -> Result<Vec<&Endorsement>> {
        Ok(EndorsementLifecycle::new(&self.catalog).eligible(self.current()?))
    }

    pub fn endorsement_earnings(&self) -> Result<Vec<EndorsementEarnings>> {
        Ok(EndorsementLifecycle::new(&self.catalog).earnings(self.current()?))
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    pub fn years_remaining(&self) -> Result<u32> {
        Ok(self.current()?.years_remaining())
    }

    pub fn needs_new_contract(&self) -> Result<bool> {
        Ok(self.current()?.needs_new_contract())
    }

    pub fn games_remaining(&self) -> Result<u32> {
        Ok(SeasonSimulator::new(&self.config.season).games_remaining(self.current()?))
    }

    pub fn season_phase(&self) -> Result<SeasonPhase> {
        Ok(career::season_phase(self.current()?, &self.config.season))
    }

    pub fn series_status(&self) -> Result<Option<SeriesStatus>> {
        Ok(career::series_status(self.current()?, &self.config.season))
    }

    // ---------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------

    /// Replace the current career with a saved one. On any error the current
    /// career is kept as it was.
    pub fn load_json(&mut self, json: &str) -> Result<Arc<PlayerSnapshot>> {
        match save::from_json(json, &self.config.upgrades, &self.catalog) {
            Ok(snapshot) => {
                info!(
                    name = %snapshot.name,
                    games = snapshot.completed_games.len(),
                    "career loaded"
                );
                Ok(self.replace(snapshot))
            }
            Err(err) => {
                warn!(kept_current = self.current.is_some(), "load rejected");
                Err(ProgressionError::MalformedSnapshot(err))
            }
        }
    }

    pub fn save_json(&self) -> Result<String> {
        let json = save::to_json(self.current()?)?;
        debug!(bytes = json.len(), "career saved");
        Ok(json)
    }
}
