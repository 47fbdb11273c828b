//! Career CLI
//!
//! Drives one basketball career stored as a JSON save file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use career_cli::{
    load_config, read_box_score, render_summary, rng_from_seed, Session, DEFAULT_SAVE_PATH,
};
use career_core::career::{won_championship, CareerSetup};
use career_core::models::Position;
use career_core::BoxScore;

#[derive(Parser)]
#[command(name = "career")]
#[command(about = "Manage a basketball career: games, upgrades, deals and contracts")]
#[command(long_about = None)]
struct Cli {
    /// Save file
    #[arg(long, global = true, default_value = DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// Economy config JSON (falls back to CAREER_ECONOMY_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for simulated games and generated scores
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new career, replacing any existing save
    New {
        #[arg(long)]
        name: String,

        /// PG, SG, SF, PF, C or a full position name
        #[arg(long, default_value = "SF")]
        position: String,

        /// Draft pick (0 for undrafted)
        #[arg(long, default_value_t = 0)]
        pick: u32,

        /// Overwrite an existing career
        #[arg(long, default_value = "false")]
        force: bool,
    },

    /// Print the career overview
    Show {
        /// Print the raw save JSON instead
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Record a played game from a stat line
    Play(PlayArgs),

    /// Spend XP on attribute levels
    UpgradeAttribute {
        #[arg(long)]
        category: String,

        #[arg(long)]
        attribute: String,

        #[arg(long, default_value_t = 1)]
        quantity: u8,
    },

    /// Spend XP on the next badge tier
    UpgradeBadge {
        #[arg(long)]
        category: String,

        #[arg(long)]
        badge: String,
    },

    /// Sponsorship deals
    Endorse {
        #[command(subcommand)]
        action: EndorseAction,
    },

    /// Sign a new contract
    Sign {
        #[arg(long)]
        years: u32,

        /// Average salary in millions
        #[arg(long)]
        salary: f64,

        #[arg(long, default_value_t = 0)]
        pick: u32,
    },

    /// Simulate the rest of the regular season toward a win total
    Sim {
        #[arg(long)]
        target_wins: u32,

        /// Limit how many games are simulated
        #[arg(long)]
        games: Option<u32>,

        /// Mark the team as having missed the playoffs
        #[arg(long, default_value = "false")]
        missed_playoffs: bool,
    },

    /// Simulate the next playoff game
    PlayoffGame,

    /// Close the season and count it against the contract
    EndSeason,

    /// Clear the game log for the next season
    NewSeason,
}

#[derive(Args)]
struct PlayArgs {
    /// Stat line as JSON; the flags below are ignored when given
    #[arg(long)]
    stats: Option<PathBuf>,

    #[arg(long, default_value = "false")]
    win: bool,
    #[arg(long, default_value_t = 0)]
    fgm: u32,
    #[arg(long, default_value_t = 0)]
    fga: u32,
    #[arg(long = "3pm", default_value_t = 0)]
    three_pm: u32,
    #[arg(long = "3pa", default_value_t = 0)]
    three_pa: u32,
    #[arg(long, default_value_t = 0)]
    ftm: u32,
    #[arg(long, default_value_t = 0)]
    fta: u32,
    #[arg(long, default_value_t = 0)]
    ast: u32,
    #[arg(long, default_value_t = 0)]
    reb: u32,
    #[arg(long, default_value_t = 0)]
    stl: u32,
    #[arg(long, default_value_t = 0)]
    blk: u32,
    #[arg(long = "to", default_value_t = 0)]
    turnovers: u32,
    #[arg(long, default_value_t = 0)]
    fouls: u32,
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    plus_minus: i32,
    #[arg(long, default_value_t = 1.0)]
    modifier: f64,
}

impl PlayArgs {
    fn box_score(&self) -> Result<BoxScore> {
        if let Some(path) = &self.stats {
            return read_box_score(path);
        }
        Ok(BoxScore {
            fgm: self.fgm,
            fga: self.fga,
            three_pm: self.three_pm,
            three_pa: self.three_pa,
            ftm: self.ftm,
            fta: self.fta,
            ast: self.ast,
            dreb: self.reb,
            stl: self.stl,
            blk: self.blk,
            turnovers: self.turnovers,
            fouls: self.fouls,
            plus_minus: self.plus_minus,
            modifier: self.modifier,
            win: self.win,
            ..Default::default()
        })
    }
}

#[derive(Subcommand)]
enum EndorseAction {
    /// Show eligible, active and claimable deals
    List,
    /// Sign a deal
    Activate { id: String },
    /// Collect a payout that is due
    Claim { id: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let mut rng = rng_from_seed(cli.seed);
    let mut session = Session::open(&cli.save, config)?;

    match cli.command {
        Commands::New { name, position, pick, force } => {
            if session.store().has_career() && !force {
                bail!(
                    "{} already holds a career; pass --force to replace it",
                    session.path().display()
                );
            }
            let setup = CareerSetup::new(name, Position::parse(&position), pick);
            session.store_mut().create_career(&setup)?;
            session.save()?;
            println!("{}", render_summary(session.store())?);
        }

        Commands::Show { json } => {
            session.snapshot()?;
            if json {
                println!("{}", session.store().save_json()?);
            } else {
                println!("{}", render_summary(session.store())?);
            }
        }

        Commands::Play(args) => {
            let stats = args.box_score()?;
            session.snapshot()?;
            let played = session.store_mut().play_game(&stats, &mut rng)?;
            session.save()?;
            println!(
                "Game {} {:?} {} | +{} XP, +{} fans",
                played.game.game_number,
                played.game.result,
                played.game.score,
                played.rewards.xp,
                played.rewards.fans
            );
        }

        Commands::UpgradeAttribute { category, attribute, quantity } => {
            session.snapshot()?;
            let receipt = session.store_mut().upgrade_attribute(&category, &attribute, quantity)?;
            session.save()?;
            println!(
                "{} {} -> {} for {} XP",
                receipt.attribute, receipt.from, receipt.to, receipt.xp_spent
            );
        }

        Commands::UpgradeBadge { category, badge } => {
            session.snapshot()?;
            let receipt = session.store_mut().upgrade_badge(&category, &badge)?;
            session.save()?;
            println!(
                "{} {} -> {} for {} XP",
                receipt.badge,
                receipt.from.as_str(),
                receipt.to.as_str(),
                receipt.xp_spent
            );
        }

        Commands::Endorse { action } => {
            session.snapshot()?;
            match action {
                EndorseAction::List => {
                    let store = session.store();
                    for deal in store.eligible_endorsements()? {
                        println!("available  {:<24} {}", deal.id, deal.name);
                    }
                    for earned in store.endorsement_earnings()? {
                        println!(
                            "active     {:<24} {} claims, ${} earned",
                            earned.endorsement_id, earned.total_claims, earned.money
                        );
                    }
                    for deal in store.claimable_endorsements()? {
                        println!("claimable  {:<24} {}", deal.id, deal.name);
                    }
                }
                EndorseAction::Activate { id } => {
                    session.store_mut().activate_endorsement(&id)?;
                    session.save()?;
                    println!("Signed {id}");
                }
                EndorseAction::Claim { id } => {
                    let rewards = session.store_mut().claim_endorsement(&id)?;
                    session.save()?;
                    println!("+{} XP, +{} fans, +${}", rewards.xp, rewards.fans, rewards.money);
                }
            }
        }

        Commands::Sign { years, salary, pick } => {
            session.snapshot()?;
            session.store_mut().sign_contract(years, salary, pick)?;
            session.save()?;
            println!("Signed {years} years at ${salary:.2}M per year");
        }

        Commands::Sim { target_wins, games, missed_playoffs } => {
            session.snapshot()?;
            let remaining = session.store().games_remaining()?;
            let games = games.map_or(remaining, |g| g.min(remaining));
            let summary = session.store_mut().simulate_to_target(
                target_wins,
                games,
                !missed_playoffs,
                &mut rng,
            )?;
            session.save()?;
            println!("Simulated {} games: {}-{}", summary.games, summary.wins, summary.losses);
            println!("{}", render_summary(session.store())?);
        }

        Commands::PlayoffGame => {
            session.snapshot()?;
            let game = session.store_mut().simulate_playoff_game(&mut rng)?;
            session.save()?;
            println!(
                "Round {} game {}: {:?} {}",
                game.playoff_round.unwrap_or_default(),
                game.playoff_game.unwrap_or_default(),
                game.result,
                game.score
            );
        }

        Commands::EndSeason => {
            let snapshot = session.snapshot()?;
            let won = won_championship(&snapshot, &session.store().config().season);
            session.store_mut().complete_season(won).context("Cannot close the season yet")?;
            session.save()?;
            println!("{}", render_summary(session.store())?);
        }

        Commands::NewSeason => {
            session.snapshot()?;
            session.store_mut().start_new_season()?;
            session.save()?;
            println!("{}", render_summary(session.store())?);
        }
    }

    Ok(())
}
