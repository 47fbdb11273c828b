//! End-to-end careers driven through `ProgressionStore`.

use career_core::career::{CareerSetup, SeasonPhase, SeriesState};
use career_core::models::{BadgeTier, BoxScore, Position};
use career_core::{ProgressionError, ProgressionStore, Resource, TransitionError};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

fn new_store(pick: u32) -> ProgressionStore {
    let mut store = ProgressionStore::new();
    store.create_career(&CareerSetup::new("Mika Torres", Position::PointGuard, pick)).unwrap();
    store
}

fn good_game() -> BoxScore {
    BoxScore {
        fgm: 10,
        fga: 18,
        three_pm: 3,
        three_pa: 7,
        ftm: 6,
        fta: 7,
        ast: 7,
        dreb: 5,
        oreb: 1,
        stl: 2,
        blk: 1,
        turnovers: 2,
        fouls: 2,
        plus_minus: 9,
        win: true,
        ..Default::default()
    }
}

#[test]
fn first_upgrade_costs_276() {
    let mut store = new_store(3);
    let receipt = store.upgrade_attribute("Shooting", "Mid-range shot", 1).unwrap();
    assert_eq!(receipt.xp_spent, 276);
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.xp, 724);
    assert_eq!(snapshot.attribute_level("Shooting", "Mid-range shot"), Some(26));
}

#[test]
fn endorsement_needs_enough_fans() {
    let mut store = new_store(3);
    let mut json: Value = serde_json::from_str(&store.save_json().unwrap()).unwrap();
    json["fanBase"] = Value::from(10_000);
    store.load_json(&json.to_string()).unwrap();

    let err = store.activate_endorsement("local-gym").unwrap_err();
    assert_eq!(
        err,
        ProgressionError::InsufficientResource {
            resource: Resource::Fans,
            required: 15_000,
            available: 10_000,
        }
    );
    assert!(store.snapshot().unwrap().active_endorsements.is_empty());
}

#[test]
fn endorsement_pays_out_after_interval_of_played_games() {
    let mut store = new_store(3);
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    // a few strong games push the fan base past the first threshold
    while store.snapshot().unwrap().fan_base < 15_000 {
        store.play_game(&good_game(), &mut rng).unwrap();
    }
    store.activate_endorsement("local-gym").unwrap();

    for _ in 0..9 {
        store.play_game(&good_game(), &mut rng).unwrap();
        assert!(store.claimable_endorsements().unwrap().is_empty());
    }
    store.play_game(&good_game(), &mut rng).unwrap();
    assert_eq!(store.claimable_endorsements().unwrap().len(), 1);

    let bank_before = store.snapshot().unwrap().bank_balance;
    let rewards = store.claim_endorsement("local-gym").unwrap();
    assert_eq!(store.snapshot().unwrap().bank_balance, bank_before + rewards.money);
    assert_eq!(store.endorsement_earnings().unwrap()[0].total_claims, 1);
    assert!(matches!(
        store.claim_endorsement("local-gym").unwrap_err(),
        ProgressionError::InvalidTransition(TransitionError::EndorsementNotClaimable {
            games_remaining: 10,
            ..
        })
    ));
}

#[test]
fn simulate_to_fifty_wins_from_forty_five() {
    let mut store = new_store(20);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    // 52 games at 45-7
    store.simulate_to_target(45, 52, true, &mut rng).unwrap();
    let record = store.snapshot().unwrap().team_record;
    assert_eq!((record.wins, record.losses), (45, 7));

    let summary = store.simulate_to_target(50, 30, true, &mut rng).unwrap();
    assert_eq!(summary.losses, 25);
    let record = store.snapshot().unwrap().team_record;
    assert_eq!((record.wins, record.losses), (50, 32));
    assert_eq!(store.season_phase().unwrap(), SeasonPhase::Playoffs);
}

#[test]
fn load_without_bank_balance_is_rejected() {
    let mut store = new_store(3);
    store.upgrade_badge("Defense", "Clamps").unwrap();
    let before = store.save_json().unwrap();

    let mut json: Value = serde_json::from_str(&before).unwrap();
    json.as_object_mut().unwrap().remove("bankBalance");
    let err = store.load_json(&json.to_string()).unwrap_err();
    match err {
        ProgressionError::MalformedSnapshot(inner) => {
            assert_eq!(inner.field(), Some("bankBalance"))
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(store.save_json().unwrap(), before);
}

#[test]
fn loaded_record_is_rebuilt_from_game_log() {
    let mut store = new_store(3);
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    store.simulate_to_target(6, 10, true, &mut rng).unwrap();

    let mut json: Value = serde_json::from_str(&store.save_json().unwrap()).unwrap();
    json["teamRecord"] = serde_json::json!({ "wins": u32::MAX, "losses": 0 });
    json["winStreak"] = Value::from(u32::MAX);
    store.load_json(&json.to_string()).unwrap();

    let record = store.snapshot().unwrap().team_record;
    assert_eq!((record.wins, record.losses), (6, 4));

    let summary = store.simulate_season(50, true, &mut rng).unwrap();
    assert_eq!(summary.games, 72);
    let record = store.snapshot().unwrap().team_record;
    assert_eq!((record.wins, record.losses), (50, 32));
}

#[test]
fn save_load_save_is_byte_identical() {
    let mut store = new_store(9);
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for _ in 0..5 {
        store.play_game(&good_game(), &mut rng).unwrap();
    }
    store.upgrade_attribute("Physical", "Speed", 2).unwrap();
    store.upgrade_badge("Playmaking", "Dimer").unwrap();

    let first = store.save_json().unwrap();
    let mut other = ProgressionStore::new();
    other.load_json(&first).unwrap();
    assert_eq!(other.save_json().unwrap(), first);
}

#[test]
fn second_round_contract_runs_out_after_two_seasons() {
    let mut store = new_store(45);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert_eq!(store.years_remaining().unwrap(), 2);

    for expected_remaining in [1, 0] {
        store.simulate_season(30, false, &mut rng).unwrap();
        assert_eq!(store.season_phase().unwrap(), SeasonPhase::SeasonComplete);
        store.complete_season(false).unwrap();
        assert_eq!(store.years_remaining().unwrap(), expected_remaining);
        if expected_remaining > 0 {
            store.start_new_season().unwrap();
        }
    }

    assert!(store.needs_new_contract().unwrap());
    assert_eq!(store.season_phase().unwrap(), SeasonPhase::ContractExpired);
    assert_eq!(
        store.play_game(&good_game(), &mut rng).unwrap_err(),
        ProgressionError::InvalidTransition(TransitionError::ContractRequired)
    );
    assert!(store.simulate_season(40, true, &mut rng).is_err());

    store.sign_contract(3, 8.5, 0).unwrap();
    assert_eq!(store.years_remaining().unwrap(), 3);
    assert_eq!(store.season_phase().unwrap(), SeasonPhase::RegularSeason);
    assert!(store.play_game(&good_game(), &mut rng).is_ok());
}

#[test]
fn playoff_run_ends_in_elimination_or_title() {
    let mut store = new_store(1);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    store.simulate_season(60, true, &mut rng).unwrap();

    let mut games = 0;
    while store.season_phase().unwrap() == SeasonPhase::Playoffs {
        let game = store.simulate_playoff_game(&mut rng).unwrap();
        assert!(game.is_playoff);
        games += 1;
        assert!(games <= 28);
    }
    let status = store.series_status().unwrap().unwrap();
    assert!(matches!(status.state, SeriesState::Eliminated | SeriesState::Champion));
    assert_eq!(store.snapshot().unwrap().team_record.games(), 82);
}

#[test]
fn badge_ladder_reaches_legend_then_stops() {
    let mut store = new_store(2);
    let mut json: Value = serde_json::from_str(&store.save_json().unwrap()).unwrap();
    json["xp"] = Value::from(31_000);
    store.load_json(&json.to_string()).unwrap();

    for _ in 0..5 {
        store.upgrade_badge("Outside Scoring", "Deadeye").unwrap();
    }
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.badge_tier("Outside Scoring", "Deadeye"), Some(BadgeTier::Legend));
    assert_eq!(snapshot.xp, 0);
    assert_eq!(
        store.upgrade_badge("Outside Scoring", "Deadeye").unwrap_err(),
        ProgressionError::InvalidTransition(TransitionError::BadgeMaxed { badge: "Deadeye".into() })
    );
}

#[derive(Debug, Clone)]
enum Op {
    Play(bool, i32),
    Attribute(u8),
    Badge,
    Activate(usize),
    Claim(usize),
    Simulate(u32),
    CompleteSeason,
    NewSeason,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<bool>(), -30i32..30).prop_map(|(win, pm)| Op::Play(win, pm)),
        (1u8..5).prop_map(Op::Attribute),
        Just(Op::Badge),
        (0usize..10).prop_map(Op::Activate),
        (0usize..10).prop_map(Op::Claim),
        (0u32..82).prop_map(Op::Simulate),
        Just(Op::CompleteSeason),
        Just(Op::NewSeason),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn resources_and_levels_stay_in_bounds(
        ops in proptest::collection::vec(op(), 1..40),
        seed in any::<u64>(),
    ) {
        let mut store = new_store(15);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ids: Vec<String> = store.catalog().endorsements.iter().map(|e| e.id.clone()).collect();

        for op in ops {
            let before = store.snapshot().unwrap();
            let result = match op {
                Op::Play(win, plus_minus) => {
                    let stats = BoxScore { win, plus_minus, turnovers: 3, ..good_game() };
                    store.play_game(&stats, &mut rng).map(|_| ())
                }
                Op::Attribute(quantity) => {
                    store.upgrade_attribute("Defense", "Block", quantity).map(|_| ())
                }
                Op::Badge => store.upgrade_badge("Rebounding", "Glass Cleaner").map(|_| ()),
                Op::Activate(i) => store.activate_endorsement(&ids[i]).map(|_| ()),
                Op::Claim(i) => store.claim_endorsement(&ids[i]).map(|_| ()),
                Op::Simulate(target) => store.simulate_season(target, true, &mut rng).map(|_| ()),
                Op::CompleteSeason => store.complete_season(false).map(|_| ()),
                Op::NewSeason => store.start_new_season().map(|_| ()),
            };
            let after = store.snapshot().unwrap();
            if result.is_err() {
                prop_assert!(std::sync::Arc::ptr_eq(&before, &after));
            }
            for levels in after.attributes.values() {
                for level in levels.values() {
                    prop_assert!((25..=99).contains(level));
                }
            }
            prop_assert!(after.regular_season_played() <= 82);
            prop_assert!(after.completed_seasons <= after.contract.as_ref().map_or(0, |c| c.years));
        }
    }
}
