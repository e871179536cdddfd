//! End-to-end game scenarios through the session API.
//!
//! Run with: cargo test session_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use scramble::config::TeamNames;
use scramble::game::check_invariants;
use scramble::report::render_stats;
use scramble::seed;
use scramble::{
    Area, ClaimState, GameError, GameSession, RegionRecord, RegionRegistry, ScoringConfig, Team,
    Verdict,
};

fn two_town_session() -> GameSession {
    let registry = RegionRegistry::load(vec![
        RegionRecord::new("X", 100, 50),
        RegionRecord::new("Y", 200, 30),
    ])
    .unwrap();
    GameSession::new(registry, ScoringConfig::default())
}

#[test]
fn test_split_claims_end_in_tie() {
    let mut session = two_town_session();
    session.on_region_clicked("X").unwrap();
    session.on_region_clicked("Y").unwrap();
    session.on_region_clicked("Y").unwrap();

    let report = session.on_show_stats_requested().unwrap();

    assert_eq!(report.team_a.town_count, 1);
    assert_eq!(report.team_a.total_population, 100);
    assert_eq!(report.team_a.total_area, Area(50));
    assert!(!report.team_a.population_bonus);
    assert!(report.team_a.area_bonus);
    assert_eq!(report.team_a.points, 2);

    assert_eq!(report.team_b.town_count, 1);
    assert_eq!(report.team_b.total_population, 200);
    assert_eq!(report.team_b.total_area, Area(30));
    assert!(report.team_b.population_bonus);
    assert!(!report.team_b.area_bonus);
    assert_eq!(report.team_b.points, 2);

    assert_eq!(report.verdict, Verdict::Tie);
}

#[test]
fn test_second_click_hands_town_to_team_b() {
    let mut session = two_town_session();
    assert_eq!(session.on_region_clicked("X").unwrap(), ClaimState::ClaimedByA);
    assert_eq!(session.on_region_clicked("X").unwrap(), ClaimState::ClaimedByB);

    assert!(!session.claims().claims(Team::A).contains("X"));
    assert!(session.claims().claims(Team::B).contains("X"));
}

#[test]
fn test_third_click_releases_town() {
    let mut session = two_town_session();
    for _ in 0..3 {
        session.on_region_clicked("X").unwrap();
    }

    assert_eq!(session.state_of("X").unwrap(), ClaimState::Unclaimed);
    assert!(!session.claims().claims(Team::A).contains("X"));
    assert!(!session.claims().claims(Team::B).contains("X"));
}

#[test]
fn test_area_formatting() {
    assert_eq!(Area(149).to_string(), "14.9");
    assert_eq!(Area(5).to_string(), "5");
}

#[test]
fn test_unknown_town_is_rejected_without_side_effects() {
    let mut session = two_town_session();
    session.on_region_clicked("X").unwrap();
    session.on_region_clicked("Y").unwrap();
    session.on_region_clicked("Y").unwrap();
    let before = session.on_show_stats_requested().unwrap();

    let err = session.on_region_clicked("Nowhere").unwrap_err();
    assert_eq!(
        err,
        GameError::UnknownRegion {
            id: "Nowhere".to_string()
        }
    );

    assert_eq!(session.claimed_by(Team::A).collect::<Vec<_>>(), ["X"]);
    assert_eq!(session.claimed_by(Team::B).collect::<Vec<_>>(), ["Y"]);
    assert_eq!(session.on_show_stats_requested().unwrap(), before);
}

#[test]
fn test_population_only_variant() {
    let registry = RegionRegistry::load(vec![
        RegionRecord::new("X", 100, 50),
        RegionRecord::new("Y", 200, 30),
    ])
    .unwrap();
    let mut session = GameSession::new(registry, ScoringConfig { area_bonus: false });
    session.on_region_clicked("X").unwrap();
    session.on_region_clicked("Y").unwrap();
    session.on_region_clicked("Y").unwrap();

    let report = session.on_end_game_requested().unwrap();
    assert_eq!(report.team_a.points, 1);
    assert_eq!(report.team_b.points, 2);
    assert_eq!(report.verdict, Verdict::TeamBWins);
}

#[test]
fn test_full_builtin_game() {
    let registry = RegionRegistry::load(seed::builtin()).unwrap();
    let mut session = GameSession::new(registry, ScoringConfig::default());

    // Team 1 takes the big western towns, Team 2 the many small eastern ones.
    for town in ["Naperville", "Bolingbrook", "Wheaton"] {
        session.on_region_clicked(town).unwrap();
    }
    for town in ["Hinsdale", "Oak Brook", "Clarendon Hills", "Westmont", "Darien"] {
        session.on_region_clicked(town).unwrap();
        session.on_region_clicked(town).unwrap();
    }
    assert!(check_invariants(&session).is_empty());

    let report = session.on_end_game_requested().unwrap();
    assert_eq!(report.team_a.town_count, 3);
    assert_eq!(report.team_a.total_population, 149_540 + 73_922 + 53_970);
    assert_eq!(report.team_a.total_area, Area(391 + 243 + 115));
    assert!(report.team_a.population_bonus);
    assert!(report.team_a.area_bonus);
    assert_eq!(report.team_a.points, 5);
    assert_eq!(report.team_b.points, 5);
    assert_eq!(report.verdict, Verdict::Tie);

    let text = render_stats(&report, &TeamNames::default());
    assert!(text.contains("Total area: 74.9 sq mi"));
    assert!(text.ends_with("The game is tied with 5 points each!\n"));
}

#[test]
fn test_seed_with_overflowing_population_is_rejected() {
    let records = seed::parse_json(
        r#"[
            {"id": "X", "population": 9223372036854775808, "area": 10},
            {"id": "Y", "population": 9223372036854775808, "area": 10},
            {"id": "Z", "population": 5, "area": 10}
        ]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 3);

    let err = RegionRegistry::load(records).unwrap_err();
    assert_eq!(err, GameError::TotalOverflow { id: "Y".to_string() });
}
