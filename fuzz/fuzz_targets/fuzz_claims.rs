#![no_main]

//! Claim sequence fuzzer.
//!
//! Builds a registry from fuzzer-chosen towns, applies a stream of clicks
//! (some naming unknown towns) and checks after every step:
//! 1. The two claim sets stay disjoint
//! 2. Unknown towns are rejected without changing any claim
//! 3. The scoreboard never fails and its points follow the rules

use arbitrary::Arbitrary;
use scramble::game::check_invariants;
use scramble::{GameSession, RegionRecord, RegionRegistry, ScoringConfig};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated town.
#[derive(Arbitrary, Debug)]
struct FuzzTown {
    population: u32,
    area: u16,
}

/// Structured input for claim fuzzing.
#[derive(Arbitrary, Debug)]
struct ClaimInput {
    /// Towns on the board (named by index).
    towns: Vec<FuzzTown>,
    /// Clicks by town index; indices past the board name unknown towns.
    clicks: Vec<u8>,
    /// Score with the area bonus.
    area_bonus: bool,
}

fuzz_target!(|input: ClaimInput| {
    let towns: Vec<_> = input.towns.into_iter().take(32).collect();
    let records = towns
        .iter()
        .enumerate()
        .map(|(i, t)| RegionRecord::new(format!("town-{i}"), u64::from(t.population), u64::from(t.area)));
    let Ok(registry) = RegionRegistry::load(records) else {
        return;
    };
    let mut session = GameSession::new(registry, ScoringConfig { area_bonus: input.area_bonus });

    for click in input.clicks.into_iter().take(256) {
        let id = format!("town-{click}");
        let before = session.on_show_stats_requested();
        let result = session.on_region_clicked(&id);

        if usize::from(click) >= towns.len() {
            assert!(result.is_err(), "unknown town {id} was accepted");
            assert_eq!(before, session.on_show_stats_requested());
        } else {
            assert!(result.is_ok());
        }

        let violations = check_invariants(&session);
        assert!(violations.is_empty(), "{violations:?}");

        let Ok(report) = session.on_show_stats_requested() else {
            panic!("scoreboard failed");
        };
        for score in [report.team_a, report.team_b] {
            let expected = score.town_count as u64
                + u64::from(score.population_bonus)
                + u64::from(score.area_bonus);
            assert_eq!(score.points, expected);
        }
    }
});
