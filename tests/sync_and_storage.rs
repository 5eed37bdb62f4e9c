#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::{
    merge_conflicts, Assignment, Candidate, Horizon, JsonStorage, Plan, PlannedSchedules, Planner,
    Schedule, SolveError, SolveOptions, Storage,
};
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn three_day_horizon() -> Horizon {
    Horizon::span(date(2026, 3, 2), date(2026, 3, 4)).unwrap()
}

#[test]
fn merged_conflicts_steer_assignments_away() {
    let mut planner = Planner::new();
    planner.add_candidates(vec![
        Candidate::new("alice", "Alice"),
        Candidate::new("bob", "Bob"),
        Candidate::new("carol", "Carol"),
    ]);
    planner.set_horizon(three_day_horizon());

    // alice est déjà d'astreinte ailleurs le premier jour.
    let alice_id = planner.roster().candidates[0].id.clone();
    let elsewhere = PlannedSchedules::new(vec![Schedule {
        entries: vec![Assignment {
            date: date(2026, 3, 2),
            candidate: alice_id.clone(),
        }],
    }]);

    let horizon = planner.horizon().clone();
    merge_conflicts(planner.roster_mut(), &elsewhere, &horizon).unwrap();
    assert!(planner.roster().candidates[0].blackout.contains(&date(2026, 3, 2)));

    let outcome = planner.solve(SolveOptions::default()).unwrap();
    let first_day = outcome.preferred().candidate_for(date(2026, 3, 2)).unwrap();
    assert_ne!(first_day, &alice_id);
}

#[test]
fn busy_dates_outside_horizon_are_ignored() {
    let mut planner = Planner::new();
    planner.add_candidates(vec![
        Candidate::new("alice", "Alice"),
        Candidate::new("bob", "Bob"),
    ]);
    planner.set_horizon(three_day_horizon());

    let alice_id = planner.roster().candidates[0].id.clone();
    let elsewhere = PlannedSchedules::new(vec![Schedule {
        entries: vec![Assignment {
            date: date(2026, 7, 1),
            candidate: alice_id,
        }],
    }]);

    let horizon = planner.horizon().clone();
    merge_conflicts(planner.roster_mut(), &elsewhere, &horizon).unwrap();
    assert!(planner.roster().candidates[0].blackout.is_empty());
}

#[test]
fn fully_booked_slot_after_sync_is_infeasible() {
    let mut planner = Planner::new();
    planner.add_candidates(vec![
        Candidate::new("alice", "Alice"),
        Candidate::new("bob", "Bob"),
    ]);
    planner.set_horizon(three_day_horizon());

    let busy_day = date(2026, 3, 3);
    let entries = planner
        .roster()
        .candidates
        .iter()
        .map(|c| Assignment {
            date: busy_day,
            candidate: c.id.clone(),
        })
        .collect();
    let elsewhere = PlannedSchedules::new(vec![Schedule { entries }]);

    let horizon = planner.horizon().clone();
    merge_conflicts(planner.roster_mut(), &elsewhere, &horizon).unwrap();

    match planner.solve(SolveOptions::default()) {
        Err(SolveError::Infeasible { index, date: d }) => {
            assert_eq!(index, 1);
            assert_eq!(d, busy_day);
        }
        other => panic!("expected Infeasible, got {other:?}"),
    }
}

#[test]
fn plan_roundtrips_through_json_storage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let mut candidate = Candidate::new("alice", "Alice");
    candidate.block(date(2026, 3, 3));
    let plan = Plan {
        roster: roulement::Roster {
            candidates: vec![candidate],
        },
        horizon: three_day_horizon(),
        schedule: None,
    };

    let storage = JsonStorage::open(&path).unwrap();
    storage.save(&plan).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded.roster.candidates, plan.roster.candidates);
    assert_eq!(loaded.horizon, plan.horizon);
    assert!(loaded.schedule.is_none());
}
