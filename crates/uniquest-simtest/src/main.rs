//! UniQuest Headless Validation Harness
//!
//! Sweeps the pure logic and the progression state machine without a UI.
//! Runs entirely in-process — no storage backend beyond memory, no
//! rendering.
//!
//! Usage:
//!   cargo run -p uniquest-simtest
//!   cargo run -p uniquest-simtest -- --verbose

use uniquest_logic::catalog::{ISLANDS, SELF_DISCOVERY_QUIZZES, UNIVERSITIES};
use uniquest_logic::direction::Direction;
use uniquest_logic::energy::{distribute, islands_to_reveal, EnergyLevels};
use uniquest_logic::profile::{profile_percentages, StudentProfile, TraitKind};
use uniquest_logic::scoring::{get_recommendations, top_direction, StudentInput};
use uniquest_state::progress::ProgressionState;
use uniquest_state::session::QuizSession;
use uniquest_state::store::{MemoryStore, ProgressStore};
use uniquest_state::sync::{sync_collected_faculties, sync_from_day_in_life, sync_from_quiz};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== UniQuest Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Catalog sanity
    results.extend(validate_catalog(verbose));

    // 2. Recommendation scoring sweep
    results.extend(validate_scoring(verbose));

    // 3. Profile percentages
    results.extend(validate_percentages(verbose));

    // 4. Energy distribution & island thresholds
    results.extend(validate_energy(verbose));

    // 5. Progression monotonicity
    results.extend(validate_progression(verbose));

    // 6. Cross-feature sync idempotence
    results.extend(validate_sync(verbose));

    // 7. Full journey to the finale
    results.extend(validate_journey(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        if !r.passed {
            println!("FAIL  {} — {}", r.name, r.detail);
        } else if verbose {
            println!("ok    {} — {}", r.name, r.detail);
        }
    }

    println!("\n{passed}/{total} checks passed");
    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Check groups ────────────────────────────────────────────────────────

fn validate_catalog(verbose: bool) -> Vec<TestResult> {
    let mut out = Vec::new();

    let faculty_count: usize = UNIVERSITIES.iter().map(|u| u.faculties.len()).sum();
    out.push(check(
        "catalog: faculties present",
        faculty_count > 0,
        format!("{faculty_count} faculties across {} universities", UNIVERSITIES.len()),
    ));

    let mut per_direction = vec![0usize; Direction::ALL.len()];
    for island in ISLANDS {
        let idx = Direction::ALL.iter().position(|&d| d == island.direction);
        if let Some(idx) = idx {
            per_direction[idx] += 1;
        }
    }
    out.push(check(
        "catalog: one island per direction",
        per_direction.iter().all(|&n| n == 1),
        format!("{per_direction:?}"),
    ));

    if verbose {
        for island in ISLANDS {
            println!(
                "  island {:10} threshold {:3} ({})",
                island.id,
                island.energy_threshold,
                island.direction.label()
            );
        }
    }
    out
}

fn validate_scoring(verbose: bool) -> Vec<TestResult> {
    let mut out = Vec::new();

    // Sweep admission totals and budgets across profiles biased to each trait.
    let mut all_bounded = true;
    let mut all_sorted = true;
    let mut budget_fit_ok = true;

    for kind in TraitKind::ALL {
        let profile = StudentProfile::default().add(kind, 45);
        for admission in [180u32, 240, 290, 320] {
            for budget in [0i64, 200_000, 900_000] {
                let recs = get_recommendations(&StudentInput {
                    profile,
                    admission_total: admission,
                    budget,
                    preferred_city: Some("Москва".to_string()),
                    can_relocate: admission % 2 == 0,
                });
                if recs.len() > 5 {
                    all_bounded = false;
                }
                for pair in recs.windows(2) {
                    if pair[0].final_score < pair[1].final_score {
                        all_sorted = false;
                    }
                }
                for rec in &recs {
                    let scores = [
                        rec.profile_match,
                        rec.probability,
                        rec.region_match,
                        rec.financial_fit,
                        rec.university_rating,
                    ];
                    if scores.iter().any(|s| !(0.0..=1.0).contains(s)) {
                        all_bounded = false;
                    }
                    if rec.is_budget && (rec.financial_fit - 1.0).abs() > f32::EPSILON {
                        budget_fit_ok = false;
                    }
                }
            }
        }
    }

    out.push(check("scoring: at most 5, sub-scores in [0,1]", all_bounded, String::new()));
    out.push(check("scoring: sorted by final score desc", all_sorted, String::new()));
    out.push(check("scoring: budget place ⇒ financial fit 1.0", budget_fit_ok, String::new()));

    // End-to-end ranking example: strong technical profile, no budget.
    let recs = get_recommendations(&StudentInput {
        profile: StudentProfile {
            technical: 40,
            analytical: 30,
            ..Default::default()
        },
        admission_total: 290,
        budget: 0,
        preferred_city: None,
        can_relocate: false,
    });
    let top_is_it = recs
        .first()
        .map(|r| r.faculty.direction == Direction::It && r.is_budget)
        .unwrap_or(false);
    out.push(check(
        "scoring: technical profile tops out at budget IT",
        top_is_it,
        recs.first()
            .map(|r| format!("top: {} / {}", r.university.name, r.faculty.name))
            .unwrap_or_default(),
    ));

    if verbose {
        for rec in &recs {
            println!(
                "  {:24} {:28} final {:.3} budget={}",
                rec.university.name, rec.faculty.name, rec.final_score, rec.is_budget
            );
        }
    }
    out
}

fn validate_percentages(_verbose: bool) -> Vec<TestResult> {
    let mut ok = true;
    let mut max_maps_to_100 = true;

    let samples = [
        StudentProfile { technical: 40, analytical: 30, creative: 5, social: 0, leadership: 12 },
        StudentProfile { technical: 0, analytical: 0, creative: 1, social: 0, leadership: 0 },
        StudentProfile::default(),
    ];
    for profile in samples {
        let pcts = profile_percentages(&profile);
        if pcts.iter().any(|&(_, p)| p > 100) {
            ok = false;
        }
        let raw_max = TraitKind::ALL.iter().map(|&k| profile.get(k)).max().unwrap();
        if raw_max > 0 {
            let hit_100 = pcts
                .iter()
                .any(|&(k, p)| profile.get(k) == raw_max && p == 100);
            if !hit_100 {
                max_maps_to_100 = false;
            }
        }
    }

    vec![
        check("percentages: all in [0,100]", ok, String::new()),
        check("percentages: max trait maps to 100", max_maps_to_100, String::new()),
    ]
}

fn validate_energy(verbose: bool) -> Vec<TestResult> {
    let mut out = Vec::new();

    let delta = StudentProfile { technical: 2, ..Default::default() };
    let energies = distribute(&delta);
    out.push(check(
        "energy: boost table fan-out",
        energies.it == 10 && energies.natural_sciences == 6,
        format!("IT={} NatSci={}", energies.it, energies.natural_sciences),
    ));

    // Exactly-at-threshold reveals on the next merge.
    let island = &ISLANDS[0];
    let levels = EnergyLevels::default().add(island.direction, island.energy_threshold);
    let revealed = islands_to_reveal(&levels, &[]);
    out.push(check(
        "energy: threshold crossing is inclusive",
        revealed.iter().any(|i| i.id == island.id),
        format!("{} at {}", island.id, island.energy_threshold),
    ));

    let again = islands_to_reveal(&levels, &[island.id.to_string()]);
    out.push(check(
        "energy: reveal check idempotent",
        again.iter().all(|i| i.id != island.id),
        String::new(),
    ));

    if verbose {
        println!("  distribution for technical=2: {energies:?}");
    }
    out
}

fn validate_progression(_verbose: bool) -> Vec<TestResult> {
    let state = ProgressionState::default();

    let once = state.reveal_island("isle-it");
    let twice = once.reveal_island("isle-it");
    let reveal_ok = once == twice && once.revealed_islands.len() == 1;

    let opened = state.open_city(1, 0.9);
    let reopened = opened.open_city(1, 0.2);
    let city_ok = opened == reopened && (reopened.city_harmony[&1] - 0.9).abs() < f32::EPSILON;

    let (f1, o1) = state.open_faculty(101);
    let (f2, o2) = f1.open_faculty(101);
    let faculty_ok = o1.newly_opened
        && !o2.newly_opened
        && f1 == f2
        && f1.total_faculties_opened as usize == f1.opened_faculties.len();

    vec![
        check("progression: reveal_island idempotent", reveal_ok, String::new()),
        check("progression: open_city write-once", city_ok, String::new()),
        check("progression: open_faculty idempotent, count = set size", faculty_ok, String::new()),
    ]
}

fn validate_sync(_verbose: bool) -> Vec<TestResult> {
    let mut store = ProgressStore::new(MemoryStore::new());
    store.save(&ProgressionState::default());

    let profile = StudentProfile { technical: 40, analytical: 30, ..Default::default() };
    let first = sync_from_quiz(&mut store, &profile);
    let after_first = store.load();
    let second = sync_from_quiz(&mut store, &profile);
    let quiz_ok = first && !second && store.load() == after_first;

    let d1 = sync_from_day_in_life(&mut store, Direction::It);
    let it_level = store.load().energy_levels.it;
    let d2 = sync_from_day_in_life(&mut store, Direction::It);
    let other = sync_from_day_in_life(&mut store, Direction::Economics);
    let day_ok = d1 && !d2 && other && store.load().energy_levels.it == it_level;

    vec![
        check("sync: quiz contribution is one-shot", quiz_ok, String::new()),
        check(
            "sync: day-in-life guarded per direction",
            day_ok,
            format!("IT level stable at {it_level}"),
        ),
    ]
}

fn validate_journey(verbose: bool) -> Vec<TestResult> {
    let mut store = ProgressStore::new(MemoryStore::new());
    store.save(&ProgressionState::default());

    store.mutate(|s| s.begin_self_discovery());

    let mut quiz = QuizSession::new(SELF_DISCOVERY_QUIZZES);
    while !quiz.is_complete() {
        if let Some(delta) = quiz.select_option(0) {
            store.mutate(|s| s.add_profile_scores(&delta).add_energy(&distribute(&delta)));
        }
        quiz.advance();
    }
    store.mutate(|s| s.complete_self_discovery());

    let profile = quiz.profile();
    sync_from_quiz(&mut store, &profile);
    sync_from_day_in_life(&mut store, top_direction(&profile));

    let mut finale_triggers = 0;
    for faculty_id in [101, 102, 103, 201, 202, 203] {
        store.mutate(|s| {
            let (next, outcome) = s.open_faculty(faculty_id);
            if outcome.finale_triggered {
                finale_triggers += 1;
            }
            next
        });
        sync_collected_faculties(&mut store);
    }
    store.mutate(|s| s.dismiss_finale());

    let state = store.load();
    if verbose {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("  final state:\n{json}"),
            Err(err) => println!("  (state not serializable: {err})"),
        }
    }

    vec![
        check(
            "journey: finale fires exactly once",
            finale_triggers == 1 && state.finale_shown,
            format!("triggers={finale_triggers}"),
        ),
        check(
            "journey: exploration resumes after dismissal",
            state.phase == uniquest_state::progress::Phase::Explore,
            String::new(),
        ),
        check(
            "journey: collected mirror matches album",
            store.load_collected() == state.discovery_album,
            format!("{} collected", store.load_collected().len()),
        ),
    ]
}
