//! End-to-end journey: intro → self-discovery → exploration → finale.
//!
//! Drives the progression store the way the map screens do, with the
//! cross-feature syncs called opportunistically (and redundantly) along
//! the way.

use uniquest_logic::catalog::{find_simulation, ROLE_CHOICES, SELF_DISCOVERY_QUIZZES, SITUATION};
use uniquest_logic::direction::Direction;
use uniquest_logic::energy::distribute;
use uniquest_logic::profile::StudentProfile;
use uniquest_state::progress::{Phase, ProgressionState, SelfDiscoveryStep};
use uniquest_state::session::{QuizSession, SimulationSession};
use uniquest_state::store::{MemoryStore, ProgressStore};
use uniquest_state::sync::{
    sync_collected_faculties, sync_from_day_in_life, sync_from_quiz, QUIZ_GUARD,
};

fn fresh_store() -> ProgressStore<MemoryStore> {
    let mut store = ProgressStore::new(MemoryStore::new());
    store.save(&ProgressionState::default());
    store
}

/// Apply one self-discovery contribution the way the map screen does:
/// mirror the scores, then distribute them into energy.
fn credit(store: &mut ProgressStore<MemoryStore>, delta: &StudentProfile) {
    store.mutate(|s| {
        s.add_profile_scores(delta)
            .add_energy(&distribute(delta))
    });
}

#[test]
fn full_journey_reaches_finale_once() {
    let mut store = fresh_store();

    // Intro → self-discovery.
    store.mutate(|s| s.begin_self_discovery());
    assert_eq!(store.load().phase, Phase::SelfDiscovery);

    // Quiz step: answer every self-discovery item.
    let mut quiz = QuizSession::new(SELF_DISCOVERY_QUIZZES);
    while !quiz.is_complete() {
        let delta = quiz.select_option(0).expect("unanswered question");
        credit(&mut store, &delta);
        quiz.advance();
    }
    store.mutate(|s| s.advance_self_discovery());
    assert_eq!(store.load().self_discovery_step, SelfDiscoveryStep::Role);

    // Role step.
    let role = &ROLE_CHOICES[0];
    let role_delta = {
        let mut d = StudentProfile::default();
        for &(kind, amount) in role.scores {
            d = d.add(kind, amount);
        }
        d
    };
    credit(&mut store, &role_delta);
    store.mutate(|s| {
        s.apply_update(&uniquest_state::progress::ProgressUpdate {
            selected_role: Some(Some(role.id.to_string())),
            ..Default::default()
        })
        .advance_self_discovery()
    });

    // Situation step.
    let situation_delta = SITUATION.options[0].delta();
    credit(&mut store, &situation_delta);
    store.mutate(|s| s.advance_self_discovery().complete_self_discovery());

    let state = store.load();
    assert_eq!(state.phase, Phase::Explore);
    assert!(
        !state.revealed_islands.is_empty(),
        "completing self-discovery reveals at least the dominant island"
    );
    assert!(state.profile_scores.total() > 0);

    // Questionnaire finishes elsewhere; its sync is one-shot.
    let quiz_profile = StudentProfile {
        technical: 40,
        analytical: 30,
        ..Default::default()
    };
    store.save_profile(&quiz_profile);
    assert!(sync_from_quiz(&mut store, &quiz_profile));
    let after_sync = store.load();
    assert!(!sync_from_quiz(&mut store, &quiz_profile));
    assert_eq!(store.load(), after_sync, "second quiz sync must change nothing");
    assert!(after_sync.guard_consumed(QUIZ_GUARD));

    // A mini-scenario credits its direction once.
    assert!(sync_from_day_in_life(&mut store, Direction::It));
    assert!(!sync_from_day_in_life(&mut store, Direction::It));
    assert!(sync_from_day_in_life(&mut store, Direction::Economics));

    // Open a city through its scenario.
    let sim = find_simulation(1).expect("scenario for university 1");
    let mut session = SimulationSession::new(sim.steps);
    while !session.is_complete() {
        session.select_choice(0).expect("unmade choice");
        session.advance();
    }
    let harmony = session.harmony();
    store.mutate(|s| s.open_city(1, harmony));
    let state = store.load();
    assert!(state.opened_cities.contains(&1));
    assert!((state.city_harmony[&1] - harmony).abs() < f32::EPSILON);

    // Collect faculties until the finale fires.
    let mut finale_count = 0;
    for faculty_id in [101, 102, 103, 201, 202, 203] {
        let mut triggered = false;
        store.mutate(|s| {
            let (next, outcome) = s.open_faculty(faculty_id);
            triggered = outcome.finale_triggered;
            next
        });
        if triggered {
            finale_count += 1;
            assert_eq!(store.load().total_faculties_opened, 5);
        }
        sync_collected_faculties(&mut store);
    }
    assert_eq!(finale_count, 1);

    let state = store.load();
    assert!(state.finale_shown);
    assert_eq!(state.total_faculties_opened, 6);
    assert_eq!(
        state.total_faculties_opened as usize,
        state.opened_faculties.len()
    );
    assert_eq!(store.load_collected(), state.discovery_album);

    // Dismissing the finale resumes exploration; the flag stays set.
    store.mutate(|s| s.dismiss_finale());
    let state = store.load();
    assert_eq!(state.phase, Phase::Explore);
    assert!(state.finale_shown);

    // Further opens never re-trigger.
    let mut retriggered = false;
    store.mutate(|s| {
        let (next, outcome) = s.open_faculty(301);
        retriggered = outcome.finale_triggered;
        next
    });
    assert!(!retriggered);
}

#[test]
fn reset_wipes_the_journey() {
    let mut store = fresh_store();
    store.mutate(|s| s.begin_self_discovery().open_faculty(101).0);
    store.save_profile(&StudentProfile {
        social: 9,
        ..Default::default()
    });
    sync_collected_faculties(&mut store);

    store.reset();
    assert!(!store.progress_exists());
    assert_eq!(store.load(), ProgressionState::default());
    assert!(store.load_profile().is_none());
    assert!(store.load_collected().is_empty());

    // Syncs against the wiped store are silent no-ops.
    assert!(!sync_from_quiz(
        &mut store,
        &StudentProfile {
            technical: 5,
            ..Default::default()
        }
    ));
    assert!(!sync_from_day_in_life(&mut store, Direction::Law));
}

#[test]
fn stale_snapshot_cannot_overwrite_later_progress() {
    // A deferred follow-up must read current state when it runs, not a
    // snapshot captured before the delay. `mutate` enforces that by
    // loading inside the call.
    let mut store = fresh_store();
    let _stale = store.load();

    store.mutate(|s| s.reveal_island("isle-it"));
    // The "delayed" transition runs later and sees the reveal.
    let after = store.mutate(|s| s.open_city(5, 0.6));
    assert!(after.revealed_islands.contains(&"isle-it".to_string()));
    assert!(after.opened_cities.contains(&5));
}
