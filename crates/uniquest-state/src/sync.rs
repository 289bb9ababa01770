//! Cross-feature synchronization — one-shot, idempotent, call-anywhere.
//!
//! The questionnaire, the day-in-life mini-scenarios, and the discovery
//! album each persist independently, yet all feed the shared progression
//! record. Every entry point here is safe to call redundantly from any
//! screen: a consumed guard key, or a progression record that was never
//! initialized, makes the call a silent no-op.

use uniquest_logic::direction::Direction;
use uniquest_logic::energy::{distribute, EnergyLevels};
use uniquest_logic::profile::StudentProfile;

use crate::store::{ProgressStore, StoragePort};

/// Guard key consumed by [`sync_from_quiz`].
pub const QUIZ_GUARD: &str = "quiz";

/// Questionnaire energy is a secondary contribution — damped.
pub const QUIZ_ENERGY_DAMPING: f32 = 0.3;
/// Questionnaire profile mirror contribution damping.
pub const QUIZ_PROFILE_DAMPING: f32 = 0.5;

/// Energy granted to the chosen direction by a day-in-life scenario.
pub const DAY_BASE_ENERGY: u32 = 10;
/// Energy granted to each neighboring direction.
pub const DAY_NEIGHBOR_ENERGY: u32 = 4;

/// Per-direction guard key for [`sync_from_day_in_life`].
pub fn day_in_life_guard(direction: Direction) -> String {
    format!("day_in_life:{}", direction.label())
}

/// Credit the completed questionnaire to the progression record, once.
///
/// Distributes the profile through the trait→direction table damped by
/// [`QUIZ_ENERGY_DAMPING`], mirrors the profile damped by
/// [`QUIZ_PROFILE_DAMPING`], and consumes the global quiz guard. Returns
/// whether anything was applied.
pub fn sync_from_quiz<P: StoragePort>(
    store: &mut ProgressStore<P>,
    profile: &StudentProfile,
) -> bool {
    if !store.progress_exists() {
        return false;
    }
    let state = store.load();
    if state.guard_consumed(QUIZ_GUARD) {
        return false;
    }

    let energies = distribute(profile).scaled(QUIZ_ENERGY_DAMPING);
    let damped_profile = profile.scaled(QUIZ_PROFILE_DAMPING);

    let next = state
        .add_energy(&energies)
        .add_profile_scores(&damped_profile)
        .consume_guard(QUIZ_GUARD);
    store.save(&next);
    log::info!("quiz contribution synced into progression state");
    true
}

/// Credit a completed day-in-life scenario, once per direction.
///
/// The chosen direction gains [`DAY_BASE_ENERGY`]; each fixed neighbor
/// gains [`DAY_NEIGHBOR_ENERGY`]. Replaying the same direction is a
/// no-op, a different direction still applies. Returns whether anything
/// was applied.
pub fn sync_from_day_in_life<P: StoragePort>(
    store: &mut ProgressStore<P>,
    direction: Direction,
) -> bool {
    if !store.progress_exists() {
        return false;
    }
    let state = store.load();
    let guard = day_in_life_guard(direction);
    if state.guard_consumed(&guard) {
        return false;
    }

    let mut bundle = EnergyLevels::default().add(direction, DAY_BASE_ENERGY);
    for &neighbor in direction.neighbors() {
        bundle = bundle.add(neighbor, DAY_NEIGHBOR_ENERGY);
    }

    let next = state.add_energy(&bundle).consume_guard(&guard);
    store.save(&next);
    log::info!("day-in-life({}) synced into progression state", direction.label());
    true
}

/// Mirror the discovery album into the externally-read collected blob.
///
/// Idempotent by construction: a full overwrite whenever the album is
/// non-empty, no guard flag. Returns whether a write happened.
pub fn sync_collected_faculties<P: StoragePort>(store: &mut ProgressStore<P>) -> bool {
    if !store.progress_exists() {
        return false;
    }
    let state = store.load();
    if state.discovery_album.is_empty() {
        return false;
    }
    store.save_collected(&state.discovery_album);
    true
}
