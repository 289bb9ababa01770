//! The progression state record and its pure transforms.
//!
//! One record is the single source of truth for the exploration map.
//! Every operation takes the current state by reference and returns the
//! next state — callers never see in-place mutation. Collections are
//! append-only, harmony scores are write-once, and guard keys are
//! permanent once consumed.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use uniquest_logic::catalog::island_for_direction;
use uniquest_logic::energy::{islands_to_reveal, strongest_direction_for, EnergyLevels};
use uniquest_logic::profile::StudentProfile;

/// Persisted state format version.
pub const STATE_VERSION: u32 = 1;

/// Distinct faculties opened before the finale fires.
pub const FINALE_THRESHOLD: u32 = 5;

/// Top-level journey phase.
///
/// `Finale` is a presentation overlay, not a terminal state: dismissing
/// it returns to `Explore`. `Energy` exists for blob compatibility with
/// older records; the documented progression skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "intro")]
    Intro,
    #[serde(rename = "self-discovery")]
    SelfDiscovery,
    #[serde(rename = "energy")]
    Energy,
    #[serde(rename = "explore")]
    Explore,
    #[serde(rename = "finale")]
    Finale,
}

/// Sub-steps of the self-discovery phase, advanced strictly in order and
/// never revisited once `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfDiscoveryStep {
    Quiz,
    Role,
    Situation,
    Done,
}

impl SelfDiscoveryStep {
    /// The step that follows this one; `Done` stays `Done`.
    pub fn next(self) -> SelfDiscoveryStep {
        match self {
            SelfDiscoveryStep::Quiz => SelfDiscoveryStep::Role,
            SelfDiscoveryStep::Role => SelfDiscoveryStep::Situation,
            SelfDiscoveryStep::Situation => SelfDiscoveryStep::Done,
            SelfDiscoveryStep::Done => SelfDiscoveryStep::Done,
        }
    }
}

/// Result of an [`ProgressionState::open_faculty`] transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFacultyOutcome {
    /// False when the faculty was already open (the state is unchanged).
    pub newly_opened: bool,
    /// True exactly once: the open that crossed [`FINALE_THRESHOLD`].
    pub finale_triggered: bool,
}

/// The single persisted exploration record.
///
/// Every field carries a default so loading an older or partial blob
/// shallow-merges with the documented defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionState {
    pub version: u32,
    pub phase: Phase,
    pub self_discovery_step: SelfDiscoveryStep,
    pub self_discovery_quiz_index: usize,
    pub selected_role: Option<String>,
    pub situation_done: bool,
    pub energy_levels: EnergyLevels,
    /// Append-only: an island is never un-revealed.
    pub revealed_islands: Vec<String>,
    /// Append-only set of opened university ids.
    pub opened_cities: Vec<u32>,
    /// Harmony in [0, 1], fixed at first open.
    pub city_harmony: BTreeMap<u32, f32>,
    /// Append-only set of opened faculty ids.
    pub opened_faculties: Vec<u32>,
    /// Ordered, deduplicated discovery log.
    pub discovery_album: Vec<u32>,
    /// Mirror of profile-score totals earned on the map.
    pub profile_scores: StudentProfile,
    /// Always equals `opened_faculties.len()`.
    pub total_faculties_opened: u32,
    pub finale_shown: bool,
    /// Consumed one-shot cross-feature guard keys.
    pub sync_guards: BTreeSet<String>,
}

impl Default for ProgressionState {
    fn default() -> Self {
        ProgressionState {
            version: STATE_VERSION,
            phase: Phase::Intro,
            self_discovery_step: SelfDiscoveryStep::Quiz,
            self_discovery_quiz_index: 0,
            selected_role: None,
            situation_done: false,
            energy_levels: EnergyLevels::default(),
            revealed_islands: Vec::new(),
            opened_cities: Vec::new(),
            city_harmony: BTreeMap::new(),
            opened_faculties: Vec::new(),
            discovery_album: Vec::new(),
            profile_scores: StudentProfile::default(),
            total_faculties_opened: 0,
            finale_shown: false,
            sync_guards: BTreeSet::new(),
        }
    }
}

/// Partial update for the simple scalar fields. `None` leaves a field
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct ProgressUpdate {
    pub phase: Option<Phase>,
    pub self_discovery_quiz_index: Option<usize>,
    pub selected_role: Option<Option<String>>,
    pub situation_done: Option<bool>,
}

impl ProgressionState {
    /// Reveal an island. No-op if already revealed.
    pub fn reveal_island(&self, island_id: &str) -> ProgressionState {
        if self.revealed_islands.iter().any(|id| id == island_id) {
            return self.clone();
        }
        let mut next = self.clone();
        next.revealed_islands.push(island_id.to_string());
        next
    }

    /// Open a city with its first-run harmony score. No-op if already
    /// open — a later call with a different score is ignored.
    pub fn open_city(&self, university_id: u32, harmony: f32) -> ProgressionState {
        if self.opened_cities.contains(&university_id) {
            return self.clone();
        }
        let mut next = self.clone();
        next.opened_cities.push(university_id);
        next.city_harmony
            .insert(university_id, harmony.clamp(0.0, 1.0));
        next
    }

    /// Open a faculty: appends to the opened set and the discovery album,
    /// bumps the total, and — when the new total crosses
    /// [`FINALE_THRESHOLD`] with the finale not yet shown — sets the
    /// finale flag and moves the phase to [`Phase::Finale`] within this
    /// same transform, so eligibility and the one-shot flag can never
    /// disagree.
    pub fn open_faculty(&self, faculty_id: u32) -> (ProgressionState, OpenFacultyOutcome) {
        if self.opened_faculties.contains(&faculty_id) {
            return (
                self.clone(),
                OpenFacultyOutcome {
                    newly_opened: false,
                    finale_triggered: false,
                },
            );
        }

        let mut next = self.clone();
        next.opened_faculties.push(faculty_id);
        next.discovery_album.push(faculty_id);
        next.total_faculties_opened = next.opened_faculties.len() as u32;

        let finale_triggered =
            next.total_faculties_opened >= FINALE_THRESHOLD && !next.finale_shown;
        if finale_triggered {
            next.finale_shown = true;
            next.phase = Phase::Finale;
        }

        (
            next,
            OpenFacultyOutcome {
                newly_opened: true,
                finale_triggered,
            },
        )
    }

    /// Dismiss the finale overlay: the journey continues in `Explore`.
    /// No-op outside the finale.
    pub fn dismiss_finale(&self) -> ProgressionState {
        if self.phase != Phase::Finale {
            return self.clone();
        }
        let mut next = self.clone();
        next.phase = Phase::Explore;
        next
    }

    /// Enter self-discovery from the intro screen. No-op elsewhere.
    pub fn begin_self_discovery(&self) -> ProgressionState {
        if self.phase != Phase::Intro {
            return self.clone();
        }
        let mut next = self.clone();
        next.phase = Phase::SelfDiscovery;
        next
    }

    /// Advance the self-discovery sub-step in strict order.
    pub fn advance_self_discovery(&self) -> ProgressionState {
        let mut next = self.clone();
        next.self_discovery_step = self.self_discovery_step.next();
        next
    }

    /// Close out self-discovery: reveal the island matching the dominant
    /// trait and move to exploration.
    pub fn complete_self_discovery(&self) -> ProgressionState {
        let top_trait = self.profile_scores.top_trait();
        let island = island_for_direction(strongest_direction_for(top_trait));
        let mut next = self.reveal_island(island.id);
        next.phase = Phase::Explore;
        next.self_discovery_step = SelfDiscoveryStep::Done;
        next
    }

    /// Merge a trait-score delta into the mirrored profile totals.
    pub fn add_profile_scores(&self, delta: &StudentProfile) -> ProgressionState {
        let mut next = self.clone();
        next.profile_scores = self.profile_scores.apply_scores(delta);
        next
    }

    /// Merge an energy bundle, then reveal every island whose threshold
    /// the new levels meet. The reveal check is idempotent — repeating
    /// the call with the same state changes nothing further.
    pub fn add_energy(&self, bundle: &EnergyLevels) -> ProgressionState {
        let mut next = self.clone();
        next.energy_levels = self.energy_levels.merge(bundle);
        for island in islands_to_reveal(&next.energy_levels, &next.revealed_islands) {
            next.revealed_islands.push(island.id.to_string());
        }
        next
    }

    /// Partial merge of the simple scalar fields.
    pub fn apply_update(&self, update: &ProgressUpdate) -> ProgressionState {
        let mut next = self.clone();
        if let Some(phase) = update.phase {
            next.phase = phase;
        }
        if let Some(index) = update.self_discovery_quiz_index {
            next.self_discovery_quiz_index = index;
        }
        if let Some(ref role) = update.selected_role {
            next.selected_role = role.clone();
        }
        if let Some(done) = update.situation_done {
            next.situation_done = done;
        }
        next
    }

    /// Whether a one-shot sync guard has been consumed.
    pub fn guard_consumed(&self, key: &str) -> bool {
        self.sync_guards.contains(key)
    }

    /// Consume a one-shot sync guard. Permanent for that key.
    pub fn consume_guard(&self, key: &str) -> ProgressionState {
        let mut next = self.clone();
        next.sync_guards.insert(key.to_string());
        next
    }
}
