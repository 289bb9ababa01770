//! The six study directions and their trait affinities.
//!
//! Directions classify faculties and key the per-direction energy
//! accumulators. Every table here is a total function of the closed enum,
//! so a new direction cannot be added without the compiler pointing at
//! every table that needs an entry.

use serde::{Deserialize, Serialize};

use crate::profile::{StudentProfile, TraitKind};

/// Study direction — the closed set of six categories.
///
/// Serialized under the catalog's original display labels so persisted
/// blobs stay interchangeable with the web shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "Экономика")]
    Economics,
    #[serde(rename = "Менеджмент")]
    Management,
    #[serde(rename = "Юриспруденция")]
    Law,
    #[serde(rename = "Естественные науки")]
    NaturalSciences,
    #[serde(rename = "Гуманитарные науки")]
    Humanities,
}

impl Direction {
    /// All directions in canonical order. Tie-breaks everywhere use this
    /// order.
    pub const ALL: [Direction; 6] = [
        Direction::It,
        Direction::Economics,
        Direction::Management,
        Direction::Law,
        Direction::NaturalSciences,
        Direction::Humanities,
    ];

    /// Display label (matches the serialized form).
    pub fn label(self) -> &'static str {
        match self {
            Direction::It => "IT",
            Direction::Economics => "Экономика",
            Direction::Management => "Менеджмент",
            Direction::Law => "Юриспруденция",
            Direction::NaturalSciences => "Естественные науки",
            Direction::Humanities => "Гуманитарные науки",
        }
    }

    /// The profile traits that count toward a faculty of this direction.
    pub fn relevant_traits(self) -> &'static [TraitKind] {
        match self {
            Direction::It => &[TraitKind::Technical, TraitKind::Analytical],
            Direction::Economics => &[TraitKind::Analytical, TraitKind::Leadership],
            Direction::Management => &[TraitKind::Leadership, TraitKind::Social],
            Direction::Law => &[TraitKind::Analytical, TraitKind::Social],
            Direction::NaturalSciences => &[TraitKind::Analytical, TraitKind::Technical],
            Direction::Humanities => &[TraitKind::Creative, TraitKind::Social],
        }
    }

    /// Weighted affinity of a profile for this direction.
    ///
    /// The primary trait is double-weighted (Law uses 1.0 analytical +
    /// 1.5 social instead). Used by [`crate::scoring::top_direction`].
    pub fn affinity(self, profile: &StudentProfile) -> f32 {
        let p = |k: TraitKind| profile.get(k) as f32;
        match self {
            Direction::It => p(TraitKind::Technical) * 2.0 + p(TraitKind::Analytical),
            Direction::Economics => p(TraitKind::Analytical) * 2.0 + p(TraitKind::Leadership),
            Direction::Management => p(TraitKind::Leadership) * 2.0 + p(TraitKind::Social),
            Direction::Law => p(TraitKind::Analytical) + p(TraitKind::Social) * 1.5,
            Direction::NaturalSciences => p(TraitKind::Analytical) * 2.0 + p(TraitKind::Technical),
            Direction::Humanities => p(TraitKind::Creative) * 2.0 + p(TraitKind::Social),
        }
    }

    /// Adjacent directions that receive a smaller spill-over energy bonus
    /// when a day-in-life scenario for this direction completes.
    pub fn neighbors(self) -> &'static [Direction] {
        match self {
            Direction::It => &[Direction::NaturalSciences],
            Direction::Economics => &[Direction::Management],
            Direction::Management => &[Direction::Economics, Direction::Law],
            Direction::Law => &[Direction::Management, Direction::Humanities],
            Direction::NaturalSciences => &[Direction::It],
            Direction::Humanities => &[Direction::Law],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_direction_has_relevant_traits() {
        for dir in Direction::ALL {
            assert!(!dir.relevant_traits().is_empty(), "{dir:?}");
        }
    }

    #[test]
    fn neighbors_are_never_self() {
        for dir in Direction::ALL {
            assert!(!dir.neighbors().contains(&dir), "{dir:?} neighbors itself");
        }
    }

    #[test]
    fn affinity_double_weights_primary_trait() {
        let profile = StudentProfile {
            technical: 10,
            ..Default::default()
        };
        assert!((Direction::It.affinity(&profile) - 20.0).abs() < f32::EPSILON);
        assert!((Direction::NaturalSciences.affinity(&profile) - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        for dir in Direction::ALL {
            let json = serde_json::to_string(&dir).unwrap();
            assert_eq!(json, format!("\"{}\"", dir.label()));
            let back: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(back, dir);
        }
    }
}
