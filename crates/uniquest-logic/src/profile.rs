//! Student trait profile — five additive accumulators and derived views.
//!
//! A profile only ever grows: questionnaire answers, role picks, and
//! situation choices each contribute a non-negative delta per trait.
//! The accumulators reset only through an explicit user reset.

use serde::{Deserialize, Serialize};

/// The five personality/aptitude traits tracked by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKind {
    Technical,
    Analytical,
    Creative,
    Social,
    Leadership,
}

impl TraitKind {
    /// All traits in canonical order.
    pub const ALL: [TraitKind; 5] = [
        TraitKind::Technical,
        TraitKind::Analytical,
        TraitKind::Creative,
        TraitKind::Social,
        TraitKind::Leadership,
    ];
}

/// Accumulated trait scores for a student.
///
/// Field layout matches the persisted questionnaire blob, so this type
/// doubles as a delta bundle: a partial contribution is just a profile
/// with zeroes in the untouched traits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub technical: u32,
    pub analytical: u32,
    pub creative: u32,
    pub social: u32,
    pub leadership: u32,
}

impl StudentProfile {
    /// Get the accumulated score for one trait.
    pub fn get(&self, kind: TraitKind) -> u32 {
        match kind {
            TraitKind::Technical => self.technical,
            TraitKind::Analytical => self.analytical,
            TraitKind::Creative => self.creative,
            TraitKind::Social => self.social,
            TraitKind::Leadership => self.leadership,
        }
    }

    fn get_mut(&mut self, kind: TraitKind) -> &mut u32 {
        match kind {
            TraitKind::Technical => &mut self.technical,
            TraitKind::Analytical => &mut self.analytical,
            TraitKind::Creative => &mut self.creative,
            TraitKind::Social => &mut self.social,
            TraitKind::Leadership => &mut self.leadership,
        }
    }

    /// Add `amount` to a single trait, returning the new profile.
    pub fn add(&self, kind: TraitKind, amount: u32) -> StudentProfile {
        let mut next = *self;
        *next.get_mut(kind) += amount;
        next
    }

    /// Merge a delta bundle into this profile, trait by trait.
    ///
    /// Pure additive accumulation — a zero in the delta leaves the
    /// corresponding accumulator untouched.
    pub fn apply_scores(&self, delta: &StudentProfile) -> StudentProfile {
        let mut next = *self;
        for kind in TraitKind::ALL {
            *next.get_mut(kind) += delta.get(kind);
        }
        next
    }

    /// Scale every trait by `factor`, rounding to the nearest integer.
    /// Used for damped secondary contributions.
    pub fn scaled(&self, factor: f32) -> StudentProfile {
        let mut next = StudentProfile::default();
        for kind in TraitKind::ALL {
            *next.get_mut(kind) = (self.get(kind) as f32 * factor).round() as u32;
        }
        next
    }

    /// Sum of all five accumulators.
    pub fn total(&self) -> u32 {
        TraitKind::ALL.iter().map(|&k| self.get(k)).sum()
    }

    /// The trait with the highest accumulated score.
    ///
    /// Ties resolve to the earlier trait in [`TraitKind::ALL`].
    pub fn top_trait(&self) -> TraitKind {
        let mut best = TraitKind::ALL[0];
        for kind in TraitKind::ALL {
            if self.get(kind) > self.get(best) {
                best = kind;
            }
        }
        best
    }
}

/// Per-trait percentages relative to the strongest trait.
///
/// Each value is `round(trait / max * 100)`; the divisor floors at 1 so an
/// all-zero profile yields all zeroes instead of dividing by zero. The
/// maximum trait always maps to exactly 100.
pub fn profile_percentages(profile: &StudentProfile) -> [(TraitKind, u32); 5] {
    let max = TraitKind::ALL
        .iter()
        .map(|&k| profile.get(k))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut out = [(TraitKind::Technical, 0u32); 5];
    for (slot, kind) in out.iter_mut().zip(TraitKind::ALL) {
        let pct = (profile.get(kind) as f32 / max as f32 * 100.0).round() as u32;
        *slot = (kind, pct);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_scores_is_additive() {
        let base = StudentProfile {
            technical: 3,
            analytical: 1,
            ..Default::default()
        };
        let delta = StudentProfile {
            technical: 2,
            social: 4,
            ..Default::default()
        };
        let merged = base.apply_scores(&delta);
        assert_eq!(merged.technical, 5);
        assert_eq!(merged.analytical, 1);
        assert_eq!(merged.social, 4);
        assert_eq!(merged.creative, 0);
    }

    #[test]
    fn apply_zero_delta_is_identity() {
        let base = StudentProfile {
            creative: 7,
            leadership: 2,
            ..Default::default()
        };
        assert_eq!(base.apply_scores(&StudentProfile::default()), base);
    }

    #[test]
    fn percentages_bounded_and_max_is_100() {
        let profile = StudentProfile {
            technical: 40,
            analytical: 30,
            creative: 10,
            social: 0,
            leadership: 25,
        };
        let pcts = profile_percentages(&profile);
        for &(kind, pct) in &pcts {
            assert!(pct <= 100, "{kind:?} out of range: {pct}");
        }
        let technical = pcts
            .iter()
            .find(|(k, _)| *k == TraitKind::Technical)
            .unwrap()
            .1;
        assert_eq!(technical, 100);
    }

    #[test]
    fn percentages_of_empty_profile_are_zero() {
        let pcts = profile_percentages(&StudentProfile::default());
        assert!(pcts.iter().all(|&(_, pct)| pct == 0));
    }

    #[test]
    fn top_trait_ties_break_by_order() {
        let profile = StudentProfile {
            technical: 5,
            analytical: 5,
            ..Default::default()
        };
        assert_eq!(profile.top_trait(), TraitKind::Technical);
    }
}
