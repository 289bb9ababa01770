//! Per-direction energy — distribution from trait deltas and island reveal.
//!
//! Energy is the accumulated signal that unlocks islands. Trait-score
//! contributions fan out into direction buckets through a fixed boost
//! table; levels only grow (reset is the sole exception), so each island's
//! threshold is crossed at most once.

use serde::{Deserialize, Serialize};

use crate::catalog::{Island, ISLANDS};
use crate::direction::Direction;
use crate::profile::{StudentProfile, TraitKind};

/// Energy accumulators, one per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyLevels {
    #[serde(rename = "IT")]
    pub it: u32,
    #[serde(rename = "Экономика")]
    pub economics: u32,
    #[serde(rename = "Менеджмент")]
    pub management: u32,
    #[serde(rename = "Юриспруденция")]
    pub law: u32,
    #[serde(rename = "Естественные науки")]
    pub natural_sciences: u32,
    #[serde(rename = "Гуманитарные науки")]
    pub humanities: u32,
}

impl EnergyLevels {
    /// Get the level for one direction.
    pub fn get(&self, direction: Direction) -> u32 {
        match direction {
            Direction::It => self.it,
            Direction::Economics => self.economics,
            Direction::Management => self.management,
            Direction::Law => self.law,
            Direction::NaturalSciences => self.natural_sciences,
            Direction::Humanities => self.humanities,
        }
    }

    fn get_mut(&mut self, direction: Direction) -> &mut u32 {
        match direction {
            Direction::It => &mut self.it,
            Direction::Economics => &mut self.economics,
            Direction::Management => &mut self.management,
            Direction::Law => &mut self.law,
            Direction::NaturalSciences => &mut self.natural_sciences,
            Direction::Humanities => &mut self.humanities,
        }
    }

    /// Add `amount` to one direction, returning the new levels.
    pub fn add(&self, direction: Direction, amount: u32) -> EnergyLevels {
        let mut next = *self;
        *next.get_mut(direction) += amount;
        next
    }

    /// Per-direction addition of another bundle.
    pub fn merge(&self, other: &EnergyLevels) -> EnergyLevels {
        let mut next = *self;
        for dir in Direction::ALL {
            *next.get_mut(dir) += other.get(dir);
        }
        next
    }

    /// Scale every bucket by `factor`, rounding to the nearest integer.
    /// Used for damped secondary contributions.
    pub fn scaled(&self, factor: f32) -> EnergyLevels {
        let mut next = EnergyLevels::default();
        for dir in Direction::ALL {
            *next.get_mut(dir) = (self.get(dir) as f32 * factor).round() as u32;
        }
        next
    }
}

/// How strongly each trait feeds each direction's energy bucket.
fn trait_boosts(kind: TraitKind) -> &'static [(Direction, u32)] {
    match kind {
        TraitKind::Technical => &[(Direction::It, 5), (Direction::NaturalSciences, 3)],
        TraitKind::Analytical => &[
            (Direction::Economics, 4),
            (Direction::It, 3),
            (Direction::Law, 3),
            (Direction::NaturalSciences, 4),
        ],
        TraitKind::Creative => &[(Direction::Humanities, 5), (Direction::Management, 2)],
        TraitKind::Social => &[
            (Direction::Management, 4),
            (Direction::Law, 3),
            (Direction::Humanities, 3),
        ],
        TraitKind::Leadership => &[(Direction::Management, 5), (Direction::Economics, 3)],
    }
}

/// Fan a trait-score delta bundle out into direction energy.
///
/// For each trait with a non-zero value, every `(direction, multiplier)`
/// entry in the boost table accumulates `value * multiplier` into that
/// direction's bucket.
pub fn distribute(delta: &StudentProfile) -> EnergyLevels {
    let mut energies = EnergyLevels::default();
    for kind in TraitKind::ALL {
        let value = delta.get(kind);
        if value == 0 {
            continue;
        }
        for &(dir, mult) in trait_boosts(kind) {
            energies = energies.add(dir, value * mult);
        }
    }
    energies
}

/// The direction whose energy bucket a trait feeds the strongest.
/// Ties resolve to the earlier table entry.
pub fn strongest_direction_for(kind: TraitKind) -> Direction {
    let boosts = trait_boosts(kind);
    let mut best = boosts[0];
    for &entry in &boosts[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    best.0
}

/// Islands whose thresholds the given levels now meet and which are not in
/// `already_revealed`.
///
/// No hysteresis: a level exactly at the threshold reveals. Idempotent —
/// calling again with the same inputs yields nothing new.
pub fn islands_to_reveal(
    levels: &EnergyLevels,
    already_revealed: &[String],
) -> Vec<&'static Island> {
    ISLANDS
        .iter()
        .filter(|island| {
            levels.get(island.direction) >= island.energy_threshold
                && !already_revealed.iter().any(|id| id == island.id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribute_fans_out_per_table() {
        let delta = StudentProfile {
            technical: 2,
            ..Default::default()
        };
        let energies = distribute(&delta);
        assert_eq!(energies.it, 10);
        assert_eq!(energies.natural_sciences, 6);
        assert_eq!(energies.economics, 0);
    }

    #[test]
    fn distribute_accumulates_across_traits() {
        let delta = StudentProfile {
            technical: 1,
            analytical: 1,
            ..Default::default()
        };
        let energies = distribute(&delta);
        // technical: IT 5; analytical: IT 3
        assert_eq!(energies.it, 8);
        assert_eq!(energies.natural_sciences, 7);
        assert_eq!(energies.law, 3);
    }

    #[test]
    fn merge_is_per_direction_addition() {
        let a = EnergyLevels { it: 3, law: 1, ..Default::default() };
        let b = EnergyLevels { it: 2, humanities: 4, ..Default::default() };
        let merged = a.merge(&b);
        assert_eq!(merged.it, 5);
        assert_eq!(merged.law, 1);
        assert_eq!(merged.humanities, 4);
    }

    #[test]
    fn scaled_rounds_to_nearest() {
        let levels = EnergyLevels { it: 5, ..Default::default() };
        assert_eq!(levels.scaled(0.3).it, 2); // 1.5 rounds up
        assert_eq!(levels.scaled(0.2).it, 1);
    }

    #[test]
    fn threshold_is_inclusive() {
        let island = crate::catalog::island_for_direction(Direction::It);
        let levels = EnergyLevels {
            it: island.energy_threshold,
            ..Default::default()
        };
        let revealed = islands_to_reveal(&levels, &[]);
        assert!(revealed.iter().any(|i| i.id == island.id));
    }

    #[test]
    fn below_threshold_reveals_nothing() {
        let island = crate::catalog::island_for_direction(Direction::It);
        let levels = EnergyLevels {
            it: island.energy_threshold - 1,
            ..Default::default()
        };
        assert!(islands_to_reveal(&levels, &[]).is_empty());
    }

    #[test]
    fn already_revealed_islands_are_skipped() {
        let island = crate::catalog::island_for_direction(Direction::It);
        let levels = EnergyLevels {
            it: island.energy_threshold + 10,
            ..Default::default()
        };
        let revealed = islands_to_reveal(&levels, &[island.id.to_string()]);
        assert!(revealed.is_empty());
    }

    #[test]
    fn strongest_direction_per_trait() {
        assert_eq!(strongest_direction_for(TraitKind::Technical), Direction::It);
        assert_eq!(
            strongest_direction_for(TraitKind::Leadership),
            Direction::Management
        );
    }
}
