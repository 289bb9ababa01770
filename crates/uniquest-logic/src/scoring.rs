//! Multi-factor faculty recommendation engine.
//!
//! A pure function of the student's input and the static catalog: no side
//! effects, deterministic, and an empty catalog simply yields an empty
//! result. Five sub-scores in [0, 1] combine into a weighted final score:
//!
//! | Sub-score | Weight |
//! |-----------|--------|
//! | profile match | 0.30 |
//! | admission probability | 0.25 |
//! | region match | 0.15 |
//! | financial fit | 0.15 |
//! | university rating | 0.15 |

use serde::Serialize;

use crate::catalog::{Faculty, University, UNIVERSITIES};
use crate::direction::Direction;
use crate::profile::StudentProfile;

/// Maximum achievable score per trait; normalizes the profile match.
const TRAIT_MAX: f32 = 51.0;

const WEIGHT_PROFILE: f32 = 0.30;
const WEIGHT_PROBABILITY: f32 = 0.25;
const WEIGHT_REGION: f32 = 0.15;
const WEIGHT_FINANCIAL: f32 = 0.15;
const WEIGHT_RATING: f32 = 0.15;

/// How many recommendations to return.
const TOP_N: usize = 5;

/// Everything the engine needs about the student.
#[derive(Debug, Clone)]
pub struct StudentInput {
    pub profile: StudentProfile,
    /// Aggregate admission-exam total.
    pub admission_total: u32,
    /// Yearly tuition budget, rubles. Non-positive means budget places only.
    pub budget: i64,
    pub preferred_city: Option<String>,
    pub can_relocate: bool,
}

/// One ranked faculty/university pair with its full score breakdown.
///
/// Derived, never persisted, never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct FacultyRecommendation {
    pub university: &'static University,
    pub faculty: &'static Faculty,
    pub final_score: f32,
    pub profile_match: f32,
    pub probability: f32,
    pub region_match: f32,
    pub financial_fit: f32,
    pub university_rating: f32,
    pub is_budget: bool,
}

/// Sum of the profile's traits relevant to the direction, normalized by
/// the per-trait maximum and capped at 1.0.
fn profile_match(profile: &StudentProfile, direction: Direction) -> f32 {
    let traits = direction.relevant_traits();
    let max_possible = traits.len() as f32 * TRAIT_MAX;
    let score: u32 = traits.iter().map(|&k| profile.get(k)).sum();
    (score as f32 / max_possible).min(1.0)
}

fn admission_probability(admission_total: u32, target_score: u32) -> f32 {
    (admission_total as f32 / target_score as f32).min(1.0)
}

/// 0.7 with no preference, 1.0 on a match, 0.5 when relocation is an
/// option, 0.2 otherwise.
fn region_match(city: &str, preferred_city: Option<&str>, can_relocate: bool) -> f32 {
    match preferred_city {
        None => 0.7,
        Some(preferred) if preferred == city => 1.0,
        Some(_) if can_relocate => 0.5,
        Some(_) => 0.2,
    }
}

/// 1.0 for a budget place; otherwise how much of the fee the budget
/// covers. A non-positive budget clamps to 0.0 rather than erroring.
fn financial_fit(fee: u32, budget: i64, is_budget: bool) -> f32 {
    if is_budget {
        return 1.0;
    }
    if budget <= 0 {
        return 0.0;
    }
    (budget as f32 / fee as f32).min(1.0)
}

fn score_pair(input: &StudentInput, uni: &University, fac: &Faculty) -> (f32, f32, f32, f32, f32, bool) {
    let is_budget = input.admission_total >= fac.score_budget;
    let target_score = if is_budget { fac.score_budget } else { fac.score_paid };

    let profile = profile_match(&input.profile, fac.direction);
    let probability = admission_probability(input.admission_total, target_score);
    let region = region_match(uni.city, input.preferred_city.as_deref(), input.can_relocate);
    let financial = financial_fit(fac.fee_paid, input.budget, is_budget);
    let rating = uni.ranking as f32 / 100.0;

    (profile, probability, region, financial, rating, is_budget)
}

/// Rank every faculty in the catalog and return the top 5.
///
/// Sorted descending by final score; the sort is stable, so catalog
/// enumeration order breaks ties.
pub fn get_recommendations(input: &StudentInput) -> Vec<FacultyRecommendation> {
    get_recommendations_in(input, UNIVERSITIES)
}

/// Same as [`get_recommendations`] over an explicit catalog slice.
pub fn get_recommendations_in(
    input: &StudentInput,
    catalog: &'static [University],
) -> Vec<FacultyRecommendation> {
    let mut results = Vec::new();

    for uni in catalog {
        for fac in uni.faculties {
            let (profile, probability, region, financial, rating, is_budget) =
                score_pair(input, uni, fac);

            let final_score = profile * WEIGHT_PROFILE
                + probability * WEIGHT_PROBABILITY
                + region * WEIGHT_REGION
                + financial * WEIGHT_FINANCIAL
                + rating * WEIGHT_RATING;

            results.push(FacultyRecommendation {
                university: uni,
                faculty: fac,
                final_score,
                profile_match: profile,
                probability,
                region_match: region,
                financial_fit: financial,
                university_rating: rating,
                is_budget,
            });
        }
    }

    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(TOP_N);
    results
}

/// The direction with the highest weighted trait affinity.
/// Ties resolve to the earlier direction in [`Direction::ALL`].
pub fn top_direction(profile: &StudentProfile) -> Direction {
    let mut best = Direction::ALL[0];
    let mut best_score = best.affinity(profile);
    for dir in Direction::ALL {
        let score = dir.affinity(profile);
        if score > best_score {
            best = dir;
            best_score = score;
        }
    }
    best
}
