//! Pure guidance logic for UniQuest.
//!
//! This crate contains all domain logic that is independent of any storage,
//! UI, or runtime. Functions take plain data and return results, making them
//! unit-testable and portable across the web shell, native tools, and the
//! headless harness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Static universities/islands/questionnaire/scenario data |
//! | [`direction`] | The six study directions and their trait affinities |
//! | [`energy`] | Per-direction energy accumulators and reveal thresholds |
//! | [`profile`] | Student trait profile, additive deltas, percentages |
//! | [`scoring`] | Multi-factor faculty recommendation engine |

pub mod catalog;
pub mod direction;
pub mod energy;
pub mod profile;
pub mod scoring;
