//! Persisted exploration progress for UniQuest.
//!
//! A single versioned state record drives the archipelago map: phases,
//! revealed islands, opened cities and faculties, mirrored profile scores,
//! and the one-shot guard keys that keep cross-feature contributions from
//! double-crediting. All mutations are pure old-state → new-state
//! transforms; persistence goes through an injectable [`store::StoragePort`].
//!
//! Execution is single-threaded and run-to-completion: every transform
//! reads the state at the moment it executes, and re-entrancy guards in
//! [`session`] absorb rapid repeated input before any scoring happens.

pub mod progress;
pub mod session;
pub mod store;
pub mod sync;
