//! Persistence port and the progress store built on top of it.
//!
//! State lives in keyed JSON blobs behind the [`StoragePort`] trait, so
//! the core never touches ambient global storage. Reads that fail —
//! missing key, unreadable backend, corrupt JSON — fall back to defaults
//! and are logged, never surfaced. Writes are synchronous; a failed write
//! is logged at `warn` and swallowed, keeping every public operation
//! infallible.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use uniquest_logic::profile::StudentProfile;

use crate::progress::ProgressionState;

/// Blob key for the main progression record.
pub const PROGRESS_KEY: &str = "uniquest_archipelago";
/// Blob key for the completed questionnaire profile.
pub const PROFILE_KEY: &str = "uniquest_profile";
/// Blob key for the externally-read collected-faculties list.
pub const COLLECTED_KEY: &str = "uniquest_collected";

/// Injectable key-value storage seam.
///
/// `load` distinguishes a miss (`Ok(None)`) from a backend failure; the
/// store treats both the same way, but the distinction keeps backends
/// honest.
pub trait StoragePort {
    fn load(&self, key: &str) -> io::Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// In-memory backend for tests and the headless harness.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.blobs.remove(key);
        Ok(())
    }
}

/// File-backed backend: one `<key>.json` per blob under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoragePort for FileStore {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// The progress store: loads, persists, and resets the three blobs.
pub struct ProgressStore<P: StoragePort> {
    port: P,
}

impl<P: StoragePort> ProgressStore<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Load the progression record. Missing or corrupt data falls back
    /// to the documented defaults — never an error.
    pub fn load(&self) -> ProgressionState {
        load_json(&self.port, PROGRESS_KEY).unwrap_or_default()
    }

    /// Whether a progression record has ever been persisted. Sync entry
    /// points use this to no-op before the feature is initialized.
    pub fn progress_exists(&self) -> bool {
        matches!(self.port.load(PROGRESS_KEY), Ok(Some(_)))
    }

    /// Persist the progression record.
    pub fn save(&mut self, state: &ProgressionState) {
        save_json(&mut self.port, PROGRESS_KEY, state);
    }

    /// Apply a pure transform to the current record and persist the
    /// result. Reads the state at the moment of execution — callers must
    /// not capture a snapshot across a delay.
    pub fn mutate(&mut self, f: impl FnOnce(&ProgressionState) -> ProgressionState) -> ProgressionState {
        let next = f(&self.load());
        self.save(&next);
        next
    }

    /// Restore defaults and clear all persisted blobs.
    pub fn reset(&mut self) -> ProgressionState {
        for key in [PROGRESS_KEY, PROFILE_KEY, COLLECTED_KEY] {
            if let Err(err) = self.port.remove(key) {
                log::warn!("failed to clear {key}: {err}");
            }
        }
        ProgressionState::default()
    }

    /// The completed questionnaire profile, if one was persisted.
    pub fn load_profile(&self) -> Option<StudentProfile> {
        load_json(&self.port, PROFILE_KEY)
    }

    /// Persist the completed questionnaire profile.
    pub fn save_profile(&mut self, profile: &StudentProfile) {
        save_json(&mut self.port, PROFILE_KEY, profile);
    }

    /// The externally-read collected-faculties list.
    pub fn load_collected(&self) -> Vec<u32> {
        load_json(&self.port, COLLECTED_KEY).unwrap_or_default()
    }

    /// Overwrite the collected-faculties list.
    pub fn save_collected(&mut self, faculty_ids: &[u32]) {
        save_json(&mut self.port, COLLECTED_KEY, &faculty_ids);
    }
}

fn load_json<T: serde::de::DeserializeOwned>(port: &impl StoragePort, key: &str) -> Option<T> {
    let raw = match port.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("failed to read {key}, using defaults: {err}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("corrupt blob at {key}, using defaults: {err}");
            None
        }
    }
}

fn save_json<T: serde::Serialize>(port: &mut impl StoragePort, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(err) = port.save(key, &raw) {
                log::warn!("failed to persist {key}: {err}");
            }
        }
        Err(err) => log::warn!("failed to serialize {key}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Phase;

    #[test]
    fn missing_blob_loads_defaults() {
        let store = ProgressStore::new(MemoryStore::new());
        assert_eq!(store.load(), ProgressionState::default());
        assert!(!store.progress_exists());
    }

    #[test]
    fn corrupt_blob_loads_defaults() {
        let mut port = MemoryStore::new();
        port.save(PROGRESS_KEY, "{not json").unwrap();
        let store = ProgressStore::new(port);
        assert_eq!(store.load(), ProgressionState::default());
    }

    #[test]
    fn mutate_persists_the_transform() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.mutate(|s| s.begin_self_discovery());
        assert_eq!(store.load().phase, Phase::SelfDiscovery);
    }

    #[test]
    fn reset_clears_every_blob() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.save(&ProgressionState::default().begin_self_discovery());
        store.save_profile(&StudentProfile {
            technical: 5,
            ..Default::default()
        });
        store.save_collected(&[101, 102]);

        let state = store.reset();
        assert_eq!(state, ProgressionState::default());
        assert!(!store.progress_exists());
        assert!(store.load_profile().is_none());
        assert!(store.load_collected().is_empty());
    }

    #[test]
    fn profile_blob_round_trips() {
        let mut store = ProgressStore::new(MemoryStore::new());
        let profile = StudentProfile {
            analytical: 12,
            social: 3,
            ..Default::default()
        };
        store.save_profile(&profile);
        assert_eq!(store.load_profile(), Some(profile));
    }

    #[test]
    fn file_store_round_trips_and_tolerates_missing() {
        let dir = std::env::temp_dir().join(format!("uniquest-store-{}", std::process::id()));
        let mut port = FileStore::open(&dir).unwrap();
        assert_eq!(port.load("absent").unwrap(), None);
        port.save("blob", "{\"x\":1}").unwrap();
        assert_eq!(port.load("blob").unwrap().as_deref(), Some("{\"x\":1}"));
        port.remove("blob").unwrap();
        port.remove("blob").unwrap(); // second remove is a no-op
        assert_eq!(port.load("blob").unwrap(), None);
        let _ = fs::remove_dir_all(&dir);
    }
}
