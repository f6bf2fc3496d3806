//! Persistence collaborator: blob load/save for the four stored keys, with
//! corrupt or absent blobs falling back to seed data.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{ActionLog, FiscalSession};
use crate::store::TournamentStore;

/// Blob keys, matching the keys the browser edition of the scoreboard used.
pub mod keys {
    pub const TOURNAMENT_DATA: &str = "tournamentData";
    pub const ACTION_LOGS: &str = "actionLogs";
    pub const FISCAL_SESSIONS: &str = "fiscalSessions";
    pub const ADMIN_PASSWORD: &str = "adminPassword";
}

/// Shared secret provisioned on first run when no password blob exists.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// A key-value blob store. Load failures are reported as absence; the core
/// never treats a missing or unreadable blob as a hard error.
pub trait Storage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, blob: &str) -> io::Result<()>;
}

/// Directory of one file per key.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn save(&mut self, key: &str, blob: &str) -> io::Result<()> {
        fs::write(self.path(key), blob)
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn save(&mut self, key: &str, blob: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// Decode a stored blob, substituting `fallback` when the blob is absent or
/// malformed. Corruption is recovered locally, never surfaced.
fn load_or<T: DeserializeOwned>(storage: &dyn Storage, key: &str, fallback: impl FnOnce() -> T) -> T {
    match storage.load(key) {
        Some(blob) => match serde_json::from_str(&blob) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("discarding corrupt blob {:?}: {}", key, e);
                fallback()
            }
        },
        None => fallback(),
    }
}

fn save_json<T: Serialize>(storage: &mut dyn Storage, key: &str, value: &T) -> io::Result<()> {
    let blob = serde_json::to_string(value).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    storage.save(key, &blob)
}

/// Tournament data, or the canonical seed brackets.
pub fn load_store(storage: &dyn Storage) -> TournamentStore {
    load_or(storage, keys::TOURNAMENT_DATA, TournamentStore::new)
}

pub fn save_store(storage: &mut dyn Storage, store: &TournamentStore) -> io::Result<()> {
    save_json(storage, keys::TOURNAMENT_DATA, store)
}

/// Action log, most-recent-first, or empty.
pub fn load_logs(storage: &dyn Storage) -> Vec<ActionLog> {
    load_or(storage, keys::ACTION_LOGS, Vec::new)
}

pub fn save_logs(storage: &mut dyn Storage, logs: &[ActionLog]) -> io::Result<()> {
    save_json(storage, keys::ACTION_LOGS, &logs)
}

/// Fiscal sessions, most-recent-first, or empty.
pub fn load_sessions(storage: &dyn Storage) -> Vec<FiscalSession> {
    load_or(storage, keys::FISCAL_SESSIONS, Vec::new)
}

pub fn save_sessions(storage: &mut dyn Storage, sessions: &[FiscalSession]) -> io::Result<()> {
    save_json(storage, keys::FISCAL_SESSIONS, &sessions)
}

/// The shared secret, provisioning the default on first run. The password
/// blob is stored as the raw string, not JSON.
pub fn load_or_init_password(storage: &mut dyn Storage) -> String {
    match storage.load(keys::ADMIN_PASSWORD) {
        Some(password) => password,
        None => {
            if let Err(e) = storage.save(keys::ADMIN_PASSWORD, DEFAULT_ADMIN_PASSWORD) {
                log::warn!("could not provision default password: {}", e);
            }
            DEFAULT_ADMIN_PASSWORD.to_string()
        }
    }
}

pub fn save_password(storage: &mut dyn Storage, password: &str) -> io::Result<()> {
    storage.save(keys::ADMIN_PASSWORD, password)
}
