//! Storage for the two persisted counters: level and coin total.
//!
//! Each counter is read and written on its own. Missing or malformed values
//! fall back to level 1 and zero coins.

use crate::constants::PROGRESS_FILE_NAME;
use crate::problems::Level;
use crate::progression::PlayerProgress;
use crate::utils::persistence::{load_json_or_default, save_json, save_path};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Names of the persisted counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CounterKey {
    Level,
    Coins,
}

impl CounterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Coins => "coins",
        }
    }
}

/// Two named integers, independently readable and writable.
pub trait CounterStore {
    fn read(&self, key: CounterKey) -> Option<u64>;
    fn write(&mut self, key: CounterKey, value: u64) -> io::Result<()>;
}

/// In-memory store for tests and hosts without a file system.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<CounterKey, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for MemoryStore {
    fn read(&self, key: CounterKey) -> Option<u64> {
        self.values.get(&key).copied()
    }

    fn write(&mut self, key: CounterKey, value: u64) -> io::Result<()> {
        self.values.insert(key, value);
        Ok(())
    }
}

/// Counters kept in a small JSON object, e.g. `{"coins": 12, "level": 2}`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, u64>,
}

impl JsonFileStore {
    /// Opens the store at ~/.dragon-math/progress.json.
    pub fn new() -> io::Result<Self> {
        Ok(Self::open(save_path(PROGRESS_FILE_NAME)?))
    }

    /// Opens a store at an explicit path. A missing or unreadable file
    /// starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_json_or_default(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CounterStore for JsonFileStore {
    fn read(&self, key: CounterKey) -> Option<u64> {
        self.values.get(key.as_str()).copied()
    }

    fn write(&mut self, key: CounterKey, value: u64) -> io::Result<()> {
        self.values.insert(key.as_str().to_string(), value);
        save_json(&self.path, &self.values)
    }
}

/// Restores progress from a store. Streak and combo always start at zero.
pub fn load_progress(store: &impl CounterStore) -> PlayerProgress {
    let level = store
        .read(CounterKey::Level)
        .and_then(|value| u32::try_from(value).ok())
        .map(Level::from_number)
        .unwrap_or_default();
    let coins = store.read(CounterKey::Coins).unwrap_or(0);
    PlayerProgress::restored(level, coins)
}

/// Writes both counters.
pub fn save_progress(store: &mut impl CounterStore, progress: &PlayerProgress) -> io::Result<()> {
    store.write(CounterKey::Level, u64::from(progress.level.number()))?;
    store.write(CounterKey::Coins, progress.coins)
}
