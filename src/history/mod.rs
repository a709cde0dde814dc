//! Bounded history of generated passwords
//!
//! Every successful generation is recorded as an immutable entry; the log
//! keeps the 20 most recent entries, newest first, and persists as JSON
//! under a fixed key in a [`KeyValueStore`]. A single logical writer owns
//! the store, so there is no interior locking.

pub mod store;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generator::settings::PasswordSettings;

pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Characters used for the random id suffix
const ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the random id suffix
const ID_SUFFIX_LENGTH: usize = 4;

/// One recorded generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Time-derived unique id
    pub id: String,
    /// The generated password
    pub password: String,
    /// Creation time, epoch milliseconds
    pub timestamp: i64,
    /// Snapshot of the settings used
    pub settings: PasswordSettings,
}

impl HistoryEntry {
    /// Creation time as a UTC datetime
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Bounded, persisted log of generated passwords
#[derive(Debug)]
pub struct History<S: KeyValueStore> {
    store: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> History<S> {
    /// Open the history over `store`, loading any persisted entries.
    ///
    /// A payload that fails to decode is treated the same as an absent
    /// one: the history starts empty and the next write replaces it.
    /// Store failures still propagate.
    pub fn open(store: S) -> Result<Self> {
        let entries = match store.get(crate::HISTORY_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { store, entries })
    }

    /// Record a generated password, evicting the oldest entry once the
    /// log holds [`HISTORY_LIMIT`](crate::HISTORY_LIMIT) entries. Returns
    /// the new entry.
    pub fn record(&mut self, password: &str, settings: &PasswordSettings) -> Result<&HistoryEntry> {
        let timestamp = Utc::now().timestamp_millis();
        let entry = HistoryEntry {
            id: generate_entry_id(timestamp),
            password: password.to_string(),
            timestamp,
            settings: settings.clone(),
        };

        self.entries.insert(0, entry);
        self.entries.truncate(crate::HISTORY_LIMIT);
        self.persist()?;
        Ok(&self.entries[0])
    }

    /// Drop all entries and remove the persisted payload
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.remove(crate::HISTORY_KEY)
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the history and hand the store back
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(crate::HISTORY_KEY, &raw)
    }
}

/// Build an entry id from the creation time plus a short random suffix,
/// so entries created within the same millisecond stay distinct
fn generate_entry_id(timestamp: i64) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ID_CHARS.len());
            ID_CHARS[idx] as char
        })
        .collect();
    format!("{timestamp}-{suffix}")
}
