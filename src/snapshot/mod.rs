//! Saving and restoring built automata.
//!
//! A snapshot wraps an automaton with a format version, an identifier and
//! a creation time. JSON is the readable format; bincode is the compact
//! one. Loading checks the version first and then the automaton's
//! structural invariants, so a hand-edited snapshot cannot produce an
//! automaton that the mutation API could never have built.

use crate::core::Dfa;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton.
///
/// # Example
///
/// ```rust
/// use dfa_notation::Dfa;
/// use dfa_notation::snapshot::Snapshot;
///
/// let dfa = Dfa::from_description("States: a\nStart state: a\nAccept states: a");
/// let json = Snapshot::new(dfa).to_json().unwrap();
///
/// let restored = Snapshot::from_json(&json).unwrap();
/// assert!(restored.automaton.accepts(""));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When snapshot was created
    pub created_at: DateTime<Utc>,

    /// The automaton itself
    pub automaton: Dfa,
}

impl Snapshot {
    /// Wrap `automaton` in a fresh snapshot.
    pub fn new(automaton: Dfa) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            automaton,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::Decode(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serialize to bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Deserialize from bincode and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::Decode(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        self.automaton
            .check_invariants()
            .map_err(|reason| SnapshotError::CorruptAutomaton {
                id: self.id.clone(),
                reason,
            })?;
        debug!(id = %self.id, states = self.automaton.state_count(), "loaded snapshot");
        Ok(())
    }
}
