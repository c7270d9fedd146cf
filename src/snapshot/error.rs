//! Snapshot error types.

use thiserror::Error;

/// Why a snapshot could not be written or read back.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not encode snapshot: {0}")]
    Encode(String),

    #[error("could not decode snapshot: {0}")]
    Decode(String),

    /// Written by a newer or older format than this build reads
    #[error("snapshot format v{found} cannot be read, expected v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The stored automaton could not have been built through the
    /// mutation API, e.g. a dangling start state or a flag/accept-set
    /// mismatch.
    #[error("snapshot {id} holds a corrupt automaton: {reason}")]
    CorruptAutomaton { id: String, reason: String },
}
