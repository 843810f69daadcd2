use std::sync::{Arc, PoisonError, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

pub const DEFAULT_SONG_ID: &str = "15A01";
pub const LYRIC_WAITING: &str = "Waiting for start...";
pub const LYRIC_STARTED: &str = "Show Started!";
pub const LYRIC_PAUSED: &str = "Show Paused.";

/// The authoritative show clock polled by viewers.
/// Serialized with the camelCase keys the viewer page reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncState {
    /// Unix epoch milliseconds of the last start, 0 if never started.
    pub track_start_time: u64,
    pub is_playing: bool,
    pub current_lyric: String,
    pub song_id: String,
}

impl SyncState {
    pub fn initial(song_id: impl Into<String>) -> Self {
        SyncState {
            track_start_time: 0,
            is_playing: false,
            current_lyric: LYRIC_WAITING.to_string(),
            song_id: song_id.into(),
        }
    }
}

/// Shared handle to the one `SyncState` of a running server.
///
/// Cloning the handle shares the record. Writers build a complete replacement
/// record and swap it in under the write guard, so a reader sees either the
/// old record or the new one and never a mix of the two. Guards are held only
/// for the clone or the swap and never across an `.await`.
#[derive(Debug, Clone)]
pub struct SyncStore {
    inner: Arc<RwLock<SyncState>>,
}

impl SyncStore {
    pub fn new(song_id: impl Into<String>) -> Self {
        SyncStore {
            inner: Arc::new(RwLock::new(SyncState::initial(song_id))),
        }
    }

    /// Snapshot of all four fields.
    pub fn read(&self) -> SyncState {
        // Records are only ever replaced whole, so a poisoned guard still holds a
        // consistent one.
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Start (or restart) the show at the current wall-clock time.
    pub fn start(&self) -> SyncState {
        self.start_at(now_millis())
    }

    /// Start the show with an explicit epoch-millisecond timestamp.
    pub fn start_at(&self, started_ms: u64) -> SyncState {
        self.replace(|current| SyncState {
            track_start_time: started_ms,
            is_playing: true,
            current_lyric: LYRIC_STARTED.to_string(),
            song_id: current.song_id.clone(),
        })
    }

    /// Pause the show. The start time is kept so elapsed-at-pause stays derivable.
    pub fn stop(&self) -> SyncState {
        self.replace(|current| SyncState {
            track_start_time: current.track_start_time,
            is_playing: false,
            current_lyric: LYRIC_PAUSED.to_string(),
            song_id: current.song_id.clone(),
        })
    }

    fn replace<F>(&self, next: F) -> SyncState
    where
        F: FnOnce(&SyncState) -> SyncState,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let updated = next(&guard);
        *guard = updated.clone();
        updated
    }
}

impl Default for SyncStore {
    fn default() -> Self {
        Self::new(DEFAULT_SONG_ID)
    }
}

/// Wall-clock time as Unix epoch milliseconds. A clock set before 1970 reads as 0.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
