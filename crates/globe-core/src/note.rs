//! Note records and their read-only projections.
//!
//! A note starts life as a [`FlyingNote`] and, once its flight completes,
//! is replaced by a [`LandedNote`] carrying the same id. The two types never
//! coexist for one id.

use crate::geo::GeoPoint;
use crate::palette::ArcColor;
use crate::schedule::TimerHandle;
use rand::Rng;
use std::fmt;

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// `note-<millis>-<9 base36 chars>`.
    pub fn generate<R: Rng + ?Sized>(now_ms: f64, rng: &mut R) -> Self {
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("note-{}-{}", now_ms.max(0.0) as u64, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct FlyingNote {
    pub id: NoteId,
    pub message: String,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub created_ms: f64,
    pub color: ArcColor,
    pub(crate) landing: TimerHandle,
}

impl FlyingNote {
    /// Handle of the pending landing timer.
    pub fn landing(&self) -> TimerHandle {
        self.landing
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LandedNote {
    pub id: NoteId,
    pub message: String,
    pub lat: f64,
    pub lng: f64,
    pub landed_ms: f64,
}

impl LandedNote {
    pub fn from_flying(note: &FlyingNote, landed_ms: f64) -> Self {
        Self {
            id: note.id.clone(),
            message: note.message.clone(),
            lat: note.end.lat,
            lng: note.end.lng,
            landed_ms,
        }
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Counters shown by the stats overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoteStats {
    pub sent: u64,
    pub in_transit: usize,
    pub delivered: usize,
}

/// A landed note as drawn on the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub location: GeoPoint,
    pub size: f32,
}

/// Lifecycle changes reported by [`crate::NotesStore::advance`].
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    Landed(LandedNote),
    Evicted(NoteId),
}
