//! The note lifecycle store.
//!
//! `NotesStore` is the single owner of note state. Front-ends hold it behind
//! whatever sharing they need (`Rc<RefCell<_>>` on the web) and only mutate it
//! through the methods here. Time is always passed in as milliseconds, so a
//! test can drive the store with a hand-rolled clock.

use crate::config::StoreConfig;
use crate::constants::{MARKER_SIZE_MIN, MARKER_SIZE_SPAN};
use crate::geo::GeoPoint;
use crate::note::{FlyingNote, LandedNote, Marker, NoteId, NoteStats, StoreEvent};
use crate::palette::random_arc_color;
use crate::schedule::LandingSchedule;
use fnv::FnvHasher;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

pub struct NotesStore<R: Rng = StdRng> {
    config: StoreConfig,
    rng: R,
    flying: Vec<FlyingNote>,
    landed: VecDeque<LandedNote>,
    user_location: Option<GeoPoint>,
    total_sent: u64,
    revision: u64,
    schedule: LandingSchedule,
}

impl NotesStore<StdRng> {
    pub fn from_entropy(config: StoreConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    pub fn seeded(config: StoreConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NotesStore<R> {
    pub fn new(config: StoreConfig, rng: R) -> Self {
        let landed = VecDeque::with_capacity(config.landed_capacity + 1);
        Self {
            config,
            rng,
            flying: Vec::new(),
            landed,
            user_location: None,
            total_sent: 0,
            revision: 0,
            schedule: LandingSchedule::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Mutable access for callers that need the same randomness source,
    /// e.g. to pick a default message before sending.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Launch a new note and schedule its landing.
    ///
    /// The origin is the last known user location, or a random point when
    /// none has been set. The destination is always random.
    pub fn send_note(&mut self, message: impl Into<String>, now_ms: f64) -> NoteId {
        let start = self
            .user_location
            .unwrap_or_else(|| GeoPoint::random(&mut self.rng));
        let end = GeoPoint::random(&mut self.rng);
        let color = random_arc_color(&mut self.rng);
        let id = self.fresh_id(now_ms);
        let landing = self
            .schedule
            .schedule(now_ms + self.config.flight_duration_ms, id.clone());

        log::debug!(
            "[store] send {} ({:.2},{:.2}) -> ({:.2},{:.2})",
            id,
            start.lat,
            start.lng,
            end.lat,
            end.lng
        );
        self.flying.push(FlyingNote {
            id: id.clone(),
            message: message.into(),
            start,
            end,
            created_ms: now_ms,
            color,
            landing,
        });
        self.total_sent += 1;
        self.bump();
        id
    }

    /// Move a flying note to the landed set. No-op when the id is not flying.
    pub fn land_note(&mut self, id: &NoteId, now_ms: f64) -> bool {
        self.land_inner(id, now_ms).is_some()
    }

    /// Drop a flying note without landing it and cancel its pending landing.
    pub fn remove_flying(&mut self, id: &NoteId) -> bool {
        let Some(idx) = self.flying.iter().position(|n| &n.id == id) else {
            return false;
        };
        let note = self.flying.remove(idx);
        self.schedule.cancel(note.landing);
        log::debug!("[store] removed {} before landing", note.id);
        self.bump();
        true
    }

    /// Only affects notes sent after this call.
    pub fn set_user_location(&mut self, lat: f64, lng: f64) {
        self.user_location = Some(GeoPoint::new(lat, lng));
        self.bump();
    }

    /// Fire every landing timer due at or before `now_ms`, in due order.
    pub fn advance(&mut self, now_ms: f64, out: &mut Vec<StoreEvent>) {
        while let Some((_, id)) = self.schedule.pop_due(now_ms) {
            if let Some((landed, evicted)) = self.land_inner(&id, now_ms) {
                out.push(StoreEvent::Landed(landed));
                out.extend(evicted.into_iter().map(StoreEvent::Evicted));
            }
        }
    }

    pub fn flying(&self) -> &[FlyingNote] {
        &self.flying
    }

    pub fn landed(&self) -> &VecDeque<LandedNote> {
        &self.landed
    }

    pub fn find_flying(&self, id: &NoteId) -> Option<&FlyingNote> {
        self.flying.iter().find(|n| &n.id == id)
    }

    pub fn total_sent(&self) -> u64 {
        self.total_sent
    }

    pub fn user_location(&self) -> Option<GeoPoint> {
        self.user_location
    }

    /// Increases on every mutation; views re-render when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pending_landings(&self) -> usize {
        self.schedule.len()
    }

    pub fn next_landing_ms(&mut self) -> Option<f64> {
        self.schedule.next_due()
    }

    pub fn stats(&self) -> NoteStats {
        NoteStats {
            sent: self.total_sent,
            in_transit: self.flying.len(),
            delivered: self.landed.len(),
        }
    }

    /// Flight progress in [0, 1].
    pub fn flight_progress(&self, note: &FlyingNote, now_ms: f64) -> f32 {
        ((now_ms - note.created_ms) / self.config.flight_duration_ms).clamp(0.0, 1.0) as f32
    }

    /// The most recent landed notes as globe markers, oldest first.
    pub fn markers(&self) -> Vec<Marker> {
        let skip = self.landed.len().saturating_sub(self.config.marker_limit);
        self.landed
            .iter()
            .skip(skip)
            .map(|n| Marker {
                location: n.location(),
                size: marker_size(&n.id),
            })
            .collect()
    }

    fn land_inner(&mut self, id: &NoteId, now_ms: f64) -> Option<(LandedNote, Vec<NoteId>)> {
        let idx = self.flying.iter().position(|n| &n.id == id)?;
        let note = self.flying.remove(idx);
        self.schedule.cancel(note.landing);
        let landed = LandedNote::from_flying(&note, now_ms);
        log::debug!(
            "[store] landed {} at ({:.2},{:.2})",
            landed.id,
            landed.lat,
            landed.lng
        );
        self.landed.push_back(landed.clone());
        let mut evicted = Vec::new();
        while self.landed.len() > self.config.landed_capacity {
            if let Some(old) = self.landed.pop_front() {
                log::trace!("[store] evicted {}", old.id);
                evicted.push(old.id);
            }
        }
        self.bump();
        Some((landed, evicted))
    }

    fn fresh_id(&mut self, now_ms: f64) -> NoteId {
        loop {
            let id = NoteId::generate(now_ms, &mut self.rng);
            let taken = self.flying.iter().any(|n| n.id == id)
                || self.landed.iter().any(|n| n.id == id);
            if !taken {
                return id;
            }
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Stable per-note marker size so markers do not flicker between frames.
pub fn marker_size(id: &NoteId) -> f32 {
    let mut hasher = FnvHasher::default();
    id.hash(&mut hasher);
    let unit = (hasher.finish() % 10_000) as f32 / 10_000.0;
    MARKER_SIZE_MIN + MARKER_SIZE_SPAN * unit
}
