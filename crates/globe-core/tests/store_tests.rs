// Host-side integration tests for the note lifecycle store.
// Time is driven by passing explicit millisecond timestamps.

use globe_core::*;

fn make_store() -> NotesStore {
    NotesStore::seeded(StoreConfig::default(), 42)
}

fn land_all(store: &mut NotesStore, now_ms: f64) -> Vec<StoreEvent> {
    let mut events = Vec::new();
    store.advance(now_ms, &mut events);
    events
}

#[test]
fn hello_scenario_flies_then_lands_at_destination() {
    let mut store = make_store();
    let id = store.send_note("Hello", 0.0);

    assert_eq!(store.flying().len(), 1);
    assert_eq!(store.flying()[0].message, "Hello");
    assert_eq!(store.total_sent(), 1);
    let dest = store.flying()[0].end;

    let events = land_all(&mut store, FLIGHT_DURATION_MS);
    assert!(store.flying().is_empty());
    assert_eq!(store.landed().len(), 1);
    let landed = &store.landed()[0];
    assert_eq!(landed.id, id);
    assert_eq!(landed.message, "Hello");
    assert_eq!(landed.lat, dest.lat);
    assert_eq!(landed.lng, dest.lng);
    assert_eq!(events, vec![StoreEvent::Landed(landed.clone())]);
}

#[test]
fn total_sent_counts_every_send() {
    let mut store = make_store();
    for i in 0..75 {
        store.send_note(format!("note {i}"), i as f64 * 10.0);
        assert_eq!(store.total_sent(), i + 1);
    }
    land_all(&mut store, 1e9);
    assert_eq!(store.total_sent(), 75);
}

#[test]
fn notes_do_not_land_before_flight_duration() {
    let mut store = make_store();
    store.send_note("early", 1000.0);
    let events = land_all(&mut store, 1000.0 + FLIGHT_DURATION_MS - 1.0);
    assert!(events.is_empty());
    assert_eq!(store.flying().len(), 1);
    assert!(store.landed().is_empty());
}

#[test]
fn flying_and_landed_sets_stay_disjoint() {
    let mut store = make_store();
    for step in 0..40 {
        let now = step as f64 * 250.0;
        store.send_note("tick", now);
        land_all(&mut store, now);
        for f in store.flying() {
            assert!(
                store.landed().iter().all(|l| l.id != f.id),
                "{} is both flying and landed",
                f.id
            );
        }
        assert_eq!(
            store.flying().len() + store.landed().len(),
            store.total_sent() as usize
        );
    }
}

#[test]
fn landings_fire_in_due_order() {
    let mut store = make_store();
    let a = store.send_note("a", 0.0);
    let b = store.send_note("b", 500.0);
    let c = store.send_note("c", 500.0);
    let events = land_all(&mut store, 10_000.0);
    let order: Vec<NoteId> = events
        .into_iter()
        .filter_map(|e| match e {
            StoreEvent::Landed(n) => Some(n.id),
            StoreEvent::Evicted(_) => None,
        })
        .collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn landed_set_is_bounded_and_evicts_oldest() {
    let mut store = make_store();
    let mut ids = Vec::new();
    for i in 0..LANDED_CAPACITY {
        ids.push(store.send_note(format!("{i}"), 0.0));
    }
    land_all(&mut store, FLIGHT_DURATION_MS);
    assert_eq!(store.landed().len(), LANDED_CAPACITY);

    store.send_note("overflow", FLIGHT_DURATION_MS);
    let events = land_all(&mut store, 2.0 * FLIGHT_DURATION_MS);
    assert_eq!(store.landed().len(), LANDED_CAPACITY);
    assert!(events.contains(&StoreEvent::Evicted(ids[0].clone())));
    assert!(store.landed().iter().all(|n| n.id != ids[0]));
    assert_eq!(store.landed().back().map(|n| n.message.as_str()), Some("overflow"));
    assert_eq!(store.landed().front().map(|n| &n.id), Some(&ids[1]));
}

#[test]
fn land_note_is_idempotent() {
    let mut store = make_store();
    let id = store.send_note("twice", 0.0);
    assert!(store.land_note(&id, 10.0));
    assert!(!store.land_note(&id, 20.0));
    assert_eq!(store.landed().len(), 1);
    // The cancelled timer must not produce a second landing either.
    assert!(land_all(&mut store, 1e6).is_empty());
    assert_eq!(store.landed().len(), 1);
    assert_eq!(store.pending_landings(), 0);
}

#[test]
fn land_note_with_unknown_id_is_a_noop() {
    let mut store = make_store();
    store.send_note("real", 0.0);
    let rev = store.revision();
    assert!(!store.land_note(&NoteId::from("note-0-missing00"), 5.0));
    assert_eq!(store.flying().len(), 1);
    assert_eq!(store.revision(), rev);
}

#[test]
fn remove_flying_after_landing_leaves_landed_untouched() {
    let mut store = make_store();
    let id = store.send_note("landed first", 0.0);
    land_all(&mut store, FLIGHT_DURATION_MS);
    let before = store.landed().clone();
    assert!(!store.remove_flying(&id));
    assert_eq!(store.landed(), &before);
}

#[test]
fn remove_flying_cancels_the_pending_landing() {
    let mut store = make_store();
    let keep = store.send_note("keep", 0.0);
    let gone = store.send_note("gone", 0.0);
    let handle = store.find_flying(&gone).map(|n| n.landing());
    assert!(store.remove_flying(&gone));
    assert_eq!(store.pending_landings(), 1);

    let events = land_all(&mut store, FLIGHT_DURATION_MS);
    assert_eq!(events.len(), 1);
    assert_eq!(store.landed().len(), 1);
    assert_eq!(store.landed()[0].id, keep);
    assert!(handle.is_some());
    assert_eq!(store.total_sent(), 2);
}

#[test]
fn user_location_is_used_as_origin_for_later_sends_only() {
    let mut store = make_store();
    let first = store.send_note("before", 0.0);
    store.set_user_location(51.5, -0.12);
    let second = store.send_note("after", 1.0);

    let first_start = store.find_flying(&first).map(|n| n.start);
    let second_start = store.find_flying(&second).map(|n| n.start);
    assert_ne!(first_start, Some(GeoPoint::new(51.5, -0.12)));
    assert_eq!(second_start, Some(GeoPoint::new(51.5, -0.12)));
    assert_eq!(store.user_location(), Some(GeoPoint::new(51.5, -0.12)));
}

#[test]
fn random_endpoints_are_valid_coordinates() {
    let mut store = make_store();
    for i in 0..500 {
        store.send_note("coords", i as f64);
    }
    for n in store.flying() {
        assert!(n.start.is_valid() && n.end.is_valid());
        assert!(n.end.lat.abs() <= 80.0);
        assert!(ARC_COLORS.contains(&n.color.hex()));
    }
}

#[test]
fn note_ids_are_unique_and_well_formed() {
    let mut store = make_store();
    let ids: Vec<NoteId> = (0..200).map(|_| store.send_note("same ms", 1234.0)).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
    for id in &ids {
        let s = id.as_str();
        assert!(s.starts_with("note-1234-"), "unexpected id {s}");
        let suffix = &s["note-1234-".len()..];
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}

#[test]
fn stats_track_sent_transit_and_delivered() {
    let mut store = make_store();
    store.send_note("a", 0.0);
    store.send_note("b", 2000.0);
    assert_eq!(
        store.stats(),
        NoteStats {
            sent: 2,
            in_transit: 2,
            delivered: 0
        }
    );
    land_all(&mut store, FLIGHT_DURATION_MS);
    assert_eq!(
        store.stats(),
        NoteStats {
            sent: 2,
            in_transit: 1,
            delivered: 1
        }
    );
}

#[test]
fn flight_progress_is_clamped() {
    let mut store = make_store();
    let id = store.send_note("progress", 100.0);
    let note = store.find_flying(&id).cloned().expect("note is flying");
    assert_eq!(store.flight_progress(&note, 0.0), 0.0);
    assert!((store.flight_progress(&note, 100.0 + FLIGHT_DURATION_MS / 2.0) - 0.5).abs() < 1e-6);
    assert_eq!(store.flight_progress(&note, 1e9), 1.0);
}

#[test]
fn markers_cover_the_most_recent_landed_notes() {
    let mut store = make_store();
    for i in 0..(MARKER_LIMIT + 5) {
        store.send_note(format!("{i}"), i as f64);
    }
    land_all(&mut store, 1e6);
    let markers = store.markers();
    assert_eq!(markers.len(), MARKER_LIMIT);
    let newest = store.landed().back().map(|n| n.location());
    assert_eq!(markers.last().map(|m| m.location), newest);
    for (m, n) in markers.iter().zip(store.landed().iter().skip(5)) {
        assert_eq!(m.size, marker_size(&n.id));
        assert!(m.size >= MARKER_SIZE_MIN && m.size < MARKER_SIZE_MIN + MARKER_SIZE_SPAN);
    }
}

#[test]
fn revision_changes_on_every_mutation() {
    let mut store = make_store();
    let r0 = store.revision();
    let id = store.send_note("rev", 0.0);
    let r1 = store.revision();
    assert!(r1 > r0);
    store.set_user_location(0.0, 0.0);
    let r2 = store.revision();
    assert!(r2 > r1);
    store.land_note(&id, 1.0);
    assert!(store.revision() > r2);
}

#[test]
fn custom_config_changes_duration_and_capacity() {
    let config = StoreConfig {
        flight_duration_ms: 100.0,
        landed_capacity: 2,
        ..StoreConfig::default()
    };
    assert!(config.validate().is_ok());
    let mut store = NotesStore::seeded(config, 7);
    for i in 0..3 {
        store.send_note(format!("{i}"), 0.0);
    }
    assert_eq!(store.next_landing_ms(), Some(100.0));
    land_all(&mut store, 100.0);
    assert_eq!(store.landed().len(), 2);
    assert_eq!(store.landed()[0].message, "1");
}
