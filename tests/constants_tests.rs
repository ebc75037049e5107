// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use globe_core::MARKER_LIMIT;

#[test]
#[allow(clippy::assertions_on_constants)]
fn instance_capacity_covers_a_full_scene() {
    let full = GLOBE_DOT_COUNT + MARKER_LIMIT + MAX_DRAWN_FLIGHTS * (ARC_TRAIL_SEGMENTS + 1);
    assert!(MAX_INSTANCES >= full);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_outside_the_lifted_arcs() {
    assert!(CAMERA_Z > 1.0 + ARC_LIFT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sizes_and_glow_are_sane() {
    assert!(GLOBE_DOT_SIZE > 0.0 && GLOBE_DOT_SIZE < ARC_HEAD_SIZE);
    assert!(ARC_TRAIL_SIZE < ARC_HEAD_SIZE);
    assert!(MARKER_GLOW > 1.0 && ARC_HEAD_GLOW > 1.0);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_STRENGTH > 0.0);
    assert!(ARC_TRAIL_SEGMENTS >= 2);
}

#[test]
fn send_cooldown_is_one_second() {
    assert_eq!(SEND_COOLDOWN_MS, 1000);
}
