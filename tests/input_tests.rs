// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn enter_sends_but_shift_enter_does_not() {
    assert!(is_send_key("Enter", false));
    assert!(!is_send_key("Enter", true));
    assert!(!is_send_key("a", false));
    assert!(!is_send_key("NumpadEnter", false));
}

#[test]
fn clamp_input_keeps_short_text() {
    assert_eq!(clamp_input("hello", 140), "hello");
    assert_eq!(clamp_input("", 140), "");
}

#[test]
fn clamp_input_cuts_at_char_count() {
    let long = "x".repeat(200);
    assert_eq!(clamp_input(&long, 140).len(), 140);
    assert_eq!(clamp_input("abcdef", 3), "abc");
}

#[test]
fn clamp_input_respects_multibyte_chars() {
    let text = "é".repeat(10);
    let cut = clamp_input(&text, 4);
    assert_eq!(cut.chars().count(), 4);
    assert_eq!(cut, "éééé");
}
