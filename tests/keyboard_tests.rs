// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

mod keymap {
    include!("../src/events/keymap.rs");
}

use keymap::*;

#[test]
fn space_and_enter_toggle_the_tree() {
    assert_eq!(action_for_key(" "), Some(KeyAction::ToggleState));
    assert_eq!(action_for_key("Enter"), Some(KeyAction::ToggleState));
}

#[test]
fn m_toggles_mute_in_either_case() {
    assert_eq!(action_for_key("m"), Some(KeyAction::ToggleMute));
    assert_eq!(action_for_key("M"), Some(KeyAction::ToggleMute));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["a", "Escape", "ArrowUp", "Shift", ""] {
        assert_eq!(action_for_key(key), None);
    }
}
