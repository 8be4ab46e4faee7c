// Pure key mapping; the listener lives in `events/keyboard.rs`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleState,
    ToggleMute,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Enter" => Some(KeyAction::ToggleState),
        "m" | "M" => Some(KeyAction::ToggleMute),
        _ => None,
    }
}
