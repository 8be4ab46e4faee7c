/// Page wiring and presentation constants for the web frontend.
///
/// Scene tunables live in `tree_core::constants`; everything here only
/// concerns the browser page and the GPU passes.
// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const TOGGLE_BUTTON_ID: &str = "toggle-state";
pub const MUTE_BUTTON_ID: &str = "toggle-mute";
pub const TITLE_ID: &str = "title";

// Audio sources, relative to the page
pub const MAIN_TRACK_URL: &str = "audio/christmas.mp3";
pub const CHAOS_TRACK_URL: &str = "audio/chaos.mp3";
pub const TREE_TRACK_URL: &str = "audio/tree.mp3";

// Button labels
pub const LABEL_ASSEMBLE: &str = "Assemble";
pub const LABEL_SCATTER: &str = "Scatter";
pub const LABEL_MUTE: &str = "Mute Audio";
pub const LABEL_UNMUTE: &str = "Unmute Audio";

// Background (linear RGB of #0a0f0a)
pub const CLEAR_COLOR: [f64; 3] = [0.003, 0.005, 0.003];

// Lighting
pub const KEY_LIGHT_DIR: [f32; 3] = [0.4, 0.8, 0.45]; // normalized in the shader
pub const AMBIENT_LIGHT: f32 = 0.35;
