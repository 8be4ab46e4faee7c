mod keyboard;
pub mod keymap;
pub mod orbit;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_orbit_controls;
