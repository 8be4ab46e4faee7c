use super::keymap::{action_for_key, KeyAction};
use crate::frame::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    if ev.repeat() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    // keep Space/Enter from also clicking a focused button
    ev.prevent_default();
    match action {
        KeyAction::ToggleState => crate::toggle_state(app),
        KeyAction::ToggleMute => crate::toggle_mute(app),
    }
}

pub fn wire_global_keydown(app: Rc<RefCell<App>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
