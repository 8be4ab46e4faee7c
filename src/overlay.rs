use crate::constants::*;
use tree_core::LogicalState;
use web_sys as web;

fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Reflect the logical state on the toggle button and the title.
pub fn show_state(document: &web::Document, state: LogicalState) {
    if let Some(el) = document.get_element_by_id(TOGGLE_BUTTON_ID) {
        el.set_text_content(Some(if state.is_assembled() {
            LABEL_SCATTER
        } else {
            LABEL_ASSEMBLE
        }));
        set_class(&el, "assembled", state.is_assembled());
    }
    if let Some(el) = document.get_element_by_id(TITLE_ID) {
        // the title only shows while the tree stands
        set_class(&el, "revealed", state.is_assembled());
        set_class(&el, "hidden", !state.is_assembled());
    }
}

pub fn show_muted(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(MUTE_BUTTON_ID) {
        _ = el.set_attribute("title", if muted { LABEL_UNMUTE } else { LABEL_MUTE });
        _ = el.set_attribute("aria-pressed", if muted { "true" } else { "false" });
        set_class(&el, "muted", muted);
    }
}
