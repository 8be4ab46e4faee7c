use super::orbit::{orbit_delta, zoom_factor, DragTracker};
use crate::frame::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Drag on the canvas to orbit, wheel to zoom.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<App>>) {
    let target: &web::EventTarget = canvas.as_ref();
    let drag = Rc::new(RefCell::new(DragTracker::default()));

    {
        let drag = drag.clone();
        let canvas = canvas.clone();
        listen(target, "pointerdown", move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            drag.borrow_mut()
                .begin(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
            _ = canvas.set_pointer_capture(ev.pointer_id());
        });
    }

    {
        let drag = drag.clone();
        let canvas = canvas.clone();
        let app = app.clone();
        listen(target, "pointermove", move |ev: web::PointerEvent| {
            let Some(delta) = drag.borrow_mut().move_to(
                ev.pointer_id(),
                ev.client_x() as f32,
                ev.client_y() as f32,
            ) else {
                return;
            };
            let (d_azimuth, d_elevation) = orbit_delta(delta, canvas.client_height() as f32);
            app.borrow_mut()
                .scene
                .camera_mut()
                .orbit_by(d_azimuth, d_elevation);
        });
    }

    for event in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let canvas = canvas.clone();
        listen(target, event, move |ev: web::PointerEvent| {
            drag.borrow_mut().end(ev.pointer_id());
            _ = canvas.release_pointer_capture(ev.pointer_id());
        });
    }

    listen(target, "wheel", move |ev: web::WheelEvent| {
        // keep the page from scrolling under the canvas
        ev.prevent_default();
        app.borrow_mut()
            .scene
            .camera_mut()
            .zoom_by(zoom_factor(ev.delta_y()));
    });
}
