#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tree_core::{ribbon, SceneController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod query;
mod render;

use constants::*;
use frame::App;

pub(crate) fn toggle_state(app: &Rc<RefCell<App>>) {
    let mut app = app.borrow_mut();
    let App { scene, deck, .. } = &mut *app;
    let state = scene.toggle_state(deck);
    if let Some(doc) = dom::window_document() {
        overlay::show_state(&doc, state);
    }
}

pub(crate) fn toggle_mute(app: &Rc<RefCell<App>>) {
    let mut app = app.borrow_mut();
    let App { scene, deck, .. } = &mut *app;
    let muted = scene.toggle_mute(deck);
    if let Some(doc) = dom::window_document() {
        overlay::show_muted(&doc, muted);
    }
}

fn wire_buttons(document: &web::Document, app: &Rc<RefCell<App>>) {
    let app_toggle = app.clone();
    dom::add_click_listener(document, TOGGLE_BUTTON_ID, move || toggle_state(&app_toggle));
    let app_mute = app.clone();
    dom::add_click_listener(document, MUTE_BUTTON_ID, move || toggle_mute(&app_mute));

    // page teardown releases the audio elements
    let app_hide = app.clone();
    dom::add_window_listener("pagehide", move || {
        let mut app = app_hide.borrow_mut();
        let App { scene, deck, .. } = &mut *app;
        scene.stop_audio(deck);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let config = query::config_from_pairs(&dom::query_pairs());
    let deck = audio::WebDeck::new(config.audio_mode)?;
    let scene = SceneController::new(config)?;
    let instances = render::SceneInstances::from_dataset(scene.dataset());
    let strip = ribbon::default_strip();
    let gpu = frame::init_gpu(&canvas, &instances, &strip).await;

    overlay::show_state(&document, scene.state());
    overlay::show_muted(&document, scene.is_muted());

    let app = Rc::new(RefCell::new(App {
        scene,
        deck,
        instances,
    }));
    wire_buttons(&document, &app);
    events::wire_global_keydown(app.clone());
    events::wire_orbit_controls(&canvas, app.clone());

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        gpu,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
