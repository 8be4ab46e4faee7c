use crate::audio::WebDeck;
use crate::render::{self, SceneInstances};
use glam::Mat4;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::scene::scene_matrix;
use tree_core::{Category, RibbonStrip, RibbonUniforms, SceneController, Sink, TrackId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything mutated by input handlers and the frame callback.
pub struct App {
    pub scene: SceneController,
    pub deck: WebDeck,
    pub instances: SceneInstances,
}

/// Routes scene output to the instance buffers and the audio elements.
struct FrameSink<'a> {
    instances: &'a mut SceneInstances,
    deck: &'a WebDeck,
}

impl Sink for FrameSink<'_> {
    fn set_transform(&mut self, category: Category, index: usize, transform: Mat4) {
        self.instances.set(category, index, transform);
    }

    fn set_volume(&mut self, track: TrackId, volume: f32) {
        self.deck.set_volume(track, volume);
    }

    fn set_ribbon(&mut self, uniforms: RibbonUniforms) {
        self.instances.ribbon = uniforms;
    }
}

pub struct FrameContext<'a> {
    pub app: Rc<RefCell<App>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        let mut app = self.app.borrow_mut();
        let App {
            scene,
            deck,
            instances,
        } = &mut *app;

        for (track, outcome) in deck.drain_outcomes() {
            scene.report_play(track, outcome);
        }
        scene.tick(elapsed, dt_sec, &mut FrameSink { instances, deck });

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let camera = scene.camera().camera(g.aspect());
            if let Err(e) = g.render(instances, &camera, scene_matrix(), elapsed) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    instances: &SceneInstances,
    strip: &RibbonStrip,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, instances, strip).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(closure) = tick_clone.borrow().as_ref() {
            request_frame(closure);
        }
    }) as Box<dyn FnMut()>));
    if let Some(closure) = tick.borrow().as_ref() {
        request_frame(closure);
    }
}
