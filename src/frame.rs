use crate::constants::{CAMERA_Z, MAX_INSTANCES};
use crate::dom;
use crate::overlay;
use crate::render::{self, FrameParams};
use crate::scene::{Instance, SceneBuilder};
use globe_core::{Camera, GlobeView, NotesStore, StoreEvent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SLOW_FRAME: Duration = Duration::from_millis(250);

pub struct FrameContext {
    pub store: Rc<RefCell<NotesStore>>,
    pub view: Rc<RefCell<GlobeView>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub scene: SceneBuilder,
    pub instances: Vec<Instance>,
    pub events: Vec<StoreEvent>,
    pub last_revision: u64,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        if dt > SLOW_FRAME {
            log::debug!("[frame] long gap {:?}", dt);
        }

        let now_ms = dom::now_ms();
        self.events.clear();
        self.store.borrow_mut().advance(now_ms, &mut self.events);
        for ev in &self.events {
            match ev {
                StoreEvent::Landed(n) => {
                    log::info!("[notes] landed {} at ({:.2},{:.2})", n.id, n.lat, n.lng)
                }
                StoreEvent::Evicted(id) => log::debug!("[notes] evicted {}", id),
            }
        }

        self.view.borrow_mut().tick();

        {
            let store = self.store.borrow();
            if store.revision() != self.last_revision {
                self.last_revision = store.revision();
                overlay::update_stats(&self.document, &store.stats());
            }
            self.scene.build(&*store, now_ms, &mut self.instances);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let camera = Camera::looking_at_origin(CAMERA_Z, g.aspect());
            let params = FrameParams {
                view_proj: camera.projection_matrix() * camera.view_matrix(),
                model: self.view.borrow().model_matrix(),
                eye: camera.eye,
            };
            if let Err(e) = g.render(&self.instances, &params) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, MAX_INSTANCES).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
