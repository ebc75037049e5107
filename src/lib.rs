#![cfg(target_arch = "wasm32")]
use globe_core::{GlobeView, NotesStore, StoreConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod geolocation;
mod input;
mod overlay;
mod render;
mod scene;

const CANVAS_ID: &str = "globe-canvas";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Canvas internal pixel size tracks CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = StoreConfig::default();
    config.validate()?;
    let store = Rc::new(RefCell::new(NotesStore::from_entropy(config)));
    let view = Rc::new(RefCell::new(GlobeView::default()));

    geolocation::request_user_location(store.clone());
    events::wire_note_input(store.clone(), &document);
    events::wire_send_button(store.clone(), &document);
    events::wire_drag_handlers(events::DragWiring {
        canvas: canvas.clone(),
        view: view.clone(),
    });

    let last_revision = {
        let s = store.borrow();
        overlay::update_stats(&document, &s.stats());
        s.revision()
    };

    let gpu = frame::init_gpu(&canvas).await;
    let scene = scene::SceneBuilder::new(constants::GLOBE_DOT_COUNT);
    log::info!("[scene] globe dots={}", scene.dot_count());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        store,
        view,
        document,
        canvas,
        gpu,
        scene,
        instances: Vec::with_capacity(constants::MAX_INSTANCES),
        events: Vec::new(),
        last_revision,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
