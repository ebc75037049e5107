use crate::input;
use globe_core::GlobeView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct DragWiring {
    pub canvas: web::HtmlCanvasElement,
    pub view: Rc<RefCell<GlobeView>>,
}

/// Horizontal drag on the canvas spins the globe.
pub fn wire_drag_handlers(w: DragWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    for event in ["pointerup", "pointerout", "pointercancel"] {
        wire_release(&w, event);
    }
}

fn set_grabbing(canvas: &web::HtmlCanvasElement, grabbing: bool) {
    let cl = canvas.class_list();
    if grabbing {
        _ = cl.add_1("grabbing");
    } else {
        _ = cl.remove_1("grabbing");
    }
}

fn wire_pointerdown(w: &DragWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.view.borrow_mut().begin_drag(pos.x);
        set_grabbing(&w.canvas, true);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &DragWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.view.borrow().is_dragging() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.view.borrow_mut().drag_to(pos.x);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(w: &DragWiring, event: &str) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if w.view.borrow().is_dragging() {
            w.view.borrow_mut().end_drag();
            set_grabbing(&w.canvas, false);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
