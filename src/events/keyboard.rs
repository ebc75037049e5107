use crate::constants::SEND_COOLDOWN_MS;
use crate::{dom, input, overlay};
use globe_core::{compose_message, NotesStore, MAX_MESSAGE_CHARS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const NOTE_INPUT_ID: &str = "note-input";
const SEND_BUTTON_ID: &str = "send-btn";

/// Send whatever is in the note input (or a default message) and clear it.
///
/// Ignored while the send button is cooling down from the previous send.
pub fn submit_note(store: &Rc<RefCell<NotesStore>>, document: &web::Document) {
    if overlay::is_sending(document) {
        return;
    }
    let field = dom::input_by_id(document, NOTE_INPUT_ID);
    let raw = field.as_ref().map(|f| f.value()).unwrap_or_default();
    let typed = input::clamp_input(&raw, MAX_MESSAGE_CHARS);

    let id = {
        let mut s = store.borrow_mut();
        let text = compose_message(typed, s.rng_mut());
        s.send_note(text, dom::now_ms())
    };
    log::info!("[send] {} launched", id);

    if let Some(f) = field {
        f.set_value("");
    }
    overlay::set_sending(document, true);
    schedule_send_reset(document);
}

fn schedule_send_reset(document: &web::Document) {
    let Some(window) = web::window() else {
        overlay::set_sending(document, false);
        return;
    };
    let doc = document.clone();
    let reset = Closure::once(move || overlay::set_sending(&doc, false));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            reset.as_ref().unchecked_ref(),
            SEND_COOLDOWN_MS,
        )
        .is_err()
    {
        overlay::set_sending(document, false);
    }
    reset.forget();
}

pub fn wire_note_input(store: Rc<RefCell<NotesStore>>, document: &web::Document) {
    let Some(field) = dom::input_by_id(document, NOTE_INPUT_ID) else {
        log::warn!("missing #{}", NOTE_INPUT_ID);
        return;
    };
    _ = field.set_attribute("maxlength", &MAX_MESSAGE_CHARS.to_string());
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if input::is_send_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit_note(&store, &doc);
        }
    }) as Box<dyn FnMut(_)>);
    _ = field.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_send_button(store: Rc<RefCell<NotesStore>>, document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, SEND_BUTTON_ID, move || {
        submit_note(&store, &doc);
    });
}
