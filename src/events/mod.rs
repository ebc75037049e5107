pub mod keyboard;
pub mod pointer;

pub use keyboard::{submit_note, wire_note_input, wire_send_button};
pub use pointer::{wire_drag_handlers, DragWiring};
