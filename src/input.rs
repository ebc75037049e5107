use glam::Vec2;
use web_sys as web;

/// Enter sends; Shift+Enter is left to the input.
#[inline]
pub fn is_send_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Cut the typed text to the input's `maxlength` so the box and the store agree.
#[inline]
pub fn clamp_input(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}

