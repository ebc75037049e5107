use crate::dom;
use globe_core::NoteStats;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Group digits with commas, e.g. `12345` -> `12,345`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Write the stats overlay and the "sent worldwide" counter.
pub fn update_stats(document: &web::Document, stats: &NoteStats) {
    let sent = format_count(stats.sent);
    dom::set_text(document, "stat-sent", &sent);
    dom::set_text(document, "stat-transit", &stats.in_transit.to_string());
    dom::set_text(document, "stat-delivered", &stats.delivered.to_string());
    dom::set_text(document, "sent-worldwide", &format!("{sent} sent worldwide"));

    if let Some(el) = document.get_element_by_id("stat-transit") {
        let cl = el.class_list();
        if stats.in_transit > 0 {
            _ = cl.add_1("active");
        } else {
            _ = cl.remove_1("active");
        }
    }
}

/// Toggle the send button between idle and "Sending".
pub fn set_sending(document: &web::Document, sending: bool) {
    if let Some(el) = document.get_element_by_id("send-btn") {
        if let Some(btn) = el.dyn_ref::<web::HtmlButtonElement>() {
            btn.set_disabled(sending);
        }
        el.set_text_content(Some(if sending { "Sending" } else { "Send" }));
        let cl = el.class_list();
        if sending {
            _ = cl.add_1("sending");
        } else {
            _ = cl.remove_1("sending");
        }
    }
}

pub fn is_sending(document: &web::Document) -> bool {
    document
        .get_element_by_id("send-btn")
        .map(|el| el.class_list().contains("sending"))
        .unwrap_or(false)
}
