use globe_core::{GeoPoint, NotesStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn read_f64(obj: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Pull `coords.latitude` / `coords.longitude` out of a GeolocationPosition.
pub fn position_to_point(position: &JsValue) -> Option<GeoPoint> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let point = GeoPoint::new(read_f64(&coords, "latitude")?, read_f64(&coords, "longitude")?);
    point.is_valid().then_some(point)
}

/// Ask the browser for the user's location once.
///
/// Denial, errors, an unreadable position or a missing geolocation API all
/// record the store's configured fallback instead.
pub fn request_user_location(store: Rc<RefCell<NotesStore>>) {
    let fallback = store.borrow().config().fallback_location;
    let geolocation = web::window().and_then(|w| w.navigator().geolocation().ok());
    let Some(geolocation) = geolocation else {
        log::info!("[geo] geolocation unavailable, using fallback");
        store.borrow_mut().set_user_location(fallback.lat, fallback.lng);
        return;
    };

    let store_ok = store.clone();
    let on_success = Closure::once(move |position: JsValue| {
        let point = position_to_point(&position).unwrap_or_else(|| {
            log::warn!("[geo] unreadable position, using fallback");
            fallback
        });
        log::info!("[geo] located at ({:.2},{:.2})", point.lat, point.lng);
        store_ok.borrow_mut().set_user_location(point.lat, point.lng);
    });
    let store_err = store.clone();
    let on_error = Closure::once(move |_err: JsValue| {
        log::info!("[geo] location denied, using fallback");
        store_err
            .borrow_mut()
            .set_user_location(fallback.lat, fallback.lng);
    });

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
    ) {
        log::warn!("[geo] request failed: {:?}", e);
        store.borrow_mut().set_user_location(fallback.lat, fallback.lng);
    }
    on_success.forget();
    on_error.forget();
}
