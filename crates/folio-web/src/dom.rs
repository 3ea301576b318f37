use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport size in CSS pixels, `(0, 0)` when unavailable.
#[inline]
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_active(el: &web::Element, active: bool) {
    let _ = el.class_list().toggle_with_force("active", active);
}

/// Computed `gap` of an element in pixels. Unparseable values (e.g.
/// `normal`) count as zero.
pub fn computed_gap(el: &web::Element) -> f64 {
    let Some(window) = web::window() else {
        return 0.0;
    };
    let Ok(Some(style)) = window.get_computed_style(el) else {
        return 0.0;
    };
    style
        .get_property_value("gap")
        .ok()
        .and_then(|v| v.trim().trim_end_matches("px").parse::<f64>().ok())
        .unwrap_or(0.0)
}
