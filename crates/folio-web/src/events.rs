use folio_core::{view_point, PointerField};
use glam::DVec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct PointerWiring {
    /// Element whose rendered rect defines the blob's coordinate space.
    pub surface: web::Element,
    pub pointer: Rc<RefCell<PointerField>>,
    pub extent: DVec2,
    pub origin: Instant,
}

/// Track pointer moves across the whole page, rescaled into the blob's
/// logical view space. Listening on the window keeps the blob reacting
/// while the pointer crosses overlaid text.
pub fn wire_pointer_tracking(w: PointerWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = w.surface.get_bounding_client_rect();
        let css = DVec2::new(
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
        );
        let size = DVec2::new(rect.width(), rect.height());
        let pos = view_point(css, size, w.extent);
        w.pointer.borrow_mut().record(pos, crate::elapsed_ms(w.origin));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ =
            wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
