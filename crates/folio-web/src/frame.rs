use folio_core::{spline, BlobField, PointerField};
use glam::DVec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: BlobField,
    pub pointer: Rc<RefCell<PointerField>>,
    /// The `<path id="blob">` element receiving a fresh `d` every frame.
    pub path: web::Element,
    pub origin: Instant,
    /// Scratch buffer reused across frames.
    pub positions: Vec<DVec2>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = crate::elapsed_ms(self.origin);
        let pointer = self.pointer.borrow().sample(now_ms);
        self.field.tick(now_ms, pointer);

        self.positions.clear();
        self.positions
            .extend(self.field.points().iter().map(|p| p.pos));
        let d = spline::closed_path(&self.positions);
        let _ = self.path.set_attribute("d", &d);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
