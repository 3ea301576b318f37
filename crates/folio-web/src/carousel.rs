//! DOM side of the experience carousel: measures the track, forwards wheel
//! events to the state machine and applies its decisions.

use folio_core::{Carousel, TrackMetrics, WheelAction, WheelInput, CAROUSEL_BREAKPOINT_PX};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub struct CarouselView {
    section: web::Element,
    track: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    state: RefCell<Carousel>,
    origin: Instant,
}

pub fn init(document: &web::Document, origin: Instant) {
    let Some(section) = document.get_element_by_id("experience") else {
        log::info!("[carousel] no #experience section; skipping");
        return;
    };
    let track = match document.query_selector("#experience .exp-list") {
        Ok(Some(el)) => match el.dyn_into::<web::HtmlElement>() {
            Ok(el) => el,
            Err(_) => return,
        },
        _ => {
            log::info!("[carousel] no .exp-list track; skipping");
            return;
        }
    };
    let cards: Vec<web::HtmlElement> = dom::query_all(document, "#experience .exp-item")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let Some(state) = Carousel::new(cards.len()) else {
        log::info!("[carousel] no cards; skipping");
        return;
    };
    log::info!("[carousel] wired {} cards", cards.len());

    let view = Rc::new(CarouselView {
        section,
        track,
        cards,
        state: RefCell::new(state),
        origin,
    });
    view.apply();
    wire_wheel(view.clone());
    wire_resize(view);
}

impl CarouselView {
    /// Sync transform and active classes with the state machine. Below the
    /// breakpoint the cards stack vertically and every card is lit.
    fn apply(&self) {
        let (viewport_w, _) = dom::viewport_size();
        if viewport_w < CAROUSEL_BREAKPOINT_PX {
            let _ = self.track.style().set_property("transform", "none");
            for card in &self.cards {
                dom::set_active(card, true);
            }
            return;
        }
        let index = self.state.borrow().current();
        let tx = self.measure(viewport_w).translate_x(index);
        let _ = self
            .track
            .style()
            .set_property("transform", &format!("translateX({tx:.2}px)"));
        for (i, card) in self.cards.iter().enumerate() {
            dom::set_active(card, i == index);
        }
    }

    fn measure(&self, viewport_w: f64) -> TrackMetrics {
        // The track itself carries the transform, so its own rect moves;
        // the parent's content edge is the stable reference.
        let track_left = self
            .track
            .parent_element()
            .map(|p| p.get_bounding_client_rect().left())
            .unwrap_or(0.0);
        let card_width = self
            .cards
            .first()
            .map(|c| c.offset_width() as f64)
            .unwrap_or(0.0);
        TrackMetrics {
            gap: dom::computed_gap(&self.track),
            card_width,
            track_left,
            viewport_width: viewport_w,
        }
    }
}

fn wire_wheel(view: Rc<CarouselView>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let rect = view.section.get_bounding_client_rect();
        let (viewport_w, viewport_h) = dom::viewport_size();
        let input = WheelInput {
            delta_y: ev.delta_y(),
            delta_x: ev.delta_x(),
            now_ms: crate::elapsed_ms(view.origin),
            section_top: rect.top(),
            section_bottom: rect.bottom(),
            viewport_width: viewport_w,
            viewport_height: viewport_h,
        };
        // Drop the state borrow before apply() takes its own
        let action = view.state.borrow_mut().on_wheel(input);
        match action {
            WheelAction::Pass => {}
            WheelAction::Suppress => ev.prevent_default(),
            WheelAction::Move { .. } => {
                ev.prevent_default();
                view.apply();
            }
        }
    }) as Box<dyn FnMut(_)>);
    // preventDefault only works on a non-passive wheel listener
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn wire_resize(view: Rc<CarouselView>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        view.state.borrow_mut().reclamp();
        view.apply();
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
