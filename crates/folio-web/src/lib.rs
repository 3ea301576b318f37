#![cfg(target_arch = "wasm32")]
use folio_core::{BlobConfig, BlobField, PointerField};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod carousel;
mod dom;
mod events;
mod frame;
mod nav;
mod tabs;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // One clock for the blob drift, pointer idle tracking and the carousel
    // timing windows.
    let origin = Instant::now();

    // Each page feature wires itself independently; a missing section only
    // disables that feature.
    init_blob(&document, origin);
    carousel::init(&document, origin);
    nav::init(&document);
    tabs::init(&document);
    Ok(())
}

fn init_blob(document: &web::Document, origin: Instant) {
    let (Some(surface), Some(path)) = (
        document.get_element_by_id("svg"),
        document.get_element_by_id("blob"),
    ) else {
        log::info!("[blob] no #svg/#blob pair on this page; skipping");
        return;
    };

    let field = BlobField::new(BlobConfig::default());
    let pointer = Rc::new(RefCell::new(PointerField::default()));
    events::wire_pointer_tracking(events::PointerWiring {
        surface,
        pointer: pointer.clone(),
        extent: field.config().view_extent,
        origin,
    });

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        pointer,
        path,
        origin,
        positions: Vec::new(),
    }));
    frame::start_loop(ctx);
    log::info!("[blob] animation loop running");
}

/// Milliseconds on the shared clock since startup.
pub(crate) fn elapsed_ms(origin: Instant) -> f64 {
    origin.elapsed().as_secs_f64() * 1000.0
}
