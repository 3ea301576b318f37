use std::rc::Rc;
use web_sys as web;

use crate::dom;

/// Tech-stack tab buttons reveal one category at a time. Buttons carry
/// `data-tab`, categories carry `data-category`; the first category starts
/// visible, the initially active button comes from the markup.
pub fn init(document: &web::Document) {
    let buttons = Rc::new(dom::query_all(document, ".tech-tab-btn"));
    let categories = Rc::new(dom::query_all(document, ".tech-category"));
    if buttons.is_empty() || categories.is_empty() {
        log::info!("[tabs] no tech tabs; skipping");
        return;
    }
    if let Some(first) = categories.first() {
        dom::set_active(first, true);
    }
    log::info!("[tabs] wired {} tab buttons", buttons.len());

    for button in buttons.iter() {
        let buttons = buttons.clone();
        let categories = categories.clone();
        let source = button.clone();
        dom::add_click_listener(button, move || {
            let Some(selected) = source.get_attribute("data-tab") else {
                return;
            };
            for b in buttons.iter() {
                dom::set_active(b, false);
            }
            dom::set_active(&source, true);
            for category in categories.iter() {
                let matches =
                    category.get_attribute("data-category").as_deref() == Some(selected.as_str());
                dom::set_active(category, matches);
            }
        });
    }
}
