use web_sys as web;

use crate::dom;

/// Project cards scroll smoothly to their detail section on click. Each
/// card names its target through `data-id`, matching `#p-detail-<id>`.
pub fn init(document: &web::Document) {
    let cards = dom::query_all(document, ".project-card");
    if cards.is_empty() {
        log::info!("[nav] no project cards; skipping");
        return;
    }
    log::info!("[nav] wired {} project cards", cards.len());
    for card in cards {
        let doc = document.clone();
        let source = card.clone();
        dom::add_click_listener(&card, move || {
            let Some(id) = source.get_attribute("data-id") else {
                return;
            };
            let Some(target) = doc.get_element_by_id(&format!("p-detail-{id}")) else {
                log::warn!("[nav] missing detail section p-detail-{id}");
                return;
            };
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Center);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}
