use crate::constants::{ACTIVE_CLASS, NAV_SECTION_ATTR};
use crate::dom;
use gloo::events::EventListener;
use portfolio_core::Section;
use web_sys as web;

fn nav_selector() -> String {
    format!("[{}]", NAV_SECTION_ATTR)
}

fn nav_target(el: &web::Element) -> Option<Section> {
    let raw = el.get_attribute(NAV_SECTION_ATTR)?;
    match raw.parse::<Section>() {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("[nav] {}", e);
            None
        }
    }
}

/// Smooth-scroll to the target section when a nav element is clicked.
pub fn wire_nav_clicks(document: &web::Document) -> Vec<EventListener> {
    dom::query_all(document, &nav_selector())
        .into_iter()
        .filter_map(|el| {
            let section = nav_target(&el)?;
            let doc = document.clone();
            Some(EventListener::new(&el, "click", move |_ev| {
                dom::scroll_to_section(&doc, section);
            }))
        })
        .collect()
}

/// Write each nav bar entry's label.
pub fn label_nav(document: &web::Document) {
    for el in dom::query_all(document, &format!("nav {}", nav_selector())) {
        if let Some(section) = nav_target(&el) {
            el.set_text_content(Some(section.nav_label()));
        }
    }
}

/// Mark the nav bar entries pointing at `active` and clear the rest.
///
/// Only elements inside `<nav>` are highlighted; other scroll links such as
/// the hero call-to-action keep their styling.
pub fn highlight_nav(document: &web::Document, active: Section) {
    let selector = format!("nav {}", nav_selector());
    for el in dom::query_all(document, &selector) {
        let on = nav_target(&el) == Some(active);
        dom::set_class(&el, ACTIVE_CLASS, on);
    }
}
