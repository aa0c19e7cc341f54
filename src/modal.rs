use crate::constants::*;
use crate::dom;
use crate::style;
use gloo::events::EventListener;
use portfolio_core::{Project, ProjectModal};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        dom::set_class(&el, HIDDEN_CLASS, false);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        dom::set_class(&el, HIDDEN_CLASS, true);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Write the selected project's details into the modal's slots.
pub fn fill(document: &web::Document, project: &Project) {
    if let Some(el) = document.get_element_by_id(MODAL_TITLE_ID) {
        el.set_text_content(Some(project.title));
    }
    if let Some(el) = document.get_element_by_id(MODAL_DESCRIPTION_ID) {
        el.set_text_content(Some(project.long_description));
    }
    if let Some(el) = document.get_element_by_id(MODAL_IMAGE_ID) {
        _ = el.set_attribute("src", project.demo_image);
        _ = el.set_attribute("alt", project.title);
    }
    if let Some(el) = document.get_element_by_id(MODAL_FEATURES_ID) {
        el.set_inner_html(&style::feature_list_html(project.features));
    }
    if let Some(el) = document.get_element_by_id(MODAL_TECH_ID) {
        el.set_inner_html(&style::tech_badges_html(project.tech));
    }
    if let Some(el) = document.get_element_by_id(MODAL_GITHUB_ID) {
        _ = el.set_attribute("href", project.github_url);
    }
}

/// Whether the click started on (or inside) an `<a>` element.
fn target_in_link(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

/// Open the modal from `[data-project-id]` cards and close it from the
/// close button.
pub fn wire_project_modal(
    document: &web::Document,
    modal: Rc<RefCell<ProjectModal>>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for card in dom::query_all(document, &format!("[{}]", PROJECT_ID_ATTR)) {
        let Some(id) = card
            .get_attribute(PROJECT_ID_ATTR)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
        else {
            continue;
        };
        let doc = document.clone();
        let modal = modal.clone();
        listeners.push(EventListener::new(&card, "click", move |ev| {
            let on_link = target_in_link(ev);
            let opened = modal.borrow_mut().on_card_click(id, on_link);
            match opened {
                Some(project) => {
                    fill(&doc, project);
                    show(&doc);
                    log::info!("[modal] open project {}", id);
                }
                None if on_link => {}
                None => log::warn!("[modal] unknown project id {}", id),
            }
        }));
    }

    if let Some(close) = document.get_element_by_id(MODAL_CLOSE_ID) {
        let doc = document.clone();
        listeners.push(EventListener::new(&close, "click", move |_ev| {
            modal.borrow_mut().close();
            hide(&doc);
        }));
    }
    listeners
}
