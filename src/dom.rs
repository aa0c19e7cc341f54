use portfolio_core::{Section, SectionBounds, SectionLayout};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Window inner size in CSS pixels. Falls back to zero, which the field
/// treats as a malformed viewport and skips.
pub fn window_size(window: &web::Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Size the canvas backing store to the window and return the new size.
pub fn sync_canvas_to_window(canvas: Option<&web::HtmlCanvasElement>) -> (f32, f32) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let (w, h) = window_size(&window);
    if let Some(canvas) = canvas {
        canvas.set_width(w.max(0.0) as u32);
        canvas.set_height(h.max(0.0) as u32);
    }
    (w, h)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// All elements matching `selector`, skipping non-element nodes.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn scroll_to_section(document: &web::Document, section: Section) {
    if let Some(el) = document.get_element_by_id(section.id()) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    } else {
        log::warn!("[nav] no element for section {}", section);
    }
}

/// Section geometry read from the live layout.
pub struct DomLayout<'a> {
    pub document: &'a web::Document,
}

impl SectionLayout for DomLayout<'_> {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let el = self.document.get_element_by_id(section.id())?;
        let el = el.dyn_ref::<web::HtmlElement>()?;
        Some(SectionBounds {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }
}
