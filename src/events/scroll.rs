use crate::dom::{self, DomLayout};
use crate::events::nav;
use gloo::events::EventListener;
use portfolio_core::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll_spy(
    window: &web::Window,
    document: web::Document,
    stage: Rc<RefCell<Stage>>,
) -> EventListener {
    let wnd = window.clone();
    EventListener::new(window, "scroll", move |_ev| {
        let offset = wnd.scroll_y().unwrap_or(0.0);
        let layout = DomLayout {
            document: &document,
        };
        let changed = stage.borrow_mut().on_scroll(offset, &layout);
        if let Some(section) = changed {
            nav::highlight_nav(&document, section);
        }
    })
}

/// Keep the canvas backing store and the field's viewport at window size.
pub fn wire_resize(
    window: &web::Window,
    stage: Rc<RefCell<Stage>>,
    canvas: Option<web::HtmlCanvasElement>,
) -> EventListener {
    EventListener::new(window, "resize", move |_ev| {
        let (w, h) = dom::sync_canvas_to_window(canvas.as_ref());
        stage.borrow_mut().on_resize(w, h);
        log::debug!("[resize] viewport {}x{}", w, h);
    })
}
