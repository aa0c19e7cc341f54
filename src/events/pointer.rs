use crate::style;
use gloo::events::EventListener;
use portfolio_core::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Move the follower element onto the pointer on every `pointermove`.
///
/// The follower element is optional; without it the position is still
/// tracked but nothing is drawn.
pub fn wire_cursor_follower(
    window: &web::Window,
    stage: Rc<RefCell<Stage>>,
    follower: Option<web::HtmlElement>,
) -> EventListener {
    EventListener::new(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let center = stage
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        if let (Some(c), Some(el)) = (center, follower.as_ref()) {
            _ = el
                .style()
                .set_property("transform", &style::follower_transform(c.x, c.y));
        }
    })
}
