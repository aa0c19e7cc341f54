#![cfg(target_arch = "wasm32")]
use crate::frame::{FrameContext, FrameLoop};
use gloo::events::EventListener;
use portfolio_core::{FieldParams, ProjectModal, Stage, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod modal;
mod render;
mod style;

/// Everything a mount owns. Dropping it releases every subscription.
struct Mounted {
    stage: Rc<RefCell<Stage>>,
    frame_loop: FrameLoop,
    listeners: Vec<EventListener>,
    root: Option<web::Element>,
}

impl Mounted {
    fn teardown(self) {
        let Mounted {
            stage,
            frame_loop,
            listeners,
            root,
        } = self;
        frame_loop.stop();
        drop(listeners);
        stage.borrow_mut().unmount();
        if let Some(root) = root {
            dom::set_class(&root, constants::VISIBLE_CLASS, false);
        }
        if let Some(document) = dom::window_document() {
            modal::hide(&document);
        }
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = mount_once() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Activate the animation layer. Calling it while mounted is a no-op.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_once().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Stop the frame loop and release all window/document subscriptions.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(mounted) = MOUNTED.with(|m| m.borrow_mut().take()) {
        mounted.teardown();
    }
}

fn mount_once() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        return Ok(());
    }
    let mounted = init()?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
    Ok(())
}

fn init() -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The page still works without the canvas; only the particles go away.
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID);
    let surface = match canvas.as_ref().map(render::Canvas2d::new) {
        Some(Ok(s)) => Some(s),
        Some(Err(e)) => {
            log::warn!("[mount] particle canvas unusable: {:?}", e);
            None
        }
        None => {
            log::warn!("[mount] missing #{}", constants::CANVAS_ID);
            None
        }
    };

    let (w, h) = dom::sync_canvas_to_window(canvas.as_ref());
    let stage = Rc::new(RefCell::new(Stage::mount(
        Viewport::new(w, h),
        FieldParams::default(),
        &mut rand::thread_rng(),
    )));
    log::info!(
        "[mount] viewport {}x{} particles={}",
        w,
        h,
        stage.borrow().field.particles().len()
    );

    let follower = dom::html_element_by_id(&document, constants::CURSOR_ID);
    let modal_state = Rc::new(RefCell::new(ProjectModal::default()));

    let mut listeners = vec![
        events::wire_cursor_follower(&window, stage.clone(), follower),
        events::wire_scroll_spy(&window, document.clone(), stage.clone()),
        events::wire_resize(&window, stage.clone(), canvas),
    ];
    listeners.extend(events::wire_nav_clicks(&document));
    listeners.extend(modal::wire_project_modal(&document, modal_state));

    events::label_nav(&document);
    events::highlight_nav(&document, stage.borrow().spy.active());

    let root = document.get_element_by_id(constants::ROOT_ID);
    if let Some(root) = root.as_ref() {
        dom::set_class(root, constants::VISIBLE_CLASS, true);
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(stage.clone(), surface)));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Mounted {
        stage,
        frame_loop,
        listeners,
        root,
    })
}
