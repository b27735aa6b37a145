#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use heart_core::{Director, ShowConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod constants;
mod dom;
mod frame;
mod overlay;
mod render;

// Canvas size comes from the element; the image list and caption may be
// overridden through data attributes.
fn config_from_canvas(canvas: &web::HtmlCanvasElement) -> ShowConfig {
    let mut config =
        ShowConfig::default().with_canvas_size(canvas.width() as f64, canvas.height() as f64);
    if let Some(list) = canvas.get_attribute(IMAGES_ATTR) {
        let paths = parse_image_list(&list);
        if !paths.is_empty() {
            config = config.with_image_paths(paths);
        }
    }
    if let Some(caption) = canvas.get_attribute(CAPTION_ATTR) {
        config.caption = caption;
    }
    config.seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    config
}

fn wire_play_button(document: &web::Document, director: &Rc<RefCell<Director>>) {
    let director = director.clone();
    let doc = document.clone();
    dom::add_click_listener(document, PLAY_BUTTON_ID, move || {
        let result = director.borrow_mut().play();
        match result {
            Ok(cues) => {
                audio::start_music(&doc);
                overlay::hide_play_button(&doc);
                for cue in cues {
                    frame::apply_cue(&doc, cue);
                }
            }
            Err(e) => log::warn!("[play] {}", e),
        }
    });
}

fn wire_teardown(director: &Rc<RefCell<Director>>, stopped: &Rc<Cell<bool>>) {
    let director = director.clone();
    let stopped = stopped.clone();
    dom::add_window_listener("pagehide", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if !should_teardown_on_pagehide(persisted) {
            log::info!("page cached for back/forward navigation; keeping show alive");
            return;
        }
        stopped.set(true);
        director.borrow_mut().teardown();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let config = config_from_canvas(&canvas);
    let paths = config.image_paths.clone();
    let director = Rc::new(RefCell::new(Director::new(config)?));

    overlay::set_play_enabled(&document, false);
    wire_play_button(&document, &director);

    let slots = Rc::new(RefCell::new(assets::ImageSlots::with_len(paths.len())));
    let stopped = Rc::new(Cell::new(false));
    wire_teardown(&director, &stopped);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        director: director.clone(),
        surface: render::CanvasSurface::new(&canvas, ctx, slots.clone()),
        document: document.clone(),
        stopped,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    assets::preload(MESSAGE_IMAGE);
    assets::load_all(document, paths, slots, director).await
}
