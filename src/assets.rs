use crate::overlay;
use heart_core::{Director, ShowError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Loaded photos, indexed like the configured path list.
#[derive(Default)]
pub struct ImageSlots {
    slots: Vec<Option<web::HtmlImageElement>>,
}

impl ImageSlots {
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn get(&self, slot: usize) -> Option<&web::HtmlImageElement> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn set(&mut self, slot: usize, image: web::HtmlImageElement) {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = Some(image);
        }
    }
}

/// Start every image download at once, then wait on them in order. The first
/// failure stops the wait and leaves the play button disabled.
pub async fn load_all(
    document: web::Document,
    paths: Vec<String>,
    slots: Rc<RefCell<ImageSlots>>,
    director: Rc<RefCell<Director>>,
) -> anyhow::Result<()> {
    let mut pending = Vec::with_capacity(paths.len());
    for path in &paths {
        let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        img.set_src(path);
        let decoded = JsFuture::from(img.decode());
        pending.push((img, decoded));
    }

    for (slot, (img, decoded)) in pending.into_iter().enumerate() {
        if let Err(e) = decoded.await {
            director.borrow_mut().assets_mut().record_failed(slot);
            log::error!("[assets] {:?}", e);
            return Err(ShowError::AssetFailed {
                slot,
                path: paths[slot].clone(),
            }
            .into());
        }
        slots.borrow_mut().set(slot, img);
        let opened = director.borrow_mut().assets_mut().record_loaded(slot);
        log::info!("[assets] loaded {} ({}/{})", paths[slot], slot + 1, paths.len());
        if opened {
            overlay::set_play_enabled(&document, true);
        }
    }
    Ok(())
}

/// Warm the browser cache for an image that is not drawn on the canvas.
pub fn preload(path: &str) {
    let Ok(img) = web::HtmlImageElement::new() else {
        return;
    };
    img.set_src(path);
    let name = path.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(img.decode()).await {
            Ok(_) => log::info!("[assets] preloaded {}", name),
            Err(e) => log::warn!("[assets] preload {} failed: {:?}", name, e),
        }
    });
}
