use crate::constants::{background_url, BACKGROUND_POSITION, BACKGROUND_SIZE};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut(web::Event) + 'static) {
    if let Some(w) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>
        );
        _ = w.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn set_display(document: &web::Document, id: &str, display: &str) {
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.style().set_property("display", display);
    }
}

pub fn set_button_enabled(document: &web::Document, id: &str, enabled: bool) {
    if let Some(btn) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlButtonElement>().ok())
    {
        btn.set_disabled(!enabled);
    }
}

pub fn set_body_background(document: &web::Document, path: &str) {
    let Some(body) = document.body() else {
        log::warn!("no <body> to set background on");
        return;
    };
    let style = body.style();
    _ = style.set_property("background-image", &background_url(path));
    _ = style.set_property("background-size", BACKGROUND_SIZE);
    _ = style.set_property("background-position", BACKGROUND_POSITION);
}
