use crate::constants::AUDIO_ID;
use crate::dom;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start the page's background track. Must run inside the click handler so
/// the browser treats it as user-initiated.
pub fn start_music(document: &web::Document) {
    let audio: web::HtmlAudioElement = match dom::element_by_id(document, AUDIO_ID) {
        Ok(a) => a,
        Err(e) => {
            log::warn!("[audio] {:?}", e);
            return;
        }
    };
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::error!("[audio] playback rejected: {:?}", e);
            }
        }),
        Err(e) => log::error!("[audio] play error: {:?}", e),
    }
}
