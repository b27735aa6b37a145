use crate::constants::{MESSAGE_ID, PLAY_BUTTON_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show_message(document: &web::Document) {
    dom::set_display(document, MESSAGE_ID, "block");
}

#[inline]
pub fn hide_message(document: &web::Document) {
    dom::set_display(document, MESSAGE_ID, "none");
}

#[inline]
pub fn hide_play_button(document: &web::Document) {
    dom::set_display(document, PLAY_BUTTON_ID, "none");
}

#[inline]
pub fn set_play_enabled(document: &web::Document, enabled: bool) {
    dom::set_button_enabled(document, PLAY_BUTTON_ID, enabled);
}
