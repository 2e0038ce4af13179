use crate::constants::MODAL_SHOW_CLASS;
use web_sys as web;

#[inline]
pub fn show(modal: &web::HtmlElement, focus: &web::HtmlElement) {
    _ = modal.class_list().add_1(MODAL_SHOW_CLASS);
    _ = modal.set_attribute("aria-hidden", "false");
    _ = focus.focus();
}

#[inline]
pub fn hide(modal: &web::HtmlElement, focus: &web::HtmlElement) {
    _ = modal.class_list().remove_1(MODAL_SHOW_CLASS);
    _ = modal.set_attribute("aria-hidden", "true");
    _ = focus.focus();
}
