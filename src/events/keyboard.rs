use crate::core::Activation;
use crate::dom;
use crate::frame::App;
use web_sys as web;

// Enter/Space on the focused dodger count as explicit activation
pub fn wire_dodger_keys(app: &App) {
    let a = app.clone();
    let dodger: &web::EventTarget = &app.stage.dodger;
    dom::add_listener::<web::KeyboardEvent>(dodger, "keydown", false, move |ev| {
        if ev.repeat() {
            if a.session.borrow().dodger().is_active() && Activation::from_key(&ev.key()).is_some() {
                ev.prevent_default();
            }
            return;
        }
        if let Some(activation) = Activation::from_key(&ev.key()) {
            super::pointer::press_dodger(&a, &ev, activation, None);
        }
    });
}

// Escape closes the success overlay
pub fn wire_global_keydown(app: &App) {
    let a = app.clone();
    let document: &web::EventTarget = &app.stage.document;
    dom::add_listener::<web::KeyboardEvent>(document, "keydown", true, move |ev| {
        if ev.key() == "Escape" && a.session.borrow().celebration().is_open() {
            a.session.borrow_mut().close_celebration();
            log::info!("[modal] closed with Escape");
            a.flush();
        }
    });
}
