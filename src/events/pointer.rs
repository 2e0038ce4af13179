use crate::core::{Activation, ActivationOutcome};
use crate::dom;
use crate::frame::App;
use glam::Vec2;
use web_sys as web;

pub fn wire_pointer_handlers(app: &App) {
    wire_pointermove(app);
    wire_dodger_presses(app);
    wire_confirm(app);
    wire_modal_buttons(app);
    wire_resize(app);
}

#[inline]
fn mouse_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn touch_point(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn pointer_near(app: &App, client: Vec2) {
    if !app.session.borrow().dodger().is_active() {
        return;
    }
    let stage = &app.stage;
    let layout = stage.layout();
    let local = stage.to_local(client);
    let dodged = app.session.borrow_mut().pointer_moved(local, &layout);
    if let Some(d) = dodged {
        log::debug!("[dodge] #{} -> ({:.0},{:.0})", d.move_count, d.to.x, d.to.y);
        app.flush();
    }
}

fn wire_pointermove(app: &App) {
    let document: &web::EventTarget = &app.stage.document;

    let a = app.clone();
    dom::add_listener::<web::MouseEvent>(document, "mousemove", true, move |ev| {
        pointer_near(&a, mouse_point(&ev));
    });

    let a = app.clone();
    dom::add_listener::<web::TouchEvent>(document, "touchmove", true, move |ev| {
        if let Some(p) = touch_point(&ev) {
            pointer_near(&a, p);
        }
    });
}

/// Route a direct press on the dodger; cancels the default unless Held.
pub(crate) fn press_dodger(app: &App, ev: &web::Event, activation: Activation, client: Option<Vec2>) {
    let stage = &app.stage;
    let layout = stage.layout();
    let local = client.map(|c| stage.to_local(c));
    let outcome = app
        .session
        .borrow_mut()
        .activate_dodger(activation, local, &layout);
    if outcome.suppresses_default() {
        ev.prevent_default();
        ev.stop_propagation();
    }
    if let ActivationOutcome::Dodged(d) = outcome {
        log::debug!("[dodge] {:?} #{}", activation, d.move_count);
    }
    app.flush();
}

fn wire_dodger_presses(app: &App) {
    let dodger: &web::EventTarget = &app.stage.dodger;

    let a = app.clone();
    dom::add_listener::<web::TouchEvent>(dodger, "touchstart", false, move |ev| {
        press_dodger(&a, &ev, Activation::TouchStart, touch_point(&ev));
    });

    let a = app.clone();
    dom::add_listener::<web::MouseEvent>(dodger, "mousedown", false, move |ev| {
        if ev.button() == 0 {
            press_dodger(&a, &ev, Activation::PointerDown, Some(mouse_point(&ev)));
        }
    });

    let a = app.clone();
    dom::add_listener::<web::MouseEvent>(dodger, "click", false, move |ev| {
        // detail == 0: synthesized by Enter/Space, already handled on keydown
        if ev.detail() == 0 {
            if a.session.borrow().dodger().is_active() {
                ev.prevent_default();
                ev.stop_propagation();
            }
            return;
        }
        press_dodger(&a, &ev, Activation::Click, Some(mouse_point(&ev)));
    });
}

fn wire_confirm(app: &App) {
    let a = app.clone();
    dom::add_click_listener(&app.stage.confirm, move || {
        let spawned = a.session.borrow_mut().confirm(dom::viewport_size());
        log::info!("[confirm] {} particles", spawned);
        a.flush();
    });
}

fn wire_modal_buttons(app: &App) {
    let close = |a: &App| {
        if a.session.borrow_mut().close_celebration() {
            log::info!("[modal] closed");
        }
        a.flush();
    };

    let a = app.clone();
    dom::add_click_listener(&app.stage.modal_close, move || close(&a));
    if let Some(ok) = &app.stage.modal_ok {
        let a = app.clone();
        dom::add_click_listener(ok, move || close(&a));
    }
}

fn wire_resize(app: &App) {
    let Some(window) = web::window() else {
        return;
    };
    let a = app.clone();
    dom::add_listener::<web::Event>(&window, "resize", true, move |_| {
        let layout = a.stage.layout();
        let natural = a.stage.dodger_origin();
        a.session.borrow_mut().resized(natural, &layout);
        a.flush();
    });
}
