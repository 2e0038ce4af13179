#![cfg(target_arch = "wasm32")]
use crate::core::{InteractionConfig, Session};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod stage;

use constants::{CARD_ENTER_CLASS, CONFIG_ATTR_PREFIX, CONFIRM_IDLE_CLASS, NAME_IDLE_CLASS};
use frame::{App, Clock, FrameContext};
use stage::Stage;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn load_config(card: &web::Element) -> InteractionConfig {
    let overrides = dom::data_attributes(card, CONFIG_ATTR_PREFIX);
    let config = InteractionConfig::default()
        .with_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    log::info!(
        "[config] dodge={}px move={}px max_moves={} persuasion={:?} celebration={:?}",
        config.dodge.dodge_distance,
        config.dodge.move_distance,
        config.dodge.max_moves,
        config.persuasion.trigger,
        config.celebration
    );
    config
}

fn play_entrance(stage: &Stage) {
    _ = stage.card.class_list().add_1(CARD_ENTER_CLASS);
    _ = stage.confirm.class_list().add_1(CONFIRM_IDLE_CLASS);
    if let Some(name) = &stage.name {
        _ = name.class_list().add_1(NAME_IDLE_CLASS);
    }
}

/// Rewind the dodger and the persuasion lines (exposed to page scripts).
#[wasm_bindgen]
pub fn reset_moves() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow().as_ref() {
            app.session.borrow_mut().reset();
            app.flush();
            log::info!("[dodge] reset");
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dodge-no starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = Rc::new(Stage::locate(&document)?);
    let config = load_config(&stage.card);
    let seed = config.seed.unwrap_or_else(rand::random);

    let origin: Vec2 = stage.dodger_origin();
    let session = Rc::new(RefCell::new(Session::new(config, origin, seed)));
    let app = App {
        session: session.clone(),
        stage: stage.clone(),
        clock: Clock::start(),
    };

    play_entrance(&stage);

    events::wire_pointer_handlers(&app);
    events::wire_dodger_keys(&app);
    events::wire_global_keydown(&app);

    let hearts = session.borrow_mut().ambient_hearts();
    let ambient = stage.spawn_ambient(hearts);
    log::info!("[init] {} background hearts", ambient.len());

    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    frame::start_loop(Rc::new(RefCell::new(FrameContext { app, ambient })));
    Ok(())
}
