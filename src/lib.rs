#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use heart_core::GreetingConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod audio;
mod confetti;
mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod hearts;
mod question;
mod render;

use audio::{AudioController, SharedAudio};
use dom::Listener;
use effects::{EffectRunner, SharedEffects};
use hearts::{HeartAnimation, SharedHearts};

/// Everything the page keeps alive between callbacks.
struct App {
    _hearts: Option<SharedHearts>,
    _audio: Option<SharedAudio>,
    _effects: SharedEffects,
    _listeners: Vec<Listener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        Listener::once(&document, "DOMContentLoaded", |_| boot())
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .forget();
    } else {
        boot();
    }
    Ok(())
}

fn boot() {
    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

fn init() -> anyhow::Result<App> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let cfg = GreetingConfig::default();
    cfg.validate().context("invalid config")?;

    let mut listeners = Vec::new();

    // A missing canvas or audio pair disables only that subsystem.
    let hearts = match HeartAnimation::new(&window, &document, &cfg) {
        Ok(h) => {
            h.borrow_mut().start();
            match hearts::wire_resize(&h) {
                Ok(l) => listeners.push(l),
                Err(e) => log::warn!("[hearts] resize not wired: {e:#}"),
            }
            Some(h)
        }
        Err(e) => {
            log::error!("[hearts] disabled: {e:#}");
            None
        }
    };

    let audio = match AudioController::new(&document) {
        Ok(a) => Some(a),
        Err(e) => {
            log::error!("[audio] disabled: {e:#}");
            None
        }
    };

    let effects = EffectRunner::start(&window, &document, &cfg);
    listeners.extend(events::wire_replay(&window, &document));
    listeners.extend(events::wire_page_lifecycle(
        &window,
        hearts.clone(),
        audio.clone(),
    ));

    log::info!(
        "ready (hearts: {}, music: {})",
        hearts.is_some(),
        audio.is_some()
    );
    Ok(App {
        _hearts: hearts,
        _audio: audio,
        _effects: effects,
        _listeners: listeners,
    })
}
