use crate::constants::CONFETTI_GLOBAL;
use heart_core::ConfettiBurst;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn options(burst: &ConfettiBurst) -> Result<Object, JsValue> {
    let origin = Object::new();
    Reflect::set(&origin, &"y".into(), &JsValue::from_f64(burst.origin_y as f64))?;
    let opts = Object::new();
    Reflect::set(
        &opts,
        &"particleCount".into(),
        &JsValue::from(burst.particle_count),
    )?;
    Reflect::set(
        &opts,
        &"spread".into(),
        &JsValue::from_f64(burst.spread_deg as f64),
    )?;
    Reflect::set(&opts, &"origin".into(), &origin)?;
    Ok(opts)
}

/// Fire `window.confetti(...)` if the page loaded it. Returns whether it ran.
pub fn burst(window: &web::Window, burst: &ConfettiBurst) -> bool {
    let Ok(value) = Reflect::get(window, &JsValue::from_str(CONFETTI_GLOBAL)) else {
        return false;
    };
    let Ok(func) = value.dyn_into::<Function>() else {
        log::debug!("[confetti] not available");
        return false;
    };
    let called = options(burst).and_then(|opts| func.call1(&JsValue::NULL, &opts));
    if let Err(e) = &called {
        log::warn!("[confetti] burst failed: {:?}", e);
    }
    called.is_ok()
}
