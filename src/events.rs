use crate::audio::SharedAudio;
use crate::constants::REPLAY_SELECTOR;
use crate::dom::{self, Listener};
use crate::hearts::SharedHearts;
use heart_core::{on_page_transition, LifecycleAction, PageTransition};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replay reloads the page; all state starts over.
pub fn wire_replay(window: &web::Window, document: &web::Document) -> Option<Listener> {
    let button: web::HtmlElement = match dom::query(document, REPLAY_SELECTOR) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("[replay] not wired: {e}");
            return None;
        }
    };
    let location = window.location();
    match Listener::new(&button, "click", move |_| {
        log::info!("[replay] reloading");
        if let Err(e) = location.reload() {
            log::error!("[replay] reload failed: {:?}", e);
        }
    }) {
        Ok(l) => Some(l),
        Err(e) => {
            log::error!("[replay] not wired: {e}");
            None
        }
    }
}

fn apply(action: LifecycleAction, hearts: &Option<SharedHearts>, audio: &Option<SharedAudio>) {
    match action {
        LifecycleAction::Suspend => {
            if let Some(h) = hearts {
                h.borrow_mut().stop();
            }
            if let Some(a) = audio {
                a.borrow_mut().suspend();
            }
        }
        LifecycleAction::Resume => {
            if let Some(h) = hearts {
                h.borrow_mut().start();
            }
        }
        LifecycleAction::None => {}
    }
}

fn persisted(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .map(|ev| ev.persisted())
        .unwrap_or(false)
}

/// Suspend on `pagehide`, resume on a back/forward-cache `pageshow`.
pub fn wire_page_lifecycle(
    window: &web::Window,
    hearts: Option<SharedHearts>,
    audio: Option<SharedAudio>,
) -> Vec<Listener> {
    let mut listeners = Vec::new();

    let (h, a) = (hearts.clone(), audio.clone());
    match Listener::new(window, "pagehide", move |ev| {
        let transition = PageTransition::Hide {
            persisted: persisted(&ev),
        };
        log::info!("[lifecycle] {:?}", transition);
        apply(on_page_transition(transition), &h, &a);
    }) {
        Ok(l) => listeners.push(l),
        Err(e) => log::warn!("[lifecycle] pagehide not wired: {e}"),
    }

    match Listener::new(window, "pageshow", move |ev| {
        let transition = PageTransition::Show {
            persisted: persisted(&ev),
        };
        log::info!("[lifecycle] {:?}", transition);
        apply(on_page_transition(transition), &hearts, &audio);
    }) {
        Ok(l) => listeners.push(l),
        Err(e) => log::warn!("[lifecycle] pageshow not wired: {e}"),
    }

    listeners
}
