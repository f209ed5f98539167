//! Background music: `<audio>` element plus its toggle button.

use crate::constants::{AUDIO_ID, MUSIC_PLAYING_CLASS, MUSIC_TOGGLE_ID};
use crate::dom::{self, Listener};
use anyhow::Context;
use heart_core::{AudioCommand, AudioToggle};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type SharedAudio = Rc<RefCell<AudioController>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayOrigin {
    Autoplay,
    User,
}

pub struct AudioController {
    me: Weak<RefCell<AudioController>>,
    document: web::Document,
    audio: web::HtmlAudioElement,
    button: web::HtmlElement,
    toggle: AudioToggle,
    listeners: Vec<Listener>,
}

impl AudioController {
    /// Fails if either the audio element or the toggle button is missing.
    pub fn new(document: &web::Document) -> anyhow::Result<SharedAudio> {
        let audio: web::HtmlAudioElement =
            dom::by_id(document, AUDIO_ID).context("background music")?;
        let button: web::HtmlElement =
            dom::by_id(document, MUSIC_TOGGLE_ID).context("music toggle")?;

        let controller = Rc::new_cyclic(|me| {
            RefCell::new(AudioController {
                me: me.clone(),
                document: document.clone(),
                audio,
                button,
                toggle: AudioToggle::new(),
                listeners: Vec::new(),
            })
        });

        {
            let mut c = controller.borrow_mut();
            let weak = Rc::downgrade(&controller);
            let click = Listener::new(&c.button, "click", move |_| {
                if let Some(c) = weak.upgrade() {
                    let mut c = c.borrow_mut();
                    if let Some(cmd) = c.toggle.on_toggle_click() {
                        c.run(cmd, PlayOrigin::User);
                    }
                }
            })?;
            c.listeners.push(click);
            c.render();
            let cmd = c.toggle.begin_autoplay();
            c.run(cmd, PlayOrigin::Autoplay);
        }
        Ok(controller)
    }

    fn run(&mut self, cmd: AudioCommand, origin: PlayOrigin) {
        match cmd {
            AudioCommand::Pause => {
                _ = self.audio.pause();
                self.render();
            }
            AudioCommand::Play => match self.audio.play() {
                Ok(promise) => {
                    let me = self.me.clone();
                    spawn_local(async move {
                        let outcome = JsFuture::from(promise).await;
                        if let Err(e) = &outcome {
                            log::warn!("[audio] play failed ({:?}): {:?}", origin, e);
                        }
                        if let Some(c) = me.upgrade() {
                            c.borrow_mut().finish_play(origin, outcome.is_ok());
                        }
                    });
                }
                Err(e) => {
                    log::warn!("[audio] play threw ({:?}): {:?}", origin, e);
                    self.finish_play(origin, false);
                }
            },
        }
    }

    fn finish_play(&mut self, origin: PlayOrigin, ok: bool) {
        match origin {
            PlayOrigin::Autoplay => {
                self.toggle.on_autoplay_result(ok);
                if self.toggle.is_first_interaction_armed() {
                    log::info!("[audio] autoplay blocked; waiting for first click");
                    self.arm_first_interaction();
                }
            }
            PlayOrigin::User => self.toggle.on_play_result(ok),
        }
        self.render();
    }

    fn arm_first_interaction(&mut self) {
        let weak = self.me.clone();
        match Listener::once(&self.document, "click", move |_| {
            if let Some(c) = weak.upgrade() {
                let mut c = c.borrow_mut();
                if let Some(cmd) = c.toggle.on_first_interaction() {
                    c.run(cmd, PlayOrigin::User);
                }
            }
        }) {
            Ok(listener) => self.listeners.push(listener),
            Err(e) => log::error!("[audio] first-click retry not armed: {e}"),
        }
    }

    fn render(&self) {
        self.button.set_text_content(Some(self.toggle.label()));
        _ = self
            .button
            .class_list()
            .toggle_with_force(MUSIC_PLAYING_CLASS, self.toggle.is_playing());
    }

    /// Page hidden: pause, keeping the toggle wired for a cache restore.
    pub fn suspend(&mut self) {
        let cmd = self.toggle.suspend();
        self.run(cmd, PlayOrigin::User);
    }
}
