//! Drives the `.effect-item` sequence on a single timeout slot, then hands
//! off to the question.

use crate::constants::{ANIMATED_CLASS, EFFECT_ITEM_SELECTOR};
use crate::dom::{self, TimeoutSlot};
use crate::question::{QuestionPage, SharedQuestion};
use heart_core::{EffectSequencer, EffectStep, GreetingConfig, QuestionConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedEffects = Rc<RefCell<EffectRunner>>;

pub struct EffectRunner {
    window: web::Window,
    document: web::Document,
    question_cfg: QuestionConfig,
    items: Vec<web::HtmlElement>,
    seq: EffectSequencer,
    timer: TimeoutSlot,
    // owns the page and its handlers
    question: Option<SharedQuestion>,
}

impl EffectRunner {
    pub fn start(
        window: &web::Window,
        document: &web::Document,
        cfg: &GreetingConfig,
    ) -> SharedEffects {
        let items = dom::query_all(document, EFFECT_ITEM_SELECTOR);
        if items.is_empty() {
            log::warn!("[effects] no `{EFFECT_ITEM_SELECTOR}` elements");
        } else {
            log::info!("[effects] {} effects queued", items.len());
        }
        let runner = Rc::new_cyclic(|me: &std::rc::Weak<RefCell<EffectRunner>>| {
            let me = me.clone();
            RefCell::new(EffectRunner {
                window: window.clone(),
                document: document.clone(),
                question_cfg: cfg.question,
                seq: EffectSequencer::new(items.len(), cfg.sequence),
                items,
                timer: TimeoutSlot::new(window.clone(), move || {
                    if let Some(runner) = me.upgrade() {
                        runner.borrow_mut().on_timer();
                    }
                }),
                question: None,
            })
        });
        {
            let mut r = runner.borrow_mut();
            let now = instant::now();
            let steps = r.seq.start(now);
            r.apply(&steps);
            r.rearm(now);
        }
        runner
    }

    fn on_timer(&mut self) {
        let now = instant::now();
        let steps = self.seq.advance(now);
        self.apply(&steps);
        self.rearm(now);
    }

    fn rearm(&mut self, now: f64) {
        if let Some(deadline) = self.seq.next_deadline() {
            self.timer.arm(deadline - now);
        }
    }

    fn apply(&mut self, steps: &[EffectStep]) {
        for step in steps {
            match *step {
                EffectStep::Reveal { index, entrance } => {
                    if let Some(item) = self.items.get(index) {
                        dom::set_style(item, "display", "block");
                        _ = item
                            .class_list()
                            .add_2(ANIMATED_CLASS, entrance.css_class());
                    }
                }
                EffectStep::Fade { index } => {
                    if let Some(item) = self.items.get(index) {
                        dom::set_style(item, "opacity", "0");
                    }
                }
                EffectStep::Hide { index } => {
                    if let Some(item) = self.items.get(index) {
                        dom::hide(item);
                    }
                }
                EffectStep::Finished => self.enter_question(),
            }
        }
    }

    fn enter_question(&mut self) {
        if self.question.is_some() {
            log::debug!("[question] already entered");
            return;
        }
        match QuestionPage::new(&self.window, &self.document, self.question_cfg) {
            Ok(page) => {
                if let Err(e) = page.borrow_mut().enter() {
                    log::error!("[question] wiring failed: {e}");
                }
                self.question = Some(page);
            }
            Err(e) => log::error!("[question] skipped: {e:#}"),
        }
    }
}
