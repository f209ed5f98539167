//! Closing question: evasive "No", one-shot "Yes".

use crate::confetti;
use crate::constants::*;
use crate::dom::{self, DomError, Listener};
use anyhow::Context;
use glam::Vec2;
use heart_core::{DeclineReaction, QuestionConfig, QuestionFlow, ACCEPT_BURST, QUESTION_BURST};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub type SharedQuestion = Rc<RefCell<QuestionPage>>;

pub struct QuestionPage {
    me: Weak<RefCell<QuestionPage>>,
    window: web::Window,
    question_box: web::HtmlElement,
    replay: web::HtmlElement,
    no_btn: web::HtmlElement,
    yes_btn: web::HtmlElement,
    answer: web::HtmlElement,
    flow: QuestionFlow,
    rng: StdRng,
    handlers: Vec<Listener>,
}

impl QuestionPage {
    pub fn new(
        window: &web::Window,
        document: &web::Document,
        cfg: QuestionConfig,
    ) -> anyhow::Result<SharedQuestion> {
        let question_box: web::HtmlElement =
            dom::query(document, QUESTION_BOX_SELECTOR).context("question box")?;
        let replay: web::HtmlElement =
            dom::query(document, REPLAY_SELECTOR).context("replay button")?;
        let no_btn: web::HtmlElement =
            dom::by_id(document, NO_BUTTON_ID).context("decline button")?;
        let yes_btn: web::HtmlElement =
            dom::by_id(document, YES_BUTTON_ID).context("accept button")?;
        let answer: web::HtmlElement =
            dom::by_id(document, ANSWER_TEXT_ID).context("answer text")?;
        Ok(Rc::new_cyclic(|me| {
            RefCell::new(QuestionPage {
                me: me.clone(),
                window: window.clone(),
                question_box,
                replay,
                no_btn,
                yes_btn,
                answer,
                flow: QuestionFlow::new(cfg),
                rng: StdRng::from_entropy(),
                handlers: Vec::new(),
            })
        }))
    }

    /// Reveal the question and (re)attach the button handlers.
    pub fn enter(&mut self) -> Result<(), DomError> {
        dom::show(&self.question_box);
        dom::show(&self.replay);
        self.rewire()?;
        log::info!("[question] shown");
        confetti::burst(&self.window, &QUESTION_BURST);
        Ok(())
    }

    fn rewire(&mut self) -> Result<(), DomError> {
        // old handlers detach on drop
        self.handlers.clear();

        let weak = self.me.clone();
        let hover = Listener::new(&self.no_btn, "mouseenter", move |_| {
            if let Some(page) = weak.upgrade() {
                page.borrow_mut().on_decline_hover();
            }
        })?;
        let weak = self.me.clone();
        let click = Listener::new(&self.yes_btn, "click", move |_| {
            if let Some(page) = weak.upgrade() {
                page.borrow_mut().on_accept();
            }
        })?;
        self.handlers.push(hover);
        self.handlers.push(click);
        Ok(())
    }

    fn on_decline_hover(&mut self) {
        let view = dom::viewport(&self.window);
        let no_btn = &self.no_btn;
        // relabel before measuring so the bound uses the final width
        let measure = |label: Option<&'static str>| {
            if let Some(label) = label {
                no_btn.set_text_content(Some(label));
            }
            Vec2::new(no_btn.offset_width() as f32, no_btn.offset_height() as f32)
        };
        match self.flow.on_decline_hover(view, measure, &mut self.rng) {
            DeclineReaction::Move { pos, .. } => {
                log::debug!(
                    "[question] decline moved to ({:.0}, {:.0}), try {}",
                    pos.x,
                    pos.y,
                    self.flow.move_tries()
                );
                dom::set_style(&self.no_btn, "position", "absolute");
                dom::set_style(&self.no_btn, "left", &format!("{}px", pos.x));
                dom::set_style(&self.no_btn, "top", &format!("{}px", pos.y));
                _ = self.no_btn.class_list().add_1(TROLL_MODE_CLASS);
            }
            DeclineReaction::Resign { label } => {
                log::info!("[question] decline gave up");
                _ = self.no_btn.class_list().add_1(DISABLED_TROLL_CLASS);
                _ = self.no_btn.set_attribute("disabled", "");
                self.no_btn.set_text_content(Some(label));
            }
            DeclineReaction::Ignore => {}
        }
    }

    fn on_accept(&mut self) {
        let Some(accepted) = self.flow.on_accept() else {
            return;
        };
        log::info!("[question] accepted");
        self.answer.set_text_content(Some(accepted.answer));
        dom::show(&self.answer);
        dom::hide(&self.no_btn);
        dom::hide(&self.question_box);
        confetti::burst(&self.window, &ACCEPT_BURST);
    }
}
