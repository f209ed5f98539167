//! The closing question: an evasive decline control and a one-shot accept.

use crate::config::QuestionConfig;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

pub const LABEL_DONT_TRY: &str = "Đừng cố nữa 😆";
pub const LABEL_RESIGNED: &str = "Thôi được rồi 😅";
pub const ANSWER_TEXT: &str = "💖 Cảm ơn em đã đồng ý 💖";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeclineReaction {
    /// Jump to `pos` (top-left, viewport px), optionally relabelling.
    Move {
        pos: Vec2,
        label: Option<&'static str>,
    },
    /// Out of tries: disable and show the final label. Emitted once.
    Resign { label: &'static str },
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub answer: &'static str,
}

/// Random top-left corner that keeps a control of `control` size fully on
/// screen with `margin` to spare on the right and bottom edges.
pub fn evasive_position<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: Viewport,
    control: Vec2,
    margin: f32,
) -> Vec2 {
    let max = (viewport.size() - control - Vec2::splat(margin)).max(Vec2::ZERO);
    Vec2::new(rng.gen::<f32>() * max.x, rng.gen::<f32>() * max.y)
}

#[derive(Debug)]
pub struct QuestionFlow {
    cfg: QuestionConfig,
    move_tries: u32,
    resigned: bool,
    accepted: bool,
}

impl QuestionFlow {
    pub fn new(cfg: QuestionConfig) -> Self {
        Self {
            cfg,
            move_tries: 0,
            resigned: false,
            accepted: false,
        }
    }

    #[inline]
    pub fn move_tries(&self) -> u32 {
        self.move_tries
    }

    #[inline]
    pub fn is_resigned(&self) -> bool {
        self.resigned
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// `measure` receives the label this try applies (if any) and returns the
    /// control's size with that label in place, so the bound uses the size
    /// the control will actually have after it moves.
    pub fn on_decline_hover<R, M>(
        &mut self,
        viewport: Viewport,
        measure: M,
        rng: &mut R,
    ) -> DeclineReaction
    where
        R: Rng + ?Sized,
        M: FnOnce(Option<&'static str>) -> Vec2,
    {
        if self.resigned || self.accepted {
            return DeclineReaction::Ignore;
        }
        if self.move_tries >= self.cfg.max_tries {
            self.resigned = true;
            return DeclineReaction::Resign {
                label: LABEL_RESIGNED,
            };
        }
        self.move_tries += 1;
        let label = (self.move_tries > self.cfg.relabel_after).then_some(LABEL_DONT_TRY);
        let control = measure(label);
        let pos = evasive_position(rng, viewport, control, self.cfg.edge_margin);
        DeclineReaction::Move { pos, label }
    }

    /// `Some` on the first accept only.
    pub fn on_accept(&mut self) -> Option<Accepted> {
        if std::mem::replace(&mut self.accepted, true) {
            return None;
        }
        Some(Accepted {
            answer: ANSWER_TEXT,
        })
    }
}
