//! Timed reveal/fade/hide sequence over a fixed list of effect elements.
//!
//! The sequencer owns no timers. The host calls [`EffectSequencer::advance`]
//! with the current clock whenever [`EffectSequencer::next_deadline`] passes
//! and applies the returned steps to its elements in order.

use crate::config::SequenceTiming;

/// Entrance animation, alternating by element parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    FlyIn,
    RotateIn,
}

impl Entrance {
    #[inline]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Entrance::FlyIn
        } else {
            Entrance::RotateIn
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Entrance::FlyIn => "fly-in",
            Entrance::RotateIn => "rotate-in",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Showing { index: usize, until: f64 },
    Fading { index: usize, until: f64 },
    Finished,
}

/// Side effect the host applies to element `index`, or the hand-off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectStep {
    Reveal { index: usize, entrance: Entrance },
    Fade { index: usize },
    Hide { index: usize },
    Finished,
}

#[derive(Debug)]
pub struct EffectSequencer {
    len: usize,
    timing: SequenceTiming,
    phase: Phase,
}

impl EffectSequencer {
    pub fn new(len: usize, timing: SequenceTiming) -> Self {
        Self {
            len,
            timing,
            phase: Phase::Idle,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Index of the element currently on screen, if any.
    pub fn cursor(&self) -> Option<usize> {
        match self.phase {
            Phase::Showing { index, .. } | Phase::Fading { index, .. } => Some(index),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<f64> {
        match self.phase {
            Phase::Showing { until, .. } | Phase::Fading { until, .. } => Some(until),
            _ => None,
        }
    }

    /// Reveal the first element. No-op unless idle.
    pub fn start(&mut self, now_ms: f64) -> Vec<EffectStep> {
        let mut steps = Vec::new();
        if self.phase == Phase::Idle {
            self.show(0, now_ms, &mut steps);
        }
        steps
    }

    /// Apply every transition whose deadline is at or before `now_ms`.
    pub fn advance(&mut self, now_ms: f64) -> Vec<EffectStep> {
        let mut steps = Vec::new();
        loop {
            match self.phase {
                Phase::Showing { index, until } if now_ms >= until => {
                    steps.push(EffectStep::Fade { index });
                    self.phase = Phase::Fading {
                        index,
                        until: now_ms + self.timing.fade_ms,
                    };
                }
                Phase::Fading { index, until } if now_ms >= until => {
                    steps.push(EffectStep::Hide { index });
                    self.show(index + 1, now_ms, &mut steps);
                }
                _ => break,
            }
        }
        steps
    }

    fn show(&mut self, index: usize, now_ms: f64, steps: &mut Vec<EffectStep>) {
        if index < self.len {
            let entrance = Entrance::for_index(index);
            log::debug!("[effects] reveal #{index} ({})", entrance.css_class());
            steps.push(EffectStep::Reveal { index, entrance });
            self.phase = Phase::Showing {
                index,
                until: now_ms + self.timing.show_ms,
            };
        } else {
            self.phase = Phase::Finished;
            steps.push(EffectStep::Finished);
        }
    }
}
