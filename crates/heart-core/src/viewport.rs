//! Viewport dimensions and the resize debouncer.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Single-slot debouncer: every `push` replaces the pending value and restarts
/// the quiet window, so only the last value of a burst is ever released.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_ms: f64,
    pending: Option<(T, f64)>,
}

pub type ResizeDebouncer = Debouncer<Viewport>;

impl<T> Debouncer<T> {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    #[inline]
    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    /// Record an event; returns the deadline at which it may fire.
    pub fn push(&mut self, now_ms: f64, value: T) -> f64 {
        let deadline = now_ms + self.quiet_ms;
        self.pending = Some((value, deadline));
        deadline
    }

    /// Release the pending value if its quiet window has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now_ms >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|(_, d)| *d)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
