//! Start/stop lifecycle of the per-frame animation loop.

use crate::particles::ParticleField;
use crate::render::{self, Surface};
use rand::Rng;

/// Host primitive that calls back once before the next repaint.
pub trait FrameScheduler {
    type Handle: Copy;
    /// Ask for one callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState<H> {
    Stopped,
    Running { pending: Option<H> },
}

/// Owns the single pending frame request. At most one is outstanding at any
/// time, so repeated `start` calls never double the frame rate.
#[derive(Debug)]
pub struct AnimationDriver<H> {
    state: DriverState<H>,
}

impl<H: Copy> Default for AnimationDriver<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy> AnimationDriver<H> {
    pub fn new() -> Self {
        Self {
            state: DriverState::Stopped,
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState<H> {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    /// Returns `false` (and schedules nothing) if already running. Stays
    /// stopped if the host refuses the frame request, so a later `start` can
    /// try again.
    pub fn start<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) -> bool {
        if self.is_running() {
            return false;
        }
        match scheduler.request_frame() {
            Some(handle) => {
                self.state = DriverState::Running {
                    pending: Some(handle),
                };
                true
            }
            None => {
                log::warn!("[driver] host refused the first frame request");
                false
            }
        }
    }

    /// Returns `false` if already stopped.
    pub fn stop<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) -> bool {
        match self.state {
            DriverState::Stopped => false,
            DriverState::Running { pending } => {
                if let Some(handle) = pending {
                    scheduler.cancel_frame(handle);
                }
                self.state = DriverState::Stopped;
                true
            }
        }
    }

    /// Body of one frame callback: update, draw, then queue the next frame.
    /// A callback that arrives after `stop` does nothing.
    pub fn on_frame<S, F, R>(
        &mut self,
        scheduler: &mut S,
        field: &mut ParticleField<R>,
        surface: &mut F,
        surface_height: f32,
    ) -> bool
    where
        S: FrameScheduler<Handle = H>,
        F: Surface + ?Sized,
        R: Rng,
    {
        if !self.is_running() {
            return false;
        }
        field.update(surface_height);
        render::draw(surface, field);
        self.state = match scheduler.request_frame() {
            Some(handle) => DriverState::Running {
                pending: Some(handle),
            },
            None => {
                log::warn!("[driver] host refused a frame request; loop stopped");
                DriverState::Stopped
            }
        };
        true
    }
}
