// Host-side tests for the animation driver lifecycle.

use glam::Vec2;
use heart_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct CountingScheduler {
    next: u32,
    requested: Vec<u32>,
    cancelled: Vec<u32>,
}

impl FrameScheduler for CountingScheduler {
    type Handle = u32;
    fn request_frame(&mut self) -> Option<u32> {
        self.next += 1;
        self.requested.push(self.next);
        Some(self.next)
    }
    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}

#[derive(Default)]
struct CountingSurface {
    clears: usize,
    fills: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn set_alpha(&mut self, _alpha: f32) {}
    fn set_fill_color(&mut self, _css_color: &str) {}
    fn translate(&mut self, _offset: Vec2) {}
    fn rotate(&mut self, _radians: f32) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _p: Vec2) {}
    fn bezier_curve_to(&mut self, _c1: Vec2, _c2: Vec2, _end: Vec2) {}
    fn fill(&mut self) {
        self.fills += 1;
    }
}

fn field() -> ParticleField<StdRng> {
    ParticleField::new(
        FieldConfig::default(),
        400.0,
        300.0,
        StdRng::seed_from_u64(4),
    )
}

#[test]
fn start_schedules_one_frame_and_is_idempotent() {
    let mut sched = CountingScheduler::default();
    let mut driver = AnimationDriver::new();
    assert!(!driver.is_running());
    assert!(driver.start(&mut sched));
    assert!(!driver.start(&mut sched));
    assert!(!driver.start(&mut sched));
    assert_eq!(sched.requested, vec![1]);
    assert_eq!(driver.state(), DriverState::Running { pending: Some(1) });
}

#[test]
fn stop_cancels_pending_and_is_idempotent() {
    let mut sched = CountingScheduler::default();
    let mut driver = AnimationDriver::new();
    assert!(!driver.stop(&mut sched));
    driver.start(&mut sched);
    assert!(driver.stop(&mut sched));
    assert!(!driver.stop(&mut sched));
    assert_eq!(sched.cancelled, vec![1]);
    assert_eq!(driver.state(), DriverState::Stopped);
}

#[test]
fn each_frame_updates_draws_and_requests_the_next() {
    let mut sched = CountingScheduler::default();
    let mut driver = AnimationDriver::new();
    let mut f = field();
    let mut surface = CountingSurface::default();
    driver.start(&mut sched);
    let y0 = f.particles()[0].pos.y;
    for _ in 0..3 {
        assert!(driver.on_frame(&mut sched, &mut f, &mut surface, 300.0));
    }
    assert_eq!(surface.clears, 3);
    assert_eq!(surface.fills, 3 * f.len());
    assert_ne!(f.particles()[0].pos.y, y0);
    assert_eq!(sched.requested, vec![1, 2, 3, 4]);
    assert_eq!(driver.state(), DriverState::Running { pending: Some(4) });
}

#[test]
fn stray_frame_after_stop_does_nothing() {
    let mut sched = CountingScheduler::default();
    let mut driver = AnimationDriver::new();
    let mut f = field();
    let mut surface = CountingSurface::default();
    driver.start(&mut sched);
    driver.stop(&mut sched);
    assert!(!driver.on_frame(&mut sched, &mut f, &mut surface, 300.0));
    assert_eq!(surface.clears, 0);
    assert_eq!(sched.requested.len(), 1);
}

#[test]
fn restart_after_stop_schedules_again() {
    let mut sched = CountingScheduler::default();
    let mut driver = AnimationDriver::new();
    driver.start(&mut sched);
    driver.stop(&mut sched);
    assert!(driver.start(&mut sched));
    assert_eq!(sched.requested, vec![1, 2]);
}

/// Refuses the first `refusals` requests, then behaves.
struct FlakyScheduler {
    refusals: u32,
    inner: CountingScheduler,
}

impl FrameScheduler for FlakyScheduler {
    type Handle = u32;
    fn request_frame(&mut self) -> Option<u32> {
        if self.refusals > 0 {
            self.refusals -= 1;
            return None;
        }
        self.inner.request_frame()
    }
    fn cancel_frame(&mut self, handle: u32) {
        self.inner.cancel_frame(handle);
    }
}

#[test]
fn refused_first_request_leaves_driver_stopped_and_retryable() {
    let mut sched = FlakyScheduler {
        refusals: 1,
        inner: CountingScheduler::default(),
    };
    let mut driver = AnimationDriver::new();
    assert!(!driver.start(&mut sched));
    assert_eq!(driver.state(), DriverState::Stopped);
    assert!(driver.start(&mut sched));
    assert_eq!(driver.state(), DriverState::Running { pending: Some(1) });
}

#[test]
fn refused_request_mid_loop_stops_so_start_can_recover() {
    let mut sched = FlakyScheduler {
        refusals: 0,
        inner: CountingScheduler::default(),
    };
    let mut driver = AnimationDriver::new();
    let mut f = field();
    let mut surface = CountingSurface::default();
    driver.start(&mut sched);
    sched.refusals = 1;
    assert!(driver.on_frame(&mut sched, &mut f, &mut surface, 300.0));
    assert!(!driver.is_running());
    assert!(driver.start(&mut sched));
    assert!(driver.on_frame(&mut sched, &mut f, &mut surface, 300.0));
    assert_eq!(surface.clears, 2);
}
