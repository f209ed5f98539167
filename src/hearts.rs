//! Falling-hearts canvas: field + renderer + frame loop + debounced resize.

use crate::constants::CANVAS_ID;
use crate::dom::{self, DomError, Listener, TimeoutSlot};
use crate::frame::RafScheduler;
use crate::render::CanvasSurface;
use anyhow::Context;
use heart_core::{AnimationDriver, GreetingConfig, ParticleField, ResizeDebouncer, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedHearts = Rc<RefCell<HeartAnimation>>;

pub struct HeartAnimation {
    window: web::Window,
    surface: CanvasSurface,
    field: ParticleField<StdRng>,
    driver: AnimationDriver<i32>,
    scheduler: RafScheduler,
    resize: ResizeDebouncer,
    resize_timer: TimeoutSlot,
}

impl HeartAnimation {
    /// Fails if the canvas or its 2D context is missing.
    pub fn new(
        window: &web::Window,
        document: &web::Document,
        cfg: &GreetingConfig,
    ) -> anyhow::Result<SharedHearts> {
        let canvas: web::HtmlCanvasElement =
            dom::by_id(document, CANVAS_ID).context("hearts canvas")?;
        let ctx = canvas
            .get_context("2d")
            .map_err(DomError::from)?
            .ok_or(DomError::NoContext2d)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| DomError::NoContext2d)?;
        let surface = CanvasSurface::new(canvas, ctx);

        let view = dom::viewport(window);
        surface.resize(view.width, view.height);
        let field = ParticleField::new(
            cfg.field.clone(),
            view.width,
            view.height,
            StdRng::from_entropy(),
        );
        log::info!(
            "[hearts] {} hearts on {:.0}x{:.0}",
            field.len(),
            view.width,
            view.height
        );

        Ok(Rc::new_cyclic(|me: &Weak<RefCell<HeartAnimation>>| {
            let on_tick = me.clone();
            let on_timer = me.clone();
            RefCell::new(HeartAnimation {
                window: window.clone(),
                surface,
                field,
                driver: AnimationDriver::new(),
                scheduler: RafScheduler::new(window.clone(), move || {
                    if let Some(hearts) = on_tick.upgrade() {
                        hearts.borrow_mut().frame();
                    }
                }),
                resize: ResizeDebouncer::new(cfg.resize_debounce_ms),
                resize_timer: TimeoutSlot::new(window.clone(), move || {
                    if let Some(hearts) = on_timer.upgrade() {
                        hearts.borrow_mut().on_resize_timer();
                    }
                }),
            })
        }))
    }

    pub fn start(&mut self) -> bool {
        self.driver.start(&mut self.scheduler)
    }

    pub fn stop(&mut self) -> bool {
        self.resize_timer.cancel();
        self.driver.stop(&mut self.scheduler)
    }

    fn frame(&mut self) {
        let height = self.surface.height();
        self.driver
            .on_frame(&mut self.scheduler, &mut self.field, &mut self.surface, height);
    }

    /// Restart the quiet window with the latest viewport.
    pub fn queue_resize(&mut self, view: Viewport) {
        let now = instant::now();
        let deadline = self.resize.push(now, view);
        self.resize_timer.arm(deadline - now);
    }

    fn on_resize_timer(&mut self) {
        let now = instant::now();
        match self.resize.poll(now) {
            Some(view) => {
                self.surface.resize(view.width, view.height);
                self.field.on_resize(view.width, view.height);
            }
            None => {
                // timer beat the clock by a fraction of a ms
                if let Some(deadline) = self.resize.deadline() {
                    self.resize_timer.arm(deadline - now);
                }
            }
        }
    }
}

/// Feed window resizes into the debouncer.
pub fn wire_resize(hearts: &SharedHearts) -> anyhow::Result<Listener> {
    let window = hearts.borrow().window.clone();
    let weak = Rc::downgrade(hearts);
    let w = window.clone();
    let listener = Listener::new(&window, "resize", move |_| {
        if let Some(hearts) = weak.upgrade() {
            hearts.borrow_mut().queue_resize(dom::viewport(&w));
        }
    })?;
    Ok(listener)
}
