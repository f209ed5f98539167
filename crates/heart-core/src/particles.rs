//! Falling heart particles: spawn, per-frame motion and viewport reflow.

use crate::config::FieldConfig;
use crate::constants::{LIGHTNESS_PCT, SATURATION_PCT};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

/// One heart. `pos` is in surface pixels, speeds are per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    pub rotation: f32,
    pub angular_speed: f32,
    pub hue: f32,
}

impl Particle {
    /// Draw every attribute fresh. `y` is left to the caller.
    fn random<R: Rng + ?Sized>(cfg: &FieldConfig, width: f32, y: f32, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(rng.gen::<f32>() * width.max(0.0), y),
            size: cfg.size.sample(rng),
            speed: cfg.speed.sample(rng),
            opacity: cfg.opacity.sample(rng),
            rotation: rng.gen::<f32>() * TAU,
            angular_speed: cfg.angular_speed.sample(rng),
            hue: cfg.hue.sample(rng),
        }
    }

    /// Initial spawn: somewhere in the band just above the top edge.
    pub fn spawn<R: Rng + ?Sized>(cfg: &FieldConfig, width: f32, rng: &mut R) -> Self {
        let y = cfg.respawn_y - rng.gen::<f32>() * cfg.spawn_y_jitter;
        Self::random(cfg, width, y, rng)
    }

    /// Respawn after falling off the bottom: always exactly at `respawn_y`.
    pub fn respawn<R: Rng + ?Sized>(cfg: &FieldConfig, width: f32, rng: &mut R) -> Self {
        Self::random(cfg, width, cfg.respawn_y, rng)
    }

    #[inline]
    pub fn is_below(&self, surface_height: f32) -> bool {
        self.pos.y > surface_height + self.size
    }

    /// CSS color string, e.g. `hsl(342.5, 100%, 65%)`.
    pub fn css_color(&self) -> String {
        format!(
            "hsl({:.1}, {}%, {}%)",
            self.hue, SATURATION_PCT, LIGHTNESS_PCT
        )
    }
}

/// Number of hearts for a surface: one per `area_per_particle`, capped.
pub fn particle_count(cfg: &FieldConfig, width: f32, height: f32) -> usize {
    let area = (width * height).max(0.0);
    let n = (area / cfg.area_per_particle).floor() as usize;
    n.min(cfg.max_particles)
}

/// Owns the hearts and the RNG that drives their respawns.
pub struct ParticleField<R: Rng = StdRng> {
    cfg: FieldConfig,
    width: f32,
    particles: Vec<Particle>,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(cfg: FieldConfig, width: f32, height: f32, mut rng: R) -> Self {
        let count = particle_count(&cfg, width, height);
        let particles = (0..count)
            .map(|_| Particle::spawn(&cfg, width, &mut rng))
            .collect();
        Self {
            cfg,
            width,
            particles,
            rng,
        }
    }

    /// Advance one frame: fall, spin, and respawn anything past the bottom.
    pub fn update(&mut self, surface_height: f32) {
        let cfg = &self.cfg;
        let width = self.width;
        let rng = &mut self.rng;
        for p in &mut self.particles {
            p.pos.y += p.speed;
            p.rotation += p.angular_speed;
            if p.is_below(surface_height) {
                *p = Particle::respawn(cfg, width, rng);
            }
        }
    }

    /// Reflow after a viewport change. Size, speed and color are kept.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        for p in &mut self.particles {
            p.pos.x = self.rng.gen::<f32>() * width.max(0.0);
            if p.pos.y > height {
                p.pos.y = self.cfg.respawn_y;
            }
        }
        log::debug!(
            "[hearts] reflowed {} particles to {:.0}x{:.0}",
            self.particles.len(),
            width,
            height
        );
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }
}
