//! Tunable parameters for every part of the page, grouped per subsystem.
//!
//! `GreetingConfig::default()` mirrors `constants.rs`. Frontends may build a
//! custom config for tests or variants, and should call [`GreetingConfig::validate`]
//! before handing it to the subsystems since sampling panics on empty ranges.

use crate::constants::*;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("range `{name}` is empty or inverted ({lo}..{hi})")]
    EmptyRange { name: &'static str, lo: f32, hi: f32 },
    #[error("`{name}` must be positive")]
    NonPositive { name: &'static str },
    #[error("opacity range must lie within [0, 1]")]
    OpacityOutOfUnit,
    #[error("relabel threshold {relabel_after} exceeds max tries {max_tries}")]
    RelabelAfterMax { relabel_after: u32, max_tries: u32 },
}

/// Half-open sampling interval `[lo, hi)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub lo: f32,
    pub hi: f32,
}

impl Span {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.lo..self.hi)
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.lo && v < self.hi
    }

    fn check(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.lo < self.hi {
            Ok(())
        } else {
            Err(ConfigError::EmptyRange {
                name,
                lo: self.lo,
                hi: self.hi,
            })
        }
    }
}

impl From<(f32, f32)> for Span {
    fn from((lo, hi): (f32, f32)) -> Self {
        Self { lo, hi }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub area_per_particle: f32,
    pub respawn_y: f32,
    pub spawn_y_jitter: f32,
    pub size: Span,
    pub speed: Span,
    pub opacity: Span,
    pub angular_speed: Span,
    pub hue: Span,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            area_per_particle: AREA_PER_PARTICLE,
            respawn_y: RESPAWN_Y,
            spawn_y_jitter: SPAWN_Y_JITTER,
            size: SIZE_RANGE.into(),
            speed: SPEED_RANGE.into(),
            opacity: OPACITY_RANGE.into(),
            angular_speed: ANGULAR_SPEED_RANGE.into(),
            hue: HUE_RANGE.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceTiming {
    pub show_ms: f64,
    pub fade_ms: f64,
}

impl Default for SequenceTiming {
    fn default() -> Self {
        Self {
            show_ms: EFFECT_SHOW_MS,
            fade_ms: EFFECT_FADE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuestionConfig {
    pub max_tries: u32,
    pub relabel_after: u32,
    pub edge_margin: f32,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            max_tries: MAX_MOVE_TRIES,
            relabel_after: RELABEL_AFTER_TRIES,
            edge_margin: EDGE_MARGIN_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GreetingConfig {
    pub field: FieldConfig,
    pub sequence: SequenceTiming,
    pub question: QuestionConfig,
    pub resize_debounce_ms: f64,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            sequence: SequenceTiming::default(),
            question: QuestionConfig::default(),
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl GreetingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.field;
        f.size.check("size")?;
        f.speed.check("speed")?;
        f.opacity.check("opacity")?;
        f.angular_speed.check("angular_speed")?;
        f.hue.check("hue")?;
        if f.size.lo <= 0.0 {
            return Err(ConfigError::NonPositive { name: "size" });
        }
        if f.speed.lo <= 0.0 {
            return Err(ConfigError::NonPositive { name: "speed" });
        }
        if f.opacity.lo < 0.0 || f.opacity.hi > 1.0 {
            return Err(ConfigError::OpacityOutOfUnit);
        }
        if f.area_per_particle <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "area_per_particle",
            });
        }
        if f.spawn_y_jitter < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "spawn_y_jitter",
            });
        }
        if self.sequence.show_ms <= 0.0 {
            return Err(ConfigError::NonPositive { name: "show_ms" });
        }
        if self.sequence.fade_ms <= 0.0 {
            return Err(ConfigError::NonPositive { name: "fade_ms" });
        }
        if self.resize_debounce_ms <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "resize_debounce_ms",
            });
        }
        let q = &self.question;
        if q.max_tries == 0 {
            return Err(ConfigError::NonPositive { name: "max_tries" });
        }
        if q.relabel_after > q.max_tries {
            return Err(ConfigError::RelabelAfterMax {
                relabel_after: q.relabel_after,
                max_tries: q.max_tries,
            });
        }
        Ok(())
    }
}
