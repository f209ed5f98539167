//! Heart rendering against an abstract 2D surface.
//!
//! The web frontend implements [`Surface`] for a canvas 2D context; tests use a
//! recording surface.

use crate::particles::{Particle, ParticleField};
use glam::Vec2;
use rand::Rng;

/// Minimal 2D drawing surface: path fill plus a save/restore transform stack.
pub trait Surface {
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_alpha(&mut self, alpha: f32);
    fn set_fill_color(&mut self, css_color: &str);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2);
    fn fill(&mut self);
}

/// Trace a heart of the given size with its notch at the origin and its tip
/// at `(0, size)`.
pub fn heart_path<S: Surface + ?Sized>(surface: &mut S, size: f32) {
    let s = size;
    surface.begin_path();
    surface.move_to(Vec2::ZERO);
    surface.bezier_curve_to(
        Vec2::new(-s / 2.0, -s / 2.0),
        Vec2::new(-s, s / 3.0),
        Vec2::new(0.0, s),
    );
    surface.bezier_curve_to(
        Vec2::new(s, s / 3.0),
        Vec2::new(s / 2.0, -s / 2.0),
        Vec2::ZERO,
    );
}

pub fn draw_heart<S: Surface + ?Sized>(surface: &mut S, heart: &Particle) {
    surface.save();
    surface.set_alpha(heart.opacity);
    surface.set_fill_color(&heart.css_color());
    surface.translate(heart.pos);
    surface.rotate(heart.rotation);
    heart_path(surface, heart.size);
    surface.fill();
    surface.restore();
}

/// Clear the surface and draw every heart in field order.
pub fn draw<S: Surface + ?Sized, R: Rng>(surface: &mut S, field: &ParticleField<R>) {
    surface.clear();
    for heart in field.particles() {
        draw_heart(surface, heart);
    }
}
