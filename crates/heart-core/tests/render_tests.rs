// Host-side tests for heart rendering against a recording surface.

use glam::Vec2;
use heart_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear,
    Save,
    Restore,
    Alpha(f32),
    Fill(String),
    Translate(Vec2),
    Rotate(f32),
    BeginPath,
    MoveTo(Vec2),
    Bezier(Vec2, Vec2, Vec2),
    FillPath,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(Op::Alpha(alpha));
    }
    fn set_fill_color(&mut self, css_color: &str) {
        self.ops.push(Op::Fill(css_color.to_string()));
    }
    fn translate(&mut self, offset: Vec2) {
        self.ops.push(Op::Translate(offset));
    }
    fn rotate(&mut self, radians: f32) {
        self.ops.push(Op::Rotate(radians));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, p: Vec2) {
        self.ops.push(Op::MoveTo(p));
    }
    fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.ops.push(Op::Bezier(c1, c2, end));
    }
    fn fill(&mut self) {
        self.ops.push(Op::FillPath);
    }
}

#[test]
fn heart_path_is_two_mirrored_lobes_from_notch_to_tip() {
    let mut r = Recorder::default();
    heart_path(&mut r, 12.0);
    assert_eq!(
        r.ops,
        vec![
            Op::BeginPath,
            Op::MoveTo(Vec2::ZERO),
            Op::Bezier(
                Vec2::new(-6.0, -6.0),
                Vec2::new(-12.0, 4.0),
                Vec2::new(0.0, 12.0)
            ),
            Op::Bezier(Vec2::new(12.0, 4.0), Vec2::new(6.0, -6.0), Vec2::ZERO),
        ]
    );
}

#[test]
fn draw_heart_wraps_transform_in_save_restore() {
    let heart = Particle {
        pos: Vec2::new(10.0, 20.0),
        size: 9.0,
        speed: 1.5,
        opacity: 0.5,
        rotation: 0.25,
        angular_speed: 0.01,
        hue: 340.0,
    };
    let mut r = Recorder::default();
    draw_heart(&mut r, &heart);
    assert_eq!(r.ops.first(), Some(&Op::Save));
    assert_eq!(r.ops.last(), Some(&Op::Restore));
    assert!(r.ops.contains(&Op::Alpha(0.5)));
    assert!(r.ops.contains(&Op::Fill("hsl(340.0, 100%, 65%)".into())));
    assert!(r.ops.contains(&Op::Translate(Vec2::new(10.0, 20.0))));
    assert!(r.ops.contains(&Op::Rotate(0.25)));
    assert_eq!(r.ops[r.ops.len() - 2], Op::FillPath);
}

#[test]
fn draw_clears_once_then_draws_in_field_order() {
    let field = ParticleField::new(
        FieldConfig::default(),
        400.0,
        300.0,
        StdRng::seed_from_u64(2),
    );
    let mut r = Recorder::default();
    draw(&mut r, &field);
    assert_eq!(r.ops[0], Op::Clear);
    assert_eq!(r.ops.iter().filter(|op| **op == Op::Clear).count(), 1);
    let translates: Vec<Vec2> = r
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Translate(p) => Some(*p),
            _ => None,
        })
        .collect();
    let expected: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
    assert_eq!(translates, expected);
}
