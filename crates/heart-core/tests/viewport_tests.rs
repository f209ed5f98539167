// Host-side tests for the resize debouncer.

use heart_core::constants::RESIZE_DEBOUNCE_MS;
use heart_core::*;

#[test]
fn burst_within_quiet_window_fires_once_with_last_value() {
    let mut d = ResizeDebouncer::new(RESIZE_DEBOUNCE_MS);
    d.push(0.0, Viewport::new(800.0, 600.0));
    d.push(50.0, Viewport::new(700.0, 500.0));
    d.push(120.0, Viewport::new(640.0, 480.0));
    assert_eq!(d.deadline(), Some(320.0));
    assert_eq!(d.poll(200.0), None);
    assert_eq!(d.poll(319.9), None);
    assert_eq!(d.poll(320.0), Some(Viewport::new(640.0, 480.0)));
    assert_eq!(d.poll(1000.0), None);
    assert!(!d.is_pending());
}

#[test]
fn separated_events_fire_separately() {
    let mut d = Debouncer::new(200.0);
    d.push(0.0, 1);
    assert_eq!(d.poll(200.0), Some(1));
    d.push(500.0, 2);
    assert_eq!(d.poll(650.0), None);
    assert_eq!(d.poll(700.0), Some(2));
}

#[test]
fn nothing_pending_means_nothing_fires() {
    let mut d: Debouncer<Viewport> = Debouncer::new(200.0);
    assert_eq!(d.poll(1e9), None);
    assert_eq!(d.deadline(), None);
}

#[test]
fn debounced_reflow_drives_the_particle_field_once() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    let mut field = ParticleField::new(
        FieldConfig::default(),
        800.0,
        600.0,
        StdRng::seed_from_u64(8),
    );
    let mut d = ResizeDebouncer::new(200.0);
    let mut reflows = 0;
    for (i, w) in [500.0_f32, 450.0, 400.0, 350.0].into_iter().enumerate() {
        d.push(i as f64 * 40.0, Viewport::new(w, 300.0));
        if let Some(v) = d.poll(i as f64 * 40.0) {
            field.on_resize(v.width, v.height);
            reflows += 1;
        }
    }
    if let Some(v) = d.poll(400.0) {
        field.on_resize(v.width, v.height);
        reflows += 1;
    }
    assert_eq!(reflows, 1);
    assert_eq!(field.width(), 350.0);
    assert!(field.particles().iter().all(|p| p.pos.x < 350.0));
}
