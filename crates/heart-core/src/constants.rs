// Shared tuning constants for the greeting page. The web frontend reads these
// through `GreetingConfig::default()`; tests read them directly.

// Particle field density
pub const MAX_PARTICLES: usize = 50;
pub const AREA_PER_PARTICLE: f32 = 6000.0; // surface px^2 per heart

// Spawn band above the top edge
pub const RESPAWN_Y: f32 = -20.0;
pub const SPAWN_Y_JITTER: f32 = 100.0; // initial y in (RESPAWN_Y - jitter, RESPAWN_Y]

// Per-heart randomized ranges (half-open)
pub const SIZE_RANGE: (f32, f32) = (8.0, 23.0);
pub const SPEED_RANGE: (f32, f32) = (1.0, 3.0); // px per frame
pub const OPACITY_RANGE: (f32, f32) = (0.4, 1.0);
pub const ANGULAR_SPEED_RANGE: (f32, f32) = (-0.04, 0.04); // rad per frame
pub const HUE_RANGE: (f32, f32) = (330.0, 360.0); // pinks through red

// Fixed color components
pub const SATURATION_PCT: f32 = 100.0;
pub const LIGHTNESS_PCT: f32 = 65.0;

// Viewport
pub const RESIZE_DEBOUNCE_MS: f64 = 200.0;

// Effect sequence timing
pub const EFFECT_SHOW_MS: f64 = 3000.0;
pub const EFFECT_FADE_MS: f64 = 500.0;

// Evasive decline control
pub const MAX_MOVE_TRIES: u32 = 10;
pub const RELABEL_AFTER_TRIES: u32 = 7;
pub const EDGE_MARGIN_PX: f32 = 10.0;

// Confetti bursts
pub const QUESTION_BURST_COUNT: u32 = 150;
pub const QUESTION_BURST_SPREAD_DEG: f32 = 80.0;
pub const ACCEPT_BURST_COUNT: u32 = 200;
pub const ACCEPT_BURST_SPREAD_DEG: f32 = 100.0;
pub const BURST_ORIGIN_Y: f32 = 0.6; // fraction of viewport height
