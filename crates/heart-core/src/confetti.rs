//! Parameters for the optional confetti bursts.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread_deg: f32,
    /// Vertical origin as a fraction of the viewport height.
    pub origin_y: f32,
}

/// Fired once when the question appears.
pub const QUESTION_BURST: ConfettiBurst = ConfettiBurst {
    particle_count: QUESTION_BURST_COUNT,
    spread_deg: QUESTION_BURST_SPREAD_DEG,
    origin_y: BURST_ORIGIN_Y,
};

/// Fired on accept.
pub const ACCEPT_BURST: ConfettiBurst = ConfettiBurst {
    particle_count: ACCEPT_BURST_COUNT,
    spread_deg: ACCEPT_BURST_SPREAD_DEG,
    origin_y: BURST_ORIGIN_Y,
};
