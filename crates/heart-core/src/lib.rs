pub mod audio;
pub mod config;
pub mod confetti;
pub mod constants;
pub mod driver;
pub mod lifecycle;
pub mod particles;
pub mod question;
pub mod render;
pub mod sequencer;
pub mod viewport;

pub use audio::*;
pub use config::*;
pub use confetti::*;
pub use driver::*;
pub use lifecycle::*;
pub use particles::*;
pub use question::*;
pub use render::{draw, draw_heart, heart_path, Surface};
pub use sequencer::*;
pub use viewport::*;
