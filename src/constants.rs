// Page wiring: element ids, selectors and CSS classes the markup provides.

// Required by the hearts subsystem
pub const CANVAS_ID: &str = "heart-canvas";

// Required by the music subsystem
pub const AUDIO_ID: &str = "bg-music";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const MUSIC_PLAYING_CLASS: &str = "music-playing";

// Effect sequence
pub const EFFECT_ITEM_SELECTOR: &str = ".effect-item";
pub const ANIMATED_CLASS: &str = "animated";

// Question flow
pub const QUESTION_BOX_SELECTOR: &str = ".question-box";
pub const NO_BUTTON_ID: &str = "no-btn";
pub const YES_BUTTON_ID: &str = "yes-btn";
pub const ANSWER_TEXT_ID: &str = "answer-text";
pub const TROLL_MODE_CLASS: &str = "troll-mode"; // decline control is on the run
pub const DISABLED_TROLL_CLASS: &str = "disabled-troll"; // decline control gave up

// Replay
pub const REPLAY_SELECTOR: &str = ".replay-btn";

// Host globals
pub const CONFETTI_GLOBAL: &str = "confetti";
