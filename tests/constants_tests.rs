// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the constants module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn ids_are_bare_and_selectors_are_classes() {
    for id in [
        CANVAS_ID,
        AUDIO_ID,
        MUSIC_TOGGLE_ID,
        NO_BUTTON_ID,
        YES_BUTTON_ID,
        ANSWER_TEXT_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#') && !id.starts_with('.'), "{id}");
    }
    for selector in [EFFECT_ITEM_SELECTOR, QUESTION_BOX_SELECTOR, REPLAY_SELECTOR] {
        assert!(selector.starts_with('.'), "{selector}");
    }
}

#[test]
fn css_classes_are_distinct() {
    let classes = [
        MUSIC_PLAYING_CLASS,
        ANIMATED_CLASS,
        TROLL_MODE_CLASS,
        DISABLED_TROLL_CLASS,
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn entrance_classes_do_not_collide_with_page_classes() {
    use heart_core::Entrance;
    for entrance in [Entrance::FlyIn, Entrance::RotateIn] {
        assert_ne!(entrance.css_class(), ANIMATED_CLASS);
        assert_ne!(entrance.css_class(), TROLL_MODE_CLASS);
    }
}

#[test]
fn toggle_labels_differ() {
    assert_ne!(heart_core::LABEL_PLAYING, heart_core::LABEL_PAUSED);
    assert_ne!(heart_core::LABEL_DONT_TRY, heart_core::LABEL_RESIGNED);
}
