//! Page show/hide handling, including the back/forward cache.
//!
//! A hidden page may come back from the cache with all in-memory state
//! intact, so hiding only suspends: the loop stops and music pauses, while
//! every event handler stays attached.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    /// `pagehide`; `persisted` means the page is entering the cache.
    Hide { persisted: bool },
    /// `pageshow`; `persisted` means the page was restored from the cache.
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Stop the frame loop and pause music. Handlers stay attached.
    Suspend,
    /// Restart the frame loop after a cache restore.
    Resume,
    None,
}

pub fn on_page_transition(transition: PageTransition) -> LifecycleAction {
    match transition {
        PageTransition::Hide { .. } => LifecycleAction::Suspend,
        PageTransition::Show { persisted: true } => LifecycleAction::Resume,
        // a fresh load already started everything
        PageTransition::Show { persisted: false } => LifecycleAction::None,
    }
}
