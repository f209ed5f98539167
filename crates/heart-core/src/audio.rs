//! Background-music toggle state.
//!
//! The label always reflects *confirmed* playback. A pause is confirmed at
//! once; a play is confirmed only when the host reports the outcome through
//! [`AudioToggle::on_play_result`]. While a play request is in flight, further
//! clicks are ignored so outcomes can't arrive out of order.

pub const LABEL_PLAYING: &str = "🔊 Tắt nhạc";
pub const LABEL_PAUSED: &str = "🎵 Bật nhạc";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Playing,
}

/// What the host should do to the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    Pause,
}

#[derive(Debug)]
pub struct AudioToggle {
    playback: Playback,
    play_pending: bool,
    first_interaction_armed: bool,
}

impl Default for AudioToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioToggle {
    pub fn new() -> Self {
        Self {
            playback: Playback::Paused,
            play_pending: false,
            first_interaction_armed: false,
        }
    }

    #[inline]
    pub fn playback(&self) -> Playback {
        self.playback
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    #[inline]
    pub fn is_play_pending(&self) -> bool {
        self.play_pending
    }

    #[inline]
    pub fn is_first_interaction_armed(&self) -> bool {
        self.first_interaction_armed
    }

    pub fn label(&self) -> &'static str {
        match self.playback {
            Playback::Playing => LABEL_PLAYING,
            Playback::Paused => LABEL_PAUSED,
        }
    }

    /// Page-load autoplay attempt.
    pub fn begin_autoplay(&mut self) -> AudioCommand {
        self.play_pending = true;
        AudioCommand::Play
    }

    /// Outcome of the autoplay attempt. A blocked autoplay arms the
    /// first-interaction retry.
    pub fn on_autoplay_result(&mut self, ok: bool) {
        self.on_play_result(ok);
        if !ok {
            self.first_interaction_armed = true;
        }
    }

    /// Outcome of any `play()` request.
    pub fn on_play_result(&mut self, ok: bool) {
        self.play_pending = false;
        self.playback = if ok {
            Playback::Playing
        } else {
            Playback::Paused
        };
    }

    pub fn on_toggle_click(&mut self) -> Option<AudioCommand> {
        if self.play_pending {
            return None;
        }
        match self.playback {
            Playback::Playing => {
                self.playback = Playback::Paused;
                Some(AudioCommand::Pause)
            }
            Playback::Paused => {
                self.play_pending = true;
                Some(AudioCommand::Play)
            }
        }
    }

    /// One-shot retry on the first click anywhere on the page. Consumes the
    /// arming whether or not it ends up playing.
    pub fn on_first_interaction(&mut self) -> Option<AudioCommand> {
        if !std::mem::take(&mut self.first_interaction_armed) {
            return None;
        }
        if self.playback == Playback::Paused && !self.play_pending {
            self.play_pending = true;
            Some(AudioCommand::Play)
        } else {
            None
        }
    }

    /// Page hidden: always pause. The toggle keeps working afterwards.
    pub fn suspend(&mut self) -> AudioCommand {
        self.playback = Playback::Paused;
        AudioCommand::Pause
    }
}
