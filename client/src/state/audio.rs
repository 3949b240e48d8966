//! Text-to-speech control state for one assistant bubble.
//!
//! DESIGN
//! ======
//! `idle → loading → {playing | error}`, and `error → idle` after
//! [`ERROR_RESET_MS`]. Activation is refused while loading, which is the only
//! de-duplication the client performs. Each activation bumps an attempt
//! counter so a reset timer from an earlier failure cannot clobber a later
//! attempt.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

/// How long the error icon (and its toast) stay up.
pub const ERROR_RESET_MS: u32 = 3_000;

/// Voices offered by the speech endpoint.
pub const VOICES: &[&str] = &["nova", "alloy", "echo", "fable", "onyx", "shimmer"];

/// Voice used until the user picks another.
pub const DEFAULT_VOICE: &str = "nova";

/// Phase of the audio control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AudioPhase {
    #[default]
    Idle,
    Loading,
    /// The trigger is replaced by an inline player for `url`.
    Playing { url: String },
    Error { message: String },
}

/// Audio control of one bubble.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioControl {
    pub phase: AudioPhase,
    attempt: u32,
}

/// Identifies one activation; completion and reset calls must present it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt(u32);

impl AudioControl {
    /// Try to start a synthesis request.
    ///
    /// Returns `None` (no request must be made) while loading or once the
    /// player is showing.
    pub fn activate(&mut self) -> Option<Attempt> {
        match self.phase {
            AudioPhase::Loading | AudioPhase::Playing { .. } => None,
            AudioPhase::Idle | AudioPhase::Error { .. } => {
                self.attempt += 1;
                self.phase = AudioPhase::Loading;
                Some(Attempt(self.attempt))
            }
        }
    }

    /// Audio arrived for `attempt`; show the player.
    pub fn succeed(&mut self, attempt: Attempt, url: String) -> bool {
        if !self.owns(attempt) || self.phase != AudioPhase::Loading {
            return false;
        }
        self.phase = AudioPhase::Playing { url };
        true
    }

    /// Synthesis or playback failed for `attempt`.
    pub fn fail(&mut self, attempt: Attempt, message: impl Into<String>) -> bool {
        if !self.owns(attempt) {
            return false;
        }
        self.phase = AudioPhase::Error { message: message.into() };
        true
    }

    /// Return to idle after the error delay, unless a newer attempt started.
    pub fn reset_after_error(&mut self, attempt: Attempt) -> bool {
        if !self.owns(attempt) || !matches!(self.phase, AudioPhase::Error { .. }) {
            return false;
        }
        self.phase = AudioPhase::Idle;
        true
    }

    fn owns(&self, attempt: Attempt) -> bool {
        attempt.0 == self.attempt
    }

    pub fn is_loading(&self) -> bool {
        self.phase == AudioPhase::Loading
    }

    /// Tooltip / accessible label for the trigger.
    pub fn label(&self) -> String {
        match &self.phase {
            AudioPhase::Idle | AudioPhase::Playing { .. } => "Ouvir".to_owned(),
            AudioPhase::Loading => "Carregando áudio...".to_owned(),
            AudioPhase::Error { message } => format!("Erro: {message}"),
        }
    }
}
