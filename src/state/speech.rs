//! Speech synthesis wrapper.
//!
//! The browser speech engine is a single shared resource; all spoken
//! alerts go through [`SpeechController`], which cancels any in-progress
//! utterance before starting a new one so speech never overlaps.

use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

use crate::state::global::RiskLevel;

/// Slightly slower than normal for intelligibility.
const SPEECH_RATE: f32 = 0.9;

/// Spoken alerts only fire for elevated risk.
pub fn should_speak(level: RiskLevel) -> bool {
    matches!(level, RiskLevel::Medium | RiskLevel::High)
}

/// Scoped owner of the speech synthesis engine.
#[derive(Clone)]
pub struct SpeechController {
    synthesis: Option<SpeechSynthesis>,
}

impl SpeechController {
    pub fn new() -> Self {
        let synthesis = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        Self { synthesis }
    }

    /// Cancel any in-progress utterance, then speak `text`.
    pub fn speak(&self, text: &str) {
        let Some(synthesis) = &self.synthesis else {
            return;
        };
        synthesis.cancel();

        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_rate(SPEECH_RATE);
                utterance.set_pitch(1.0);
                utterance.set_volume(1.0);
                synthesis.speak(&utterance);
            }
            Err(e) => web_sys::console::error_1(&e),
        }
    }

    /// Stop whatever is currently being spoken.
    pub fn cancel(&self) {
        if let Some(synthesis) = &self.synthesis {
            synthesis.cancel();
        }
    }
}

impl Default for SpeechController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_elevated_risk_speaks() {
        assert!(!should_speak(RiskLevel::Low));
        assert!(!should_speak(RiskLevel::Unknown));
        assert!(should_speak(RiskLevel::Medium));
        assert!(should_speak(RiskLevel::High));
    }
}
