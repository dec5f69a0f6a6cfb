//! Voice Alert Component
//!
//! Speaks the alert text for MEDIUM/HIGH risk and offers a replay button.
//! All speech goes through [`SpeechController`], which cancels any
//! in-progress utterance first, and cleanup cancels outstanding speech so
//! a superseded alert never keeps talking.

use leptos::*;

use crate::state::global::RiskLevel;
use crate::state::speech::{should_speak, SpeechController};

/// Voice alert card
#[component]
pub fn VoiceAlert(
    #[prop(into)]
    alert: String,
    risk_level: RiskLevel,
) -> impl IntoView {
    let speech = SpeechController::new();

    let speech_for_effect = speech.clone();
    let alert_for_effect = alert.clone();
    create_effect(move |_| {
        if should_speak(risk_level) {
            speech_for_effect.speak(&alert_for_effect);
        }
    });

    // The dashboard remounts this component when the prediction changes,
    // so cleanup also covers alert/risk prop changes.
    let speech_for_cleanup = speech.clone();
    on_cleanup(move || speech_for_cleanup.cancel());

    let alert_for_replay = alert.clone();
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-2">"Voice Alert"</h3>
            <p class="text-gray-300 mb-4">{alert}</p>
            <button
                on:click=move |_| speech.speak(&alert_for_replay)
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                       text-sm font-medium transition-colors"
            >
                "🔊 Play Alert"
            </button>
        </div>
    }
}
