//! Loading Component
//!
//! Loading spinners shown while a prediction is in flight.

use leptos::*;

/// Centered loading spinner with an optional message
#[component]
pub fn Loading(
    #[prop(optional)]
    message: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-4">
            <div class="loading-spinner w-8 h-8" />
            {message.map(|m| view! { <p class="text-gray-400">{m}</p> })}
        </div>
    }
}
