//! Dashboard Page
//!
//! Main view: map, location controls, and the prediction info panel. All
//! location-selection paths funnel into `GlobalState::select_location`.

use leptos::*;

use crate::components::{
    InsightsCard, Loading, LocationInput, MapView, RiskIndicator, TrafficCard, VoiceAlert,
    WeatherCard,
};
use crate::state::global::{BackendStatus, Coordinate, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let submit_state = state.clone();
    let on_submit = Callback::new(move |coord: Coordinate| submit_state.select_location(coord));

    let current_state = state.clone();
    let on_use_current_location =
        Callback::new(move |_: ()| current_state.use_current_location());

    let map_state = state.clone();
    let on_map_change = Callback::new(move |coord: Coordinate| map_state.select_location(coord));

    // Before a location exists the info panel is not mounted, so the
    // standalone selection panel has to carry validation errors too.
    let location_error = state.location_error;
    let error = state.error;
    let standalone_error =
        Signal::derive(move || panel_message(location_error.get(), error.get()));

    let body_state = state.clone();

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Traffic Accident Risk Predictor"</h1>
                <BackendStatusPill status=state.backend_status />
            </div>

            {move || {
                let state = body_state.clone();
                match state.location.get() {
                    // No location yet: just the selection panel.
                    None => view! {
                        <div class="max-w-2xl mx-auto">
                            <LocationInput
                                on_submit=on_submit
                                on_use_current_location=on_use_current_location
                                current_location=state.location
                                error=standalone_error
                                is_loading=state.loading
                            />
                        </div>
                    }
                        .into_view(),
                    Some(_) => view! {
                        <div class="grid lg:grid-cols-2 gap-6">
                            <div class="space-y-6">
                                <MapView
                                    location=state.location
                                    prediction=state.prediction
                                    on_location_change=on_map_change
                                />
                                <LocationInput
                                    on_submit=on_submit
                                    on_use_current_location=on_use_current_location
                                    current_location=state.location
                                    error=state.location_error
                                    is_loading=state.loading
                                />
                            </div>
                            <InfoPanel />
                        </div>
                    }
                        .into_view(),
                }
            }}
        </div>
    }
}

/// Message for the standalone selection panel. Geolocation failures take
/// precedence; otherwise validation/prediction errors show here, since the
/// info panel that normally renders them is not mounted yet.
fn panel_message(location_error: Option<String>, error: Option<String>) -> Option<String> {
    location_error.or(error)
}

/// Backend status pill for the header
#[component]
fn BackendStatusPill(
    #[prop(into)]
    status: Signal<BackendStatus>,
) -> impl IntoView {
    view! {
        <span class=move || {
            format!(
                "px-3 py-1 rounded-full text-sm font-medium {}",
                status.get().css_class()
            )
        }>
            {move || format!("Backend: {}", status.get().label())}
        </span>
    }
}

/// Right-hand panel: loading, error, prediction cards, or the placeholder
#[component]
fn InfoPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div>
            {move || {
                if state.loading.get() {
                    view! { <Loading message="Analyzing location..." /> }.into_view()
                } else if let Some(message) = state.error.get() {
                    let retry_state = state.clone();
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                            <h3 class="text-lg font-semibold text-red-400">"Error"</h3>
                            <p class="text-gray-300">{message}</p>
                            <button
                                on:click=move |_| retry_state.retry()
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Try Again"
                            </button>
                        </div>
                    }
                        .into_view()
                } else if let Some(prediction) = state.prediction.get() {
                    view! {
                        <div class="space-y-6">
                            <RiskIndicator insights=prediction.insights.clone() />

                            {prediction
                                .weather_data
                                .clone()
                                .map(|data| view! { <WeatherCard data=data /> })}

                            {prediction
                                .traffic_data
                                .clone()
                                .map(|data| view! { <TrafficCard data=data /> })}

                            {(!prediction.insights.insights.is_empty())
                                .then(|| view! {
                                    <InsightsCard items=prediction.insights.insights.clone() />
                                })}

                            {prediction
                                .voice_alert
                                .clone()
                                .map(|alert| view! {
                                    <VoiceAlert
                                        alert=alert
                                        risk_level=prediction.insights.risk_level
                                    />
                                })}
                        </div>
                    }
                        .into_view()
                } else {
                    view! { <NoPrediction /> }.into_view()
                }
            }}
        </div>
    }
}

/// Placeholder shown before the first prediction
#[component]
fn NoPrediction() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-gray-300">
            <p class="mb-3">"Click on the map to get an accident risk prediction"</p>
            <p class="text-gray-400 text-sm mb-2">"The prediction will show:"</p>
            <ul class="list-disc list-inside text-gray-400 text-sm space-y-1">
                <li>"Accident risk probability"</li>
                <li>"Current weather conditions"</li>
                <li>"Traffic information"</li>
                <li>"Safety insights"</li>
                <li>"Voice alerts"</li>
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_panel_surfaces_validation_errors() {
        // An out-of-range submit from the initial screen sets the
        // prediction error; with no info panel mounted yet, the selection
        // panel has to show it.
        assert_eq!(
            panel_message(None, Some("Invalid location coordinates".to_string())),
            Some("Invalid location coordinates".to_string())
        );
    }

    #[test]
    fn geolocation_failures_take_precedence() {
        assert_eq!(
            panel_message(
                Some("Location access denied.".to_string()),
                Some("Server error: 503".to_string()),
            ),
            Some("Location access denied.".to_string())
        );
        assert_eq!(panel_message(None, None), None);
    }
}
