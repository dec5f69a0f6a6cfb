//! Location Input Component
//!
//! Manual coordinate entry plus debounced city search. Emits a chosen
//! coordinate upward via `on_submit`; never mutates dashboard state
//! directly.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api::geocode::{self, CitySuggestion};
use crate::state::global::Coordinate;

/// First comma-separated segment of a Nominatim display name.
fn short_name(display_name: &str) -> &str {
    display_name
        .split(',')
        .next()
        .unwrap_or(display_name)
        .trim()
}

/// Location selection panel
#[component]
pub fn LocationInput(
    #[prop(into)]
    on_submit: Callback<Coordinate>,
    #[prop(into)]
    on_use_current_location: Callback<()>,
    #[prop(into)]
    current_location: Signal<Option<Coordinate>>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    is_loading: Signal<bool>,
) -> impl IntoView {
    let (latitude, set_latitude) = create_signal(String::new());
    let (longitude, set_longitude) = create_signal(String::new());
    let (search_term, set_search_term) = create_signal(String::new());
    let (suggestions, set_suggestions) = create_signal(Vec::<CitySuggestion>::new());
    let (searching, set_searching) = create_signal(false);

    // Debounce timer for search-as-you-type; replacing it cancels the
    // pending lookup.
    let pending_search = store_value(None::<Timeout>);
    // Token for dropping stale search responses.
    let search_seq = store_value(0u64);

    // Keep the fields in sync when the location changes externally
    // (map click, "use my location", initial resolution).
    create_effect(move |_| {
        if let Some(coord) = current_location.get() {
            set_latitude.set(coord.lat.to_string());
            set_longitude.set(coord.lng.to_string());
        }
    });

    let on_search_input = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        set_search_term.set(term.clone());

        let seq = search_seq.with_value(|s| *s) + 1;
        search_seq.set_value(seq);

        if !geocode::should_search(&term) {
            pending_search.set_value(None);
            set_suggestions.set(Vec::new());
            set_searching.set(false);
            return;
        }

        set_searching.set(true);
        let timeout = Timeout::new(geocode::SEARCH_DEBOUNCE_MS, move || {
            spawn_local(async move {
                let results = geocode::search_cities(&term).await;
                // Only the newest keystroke batch may apply its results. The
                // panel itself may have been disposed while the fetch was in
                // flight (the dashboard re-renders it on every location
                // change), so the token read has to tolerate disposal too.
                if search_seq.try_with_value(|s| *s) == Some(seq) {
                    set_suggestions.try_set(results);
                    set_searching.try_set(false);
                }
            });
        });
        pending_search.set_value(Some(timeout));
    };

    let on_submit_form = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Non-numeric input is silently ignored, matching the form's
        // `required`/`number` constraints.
        if let Some(coord) =
            Coordinate::parse(&latitude.get_untracked(), &longitude.get_untracked())
        {
            on_submit.call(coord);
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <form on:submit=on_submit_form class="space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    // Manual coordinate entry
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Latitude"</label>
                            <input
                                type="number"
                                step="any"
                                required
                                placeholder="Enter latitude"
                                prop:value=move || latitude.get()
                                on:input=move |ev| set_latitude.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-2 text-white
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Longitude"</label>
                            <input
                                type="number"
                                step="any"
                                required
                                placeholder="Enter longitude"
                                prop:value=move || longitude.get()
                                on:input=move |ev| set_longitude.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-2 text-white
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    // City search
                    <div class="relative">
                        <label class="block text-sm text-gray-400 mb-2">"Or search for a city"</label>
                        <input
                            type="text"
                            placeholder="Enter city name..."
                            prop:value=move || search_term.get()
                            on:input=on_search_input
                            class="w-full bg-gray-700 rounded-lg px-4 py-2 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />

                        {move || {
                            searching.get().then(|| view! {
                                <div class="text-gray-400 text-sm mt-1">"Searching..."</div>
                            })
                        }}

                        {move || {
                            let items = suggestions.get();
                            (!items.is_empty()).then(|| view! {
                                <ul class="absolute z-10 w-full mt-1 bg-gray-700 border border-gray-600
                                           rounded-lg shadow-lg max-h-60 overflow-y-auto">
                                    {items
                                        .into_iter()
                                        .map(|city| {
                                            let label = city.display_name.clone();
                                            view! {
                                                <li
                                                    class="px-4 py-2 text-sm cursor-pointer hover:bg-gray-600"
                                                    on:click=move |_| {
                                                        set_latitude.set(city.lat.to_string());
                                                        set_longitude.set(city.lon.to_string());
                                                        set_search_term
                                                            .set(short_name(&city.display_name).to_string());
                                                        set_suggestions.set(Vec::new());
                                                        on_submit.call(Coordinate::new(city.lat, city.lon));
                                                    }
                                                >
                                                    {label}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            })
                        }}
                    </div>
                </div>

                <div class="flex space-x-3">
                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-2 font-semibold transition-colors"
                    >
                        {move || if is_loading.get() { "Getting Prediction..." } else { "Get Risk Assessment" }}
                    </button>
                    <button
                        type="button"
                        on:click=move |_| on_use_current_location.call(())
                        disabled=move || is_loading.get()
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Use My Location"
                    </button>
                </div>
            </form>

            {move || {
                error.get().map(|msg| view! {
                    <div class="mt-3 text-red-400 text-sm">{msg}</div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn display_names_shorten_to_the_city() {
        assert_eq!(short_name("Bengaluru, Karnataka, India"), "Bengaluru");
        assert_eq!(short_name("Paris"), "Paris");
        assert_eq!(short_name(" Oslo , Norway"), "Oslo");
    }

    #[test]
    fn stale_search_response_after_panel_disposal_is_dropped() {
        let runtime = create_runtime();

        let (location, set_location) = create_signal(0u32);
        let captured = Rc::new(Cell::new(None::<StoredValue<u64>>));

        // The dashboard body is a dynamic view over the location, so a
        // location change disposes the mounted panel along with its stored
        // search token. An in-flight fetch continuation still holds a copy
        // of that token.
        let capture = Rc::clone(&captured);
        create_effect(move |_| {
            let _ = location.get();
            if capture.get().is_none() {
                capture.set(Some(store_value(1u64)));
            }
        });

        // Map click while the search response is still in flight.
        set_location.set(1);

        // The continuation's stale check must observe disposal and bail,
        // never panic the reactive system.
        let token = captured.get().unwrap();
        assert_eq!(token.try_with_value(|s| *s), None);

        runtime.dispose();
    }
}
