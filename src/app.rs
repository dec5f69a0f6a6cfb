//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, BackendStatus, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Resolve the initial location and check backend health once on mount.
    let init_state = state.clone();
    create_effect(move |_| init_state.init());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with backend status and last prediction time
                <Footer />
            </div>
        </Router>
    }
}

/// Footer component showing backend status and activity
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Backend status
                <div class="flex items-center space-x-2">
                    {move || {
                        match state.backend_status.get() {
                            BackendStatus::Healthy => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Backend healthy"</span>
                                </span>
                            }
                                .into_view(),
                            BackendStatus::Error => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Backend unreachable"</span>
                                </span>
                            }
                                .into_view(),
                            BackendStatus::Checking => view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                    <span>"Checking backend..."</span>
                                </span>
                            }
                                .into_view(),
                        }
                    }}
                </div>

                // Last prediction time
                <div class="text-gray-400">
                    {move || {
                        state
                            .last_updated
                            .get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last prediction: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "No prediction yet".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }
                            .into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🗺️"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
