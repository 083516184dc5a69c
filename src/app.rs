//! App Root Component
//!
//! Wires configuration, global state, the API client, and the form together.

use leptos::*;

use crate::api::MedicationApi;
use crate::auth::IdentityClient;
use crate::components::{MedicationForm, Toast};
use crate::config::AppConfig;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Login is only wired up when an app id is configured
    let identity = config.login_app_id.clone().map(IdentityClient::new);

    if let Some(identity) = identity.clone() {
        let state = state.clone();
        spawn_local(async move {
            match identity.ensure_ready().await {
                Ok(()) => {
                    if !identity.logged_in() {
                        identity.redirect_login();
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&e.clone().into());
                    state.show_error(&e);
                }
            }
        });
    }

    provide_context(MedicationApi::new(&config, identity));

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <main class="max-w-xl mx-auto px-4 py-12">
                <header class="mb-8">
                    <h1 class="text-3xl font-bold">"Pillbox"</h1>
                    <p class="text-gray-400 mt-1">"Register a medication schedule"</p>
                </header>

                <section class="bg-gray-800 rounded-xl p-6">
                    <MedicationForm />
                </section>
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
