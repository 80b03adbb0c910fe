//! Navigation Component
//!
//! Header bar with brand and the logout control.

use leptos::*;

use crate::state::global::AppState;
use crate::state::session::Session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<AppState>().expect("AppState not found");

    let log_out = move |_| {
        state.editing.set(None);
        state.expenses.set(Vec::new());
        session.log_out();
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"💸"</span>
                        <span class="text-xl font-bold text-white">"Outlay"</span>
                    </div>

                    <div class="flex items-center space-x-4">
                        <span class="text-gray-400 text-sm">"Welcome!"</span>
                        <button
                            on:click=log_out
                            class="px-3 py-1 bg-red-900/40 hover:bg-red-900/70 text-red-300
                                   border border-red-800 rounded text-xs font-semibold
                                   transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
