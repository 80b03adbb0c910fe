//! App Root Component
//!
//! Owns the session, switches between the auth screens and the dashboard,
//! and wires up the global providers. There is no router: which screen is
//! visible follows directly from the session state.

use leptos::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Login, Register};
use crate::state::global::provide_app_state;
use crate::state::session::Session;

/// Which unauthenticated screen is showing
#[derive(Clone, Copy, PartialEq)]
enum AuthScreen {
    Login,
    Register,
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Session is seeded from local storage so a reload stays logged in
    let session = Session::load();
    provide_context(session);
    provide_app_state();

    let (screen, set_screen) = create_signal(AuthScreen::Login);

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            {move || {
                if session.is_authenticated() {
                    view! {
                        <Nav />
                        <main class="flex-1 container mx-auto px-4 py-8">
                            <Dashboard />
                        </main>
                    }
                    .into_view()
                } else {
                    match screen.get() {
                        AuthScreen::Login => view! {
                            <Login on_go_to_register=move || set_screen.set(AuthScreen::Register) />
                        }
                        .into_view(),
                        AuthScreen::Register => view! {
                            <Register on_go_to_login=move || set_screen.set(AuthScreen::Login) />
                        }
                        .into_view(),
                    }
                }
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}
