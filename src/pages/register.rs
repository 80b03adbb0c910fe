//! Register Page
//!
//! Creates a new account. Registration never logs the user in; on success
//! the user navigates back to the login screen themselves.

use leptos::*;

use crate::api;

/// Registration screen component
#[component]
pub fn Register(on_go_to_login: impl Fn() + 'static) -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();

        if user.is_empty() || pass.is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }

        set_error.set(None);
        set_success.set(None);
        set_loading.set(true);

        spawn_local(async move {
            match api::register(&user, &pass).await {
                Ok(()) => {
                    set_success.set(Some(
                        "Registration successful! You can now log in.".to_string(),
                    ));
                    set_username.set(String::new());
                    set_password.set(String::new());
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="flex-1 flex items-center justify-center px-4">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md">
                <h1 class="text-3xl font-bold text-center mb-6">"Register"</h1>

                <form on:submit=on_submit class="space-y-4">
                    // Username
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Password
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    {move || {
                        error.get().map(|msg| view! {
                            <div class="bg-red-900/40 border border-red-700 text-red-300
                                        rounded-lg px-4 py-3 text-sm">
                                {msg}
                            </div>
                        })
                    }}

                    {move || {
                        success.get().map(|msg| view! {
                            <div class="bg-green-900/40 border border-green-700 text-green-300
                                        rounded-lg px-4 py-3 text-sm">
                                {msg}
                            </div>
                        })
                    }}

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="mt-6 text-center">
                    <button
                        on:click=move |_| on_go_to_login()
                        class="text-primary-400 hover:underline text-sm"
                    >
                        "Already have an account? Log in"
                    </button>
                </div>
            </div>
        </div>
    }
}
