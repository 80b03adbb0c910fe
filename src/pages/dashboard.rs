//! Dashboard Page
//!
//! Expense entry form next to the expense table. Re-fetches the whole
//! collection on mount and whenever the refresh counter is bumped.

use leptos::*;

use crate::api;
use crate::components::{ExpenseForm, ExpenseTable, Loading};
use crate::state::global::{total_amount, AppState};
use crate::state::session::Session;

/// Sequence number for the next list fetch
fn next_seq(current: u32) -> u32 {
    current.wrapping_add(1)
}

/// A response is applied only if no newer fetch was issued meanwhile
fn is_latest(seq: u32, current: u32) -> bool {
    seq == current
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<AppState>().expect("AppState not found");

    let (loading, set_loading) = create_signal(true);
    let (fetch_error, set_fetch_error) = create_signal(None::<String>);
    // Monotonic sequence so a stale response never overwrites a newer one
    let fetch_seq = create_rw_signal(0u32);

    create_effect(move |_| {
        let _ = state.refresh_counter.get();
        let Some(token) = session.token() else {
            return;
        };

        let seq = next_seq(fetch_seq.get_untracked());
        fetch_seq.set(seq);
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_expenses(&token).await;

            // Another fetch was issued in the meantime; drop this response
            if !is_latest(seq, fetch_seq.get_untracked()) {
                return;
            }

            match result {
                Ok(expenses) => {
                    state.expenses.set(expenses);
                    set_fetch_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch expenses: {}", e).into(),
                    );
                    set_fetch_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your expenses at a glance"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                // Entry form
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">
                        {move || {
                            if state.editing.get().is_some() {
                                "Edit Expense"
                            } else {
                                "Add Expense"
                            }
                        }}
                    </h2>
                    <ExpenseForm />
                </section>

                // Expense list
                <section class="bg-gray-800 rounded-xl p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold">"Expenses"</h2>
                        <span class="text-gray-400 text-sm">
                            {move || {
                                let total = state.expenses.with(|e| total_amount(e));
                                format!("Total: {:.2}", total)
                            }}
                        </span>
                    </div>

                    {move || {
                        if loading.get() {
                            view! { <Loading /> }.into_view()
                        } else if let Some(msg) = fetch_error.get() {
                            view! {
                                <div class="text-red-400 text-center py-6">{msg}</div>
                            }
                            .into_view()
                        } else {
                            view! { <ExpenseTable /> }.into_view()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_response_is_dropped() {
        // Two fetches issued back to back: only the second may apply
        let first = next_seq(0);
        let second = next_seq(first);

        assert!(!is_latest(first, second));
        assert!(is_latest(second, second));
    }

    #[test]
    fn test_seq_survives_wraparound() {
        let seq = next_seq(u32::MAX);
        assert_eq!(seq, 0);
        assert!(is_latest(seq, seq));
        assert!(!is_latest(u32::MAX, seq));
    }
}
