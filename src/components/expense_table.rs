//! Expense Table Component
//!
//! Renders the fetched collection as rows with delete and edit actions.
//! Deletion asks for confirmation and relies on the subsequent re-fetch to
//! drop the row; nothing is removed optimistically.

use leptos::*;

use crate::api;
use crate::state::global::{AppState, Expense};
use crate::state::session::Session;

/// Expense table component
#[component]
pub fn ExpenseTable() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            let expenses = state.expenses.get();
            if expenses.is_empty() {
                view! {
                    <p class="text-gray-400 text-center py-6">
                        "No expenses yet. Add your first expense!"
                    </p>
                }
                .into_view()
            } else {
                view! {
                    <div class="overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-gray-400 border-b border-gray-700">
                                    <th class="py-2 pr-4">"Amount"</th>
                                    <th class="py-2 pr-4">"Title"</th>
                                    <th class="py-2 pr-4">"Category"</th>
                                    <th class="py-2 pr-4">"Notes"</th>
                                    <th class="py-2 pr-4">"Date"</th>
                                    <th class="py-2 text-center">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {expenses
                                    .into_iter()
                                    .map(|expense| view! { <ExpenseRow expense=expense /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_view()
            }
        }}
    }
}

/// Single expense row
#[component]
fn ExpenseRow(expense: Expense) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<AppState>().expect("AppState not found");

    let (deleting, set_deleting) = create_signal(false);

    let expense_for_edit = expense.clone();
    let stage_edit = move |_| {
        state.editing.set(Some(expense_for_edit.clone()));
    };

    let id = expense.id;
    let title_for_confirm = expense.title.clone();
    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete \"{}\"?", title_for_confirm))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(token) = session.token() else {
            return;
        };

        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_expense(&token, id).await {
                Ok(()) => {
                    state.unstage_deleted(id);
                    state.show_success("Expense deleted");
                    state.reload();
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_deleting.set(false);
        });
    };

    view! {
        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-700/40 transition-colors">
            <td class="py-3 pr-4 font-mono">{expense.amount.to_string()}</td>
            <td class="py-3 pr-4">{expense.title.clone()}</td>
            <td class="py-3 pr-4 capitalize">{expense.category.label()}</td>
            <td class="py-3 pr-4 text-gray-400">
                {expense.notes.clone().unwrap_or_default()}
            </td>
            <td class="py-3 pr-4 text-gray-400">{expense.date.to_string()}</td>
            <td class="py-3 text-center">
                <div class="flex items-center justify-center space-x-2">
                    <button
                        on:click=stage_edit
                        class="text-primary-400 hover:underline text-xs font-semibold"
                    >
                        "Edit"
                    </button>
                    <button
                        on:click=on_delete
                        disabled=move || deleting.get()
                        class="text-red-400 hover:underline disabled:text-gray-500
                               text-xs font-semibold"
                    >
                        {move || if deleting.get() { "..." } else { "Delete" }}
                    </button>
                </div>
            </td>
        </tr>
    }
}
