//! Expense Form Component
//!
//! Entry form for a new expense, doubling as the edit form when a record
//! is staged from the table. Validation runs locally before any request
//! is made; a failed submit leaves the field contents intact.

use chrono::NaiveDate;
use leptos::*;

use crate::api;
use crate::state::global::{AppState, Category, NewExpense};
use crate::state::session::Session;

/// Upper bound on the optional notes field
pub const NOTES_MAX_LEN: usize = 500;

/// Per-field string state for the in-progress entry. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub title: String,
    pub category: String,
    pub notes: String,
    pub date: String,
}

impl ExpenseDraft {
    /// Check the draft and normalize it into a request payload.
    ///
    /// Returns the first problem found as a single inline message.
    pub fn validate(&self, today: NaiveDate) -> Result<NewExpense, String> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| "Enter a valid amount".to_string())?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err("Amount must be greater than zero".to_string());
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }

        let category =
            Category::parse(&self.category).ok_or_else(|| "Choose a category".to_string())?;

        let notes = self.notes.trim();
        if notes.chars().count() > NOTES_MAX_LEN {
            return Err(format!("Notes must be at most {} characters", NOTES_MAX_LEN));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Enter a valid date".to_string())?;
        if date > today {
            return Err("Date cannot be in the future".to_string());
        }

        Ok(NewExpense {
            title: title.to_string(),
            amount,
            category,
            date,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Expense entry form component
#[component]
pub fn ExpenseForm() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<AppState>().expect("AppState not found");

    let (amount, set_amount) = create_signal(String::new());
    let (title, set_title) = create_signal(String::new());
    let (category, set_category) = create_signal(Category::Food.as_str().to_string());
    let (notes, set_notes) = create_signal(String::new());
    let (date, set_date) = create_signal(today().to_string());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let reset_fields = move || {
        set_amount.set(String::new());
        set_title.set(String::new());
        set_category.set(Category::Food.as_str().to_string());
        set_notes.set(String::new());
        set_date.set(today().to_string());
    };

    // Stage a record selected for editing into the fields
    create_effect(move |_| {
        if let Some(expense) = state.editing.get() {
            set_amount.set(expense.amount.to_string());
            set_title.set(expense.title.clone());
            set_category.set(expense.category.as_str().to_string());
            set_notes.set(expense.notes.clone().unwrap_or_default());
            set_date.set(expense.date.to_string());
            set_error.set(None);
        }
    });

    let cancel_edit = move |_| {
        state.editing.set(None);
        set_error.set(None);
        reset_fields();
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ExpenseDraft {
            amount: amount.get(),
            title: title.get(),
            category: category.get(),
            notes: notes.get(),
            date: date.get(),
        };

        let payload = match draft.validate(today()) {
            Ok(payload) => payload,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };

        let Some(token) = session.token() else {
            return;
        };

        set_error.set(None);
        set_submitting.set(true);

        let editing = state.editing.get_untracked();
        spawn_local(async move {
            let result = match &editing {
                Some(expense) => api::update_expense(&token, expense.id, &payload).await,
                None => api::create_expense(&token, &payload).await,
            };

            match result {
                Ok(_) => {
                    state.show_success(if editing.is_some() {
                        "Expense updated"
                    } else {
                        "Expense added"
                    });
                    reset_fields();
                    state.editing.set(None);
                    state.reload();
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Amount
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                <input
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Title
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                <input
                    type="text"
                    placeholder="e.g., Groceries"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Category
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                <select
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                    prop:value=move || category.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! {
                            <option value=c.as_str()>{c.label()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            // Notes
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Notes (optional)"</label>
                <textarea
                    placeholder="Anything worth remembering"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 h-20 resize-none
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Date
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Date"</label>
                <input
                    type="date"
                    max=today().to_string()
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Inline error
            {move || {
                error.get().map(|msg| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300
                                rounded-lg px-4 py-3 text-sm">
                        {msg}
                    </div>
                })
            }}

            <div class="flex space-x-3">
                {move || {
                    state.editing.get().map(|_| view! {
                        <button
                            type="button"
                            on:click=cancel_edit
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                    })
                }}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    {move || {
                        let editing = state.editing.get().is_some();
                        match (editing, submitting.get()) {
                            (true, true) => "Saving...",
                            (true, false) => "Save Changes",
                            (false, true) => "Adding...",
                            (false, false) => "Add Expense",
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ExpenseDraft {
        ExpenseDraft {
            amount: "50.5".to_string(),
            title: "Lunch".to_string(),
            category: "food".to_string(),
            notes: String::new(),
            date: "2024-01-01".to_string(),
        }
    }

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_valid_draft_normalizes() {
        let draft = ExpenseDraft {
            amount: " 50.5 ".to_string(),
            title: "  Lunch  ".to_string(),
            notes: "  at the corner place  ".to_string(),
            ..valid_draft()
        };

        let payload = draft.validate(jan_15()).unwrap();
        assert_eq!(payload.amount, 50.5);
        assert_eq!(payload.title, "Lunch");
        assert_eq!(payload.category, Category::Food);
        assert_eq!(payload.date.to_string(), "2024-01-01");
        assert_eq!(payload.notes.as_deref(), Some("at the corner place"));
    }

    #[test]
    fn test_empty_notes_become_none() {
        let draft = ExpenseDraft {
            notes: "   ".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(jan_15()).unwrap().notes, None);
    }

    #[test]
    fn test_amount_must_be_present_and_numeric() {
        for bad in ["", "   ", "abc", "12,50"] {
            let draft = ExpenseDraft {
                amount: bad.to_string(),
                ..valid_draft()
            };
            assert_eq!(draft.validate(jan_15()).unwrap_err(), "Enter a valid amount");
        }
    }

    #[test]
    fn test_amount_must_be_strictly_positive() {
        for bad in ["0", "0.0", "-12.5", "NaN"] {
            let draft = ExpenseDraft {
                amount: bad.to_string(),
                ..valid_draft()
            };
            assert_eq!(
                draft.validate(jan_15()).unwrap_err(),
                "Amount must be greater than zero"
            );
        }
    }

    #[test]
    fn test_title_is_required() {
        let draft = ExpenseDraft {
            title: "   ".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(jan_15()).unwrap_err(), "Title is required");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let draft = ExpenseDraft {
            category: "groceries".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(jan_15()).unwrap_err(), "Choose a category");
    }

    #[test]
    fn test_notes_length_cap() {
        let draft = ExpenseDraft {
            notes: "x".repeat(NOTES_MAX_LEN + 1),
            ..valid_draft()
        };
        assert_eq!(
            draft.validate(jan_15()).unwrap_err(),
            "Notes must be at most 500 characters"
        );

        let draft = ExpenseDraft {
            notes: "x".repeat(NOTES_MAX_LEN),
            ..valid_draft()
        };
        assert!(draft.validate(jan_15()).is_ok());
    }

    #[test]
    fn test_date_must_parse() {
        for bad in ["", "01/15/2024", "2024-13-01"] {
            let draft = ExpenseDraft {
                date: bad.to_string(),
                ..valid_draft()
            };
            assert_eq!(draft.validate(jan_15()).unwrap_err(), "Enter a valid date");
        }
    }

    #[test]
    fn test_date_cannot_be_in_the_future() {
        let draft = ExpenseDraft {
            date: "2024-01-16".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            draft.validate(jan_15()).unwrap_err(),
            "Date cannot be in the future"
        );

        // Today itself is fine
        let draft = ExpenseDraft {
            date: "2024-01-15".to_string(),
            ..valid_draft()
        };
        assert!(draft.validate(jan_15()).is_ok());
    }
}
