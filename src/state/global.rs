//! Global Application State
//!
//! Reactive state management using Leptos signals.

use chrono::NaiveDate;
use leptos::*;

/// App-wide state provided to all components.
///
/// The expense collection is a full-replace cache: every fetch cycle swaps
/// it wholesale, nothing is patched incrementally.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Expenses from the API, in server order
    pub expenses: RwSignal<Vec<Expense>>,
    /// Bumped to force the dashboard to re-fetch the collection
    pub refresh_counter: RwSignal<u32>,
    /// Record currently staged in the form for editing
    pub editing: RwSignal<Option<Expense>>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// An expense record as the API returns it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    #[serde(deserialize_with = "amount_from_string_or_number")]
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for creating or updating an expense.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fixed expense categories, matching the API's choice list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Travel,
    Utilities,
    Misc,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Travel,
        Category::Utilities,
        Category::Misc,
    ];

    /// Wire value, as sent to and received from the API
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Utilities => "utilities",
            Category::Misc => "misc",
        }
    }

    /// Human-readable label for the form select and the table
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Utilities => "Utilities",
            Category::Misc => "Misc",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "food" => Some(Category::Food),
            "travel" => Some(Category::Travel),
            "utilities" => Some(Category::Utilities),
            "misc" => Some(Category::Misc),
            _ => None,
        }
    }
}

/// Servers that store amounts as decimals emit them as JSON strings;
/// accept both that and a plain number.
fn amount_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(value) => Ok(value),
        Amount::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Sum of the amounts in a collection
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Provide app state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        expenses: create_rw_signal(Vec::new()),
        refresh_counter: create_rw_signal(0),
        editing: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Force the dashboard to re-fetch the expense collection
    pub fn reload(&self) {
        self.refresh_counter.update(|v| *v += 1);
    }

    /// Drop the staged edit when the record it points at was deleted,
    /// so the form cannot submit an update for a dead id
    pub fn unstage_deleted(&self, id: i64) {
        if self.editing.with_untracked(|e| e.as_ref().map(|x| x.id) == Some(id)) {
            self.editing.set(None);
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, amount: f64) -> Expense {
        Expense {
            id,
            title: format!("expense {}", id),
            amount,
            category: Category::Misc,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_category_wire_format() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("groceries"), None);
    }

    #[test]
    fn test_expense_from_server_json() {
        let body = r#"[
            {"id": 1, "title": "Lunch", "amount": 50.5, "category": "food",
             "date": "2024-01-01", "notes": null},
            {"id": 2, "title": "Bus", "amount": 2.75, "category": "travel",
             "date": "2024-01-02"}
        ]"#;

        let expenses: Vec<Expense> = serde_json::from_str(body).unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].title, "Lunch");
        assert_eq!(expenses[0].amount, 50.5);
        assert_eq!(expenses[0].category, Category::Food);
        assert_eq!(expenses[0].date.to_string(), "2024-01-01");
        assert_eq!(expenses[0].notes, None);
        assert_eq!(expenses[1].notes, None);
    }

    #[test]
    fn test_new_expense_payload_shape() {
        let payload = NewExpense {
            title: "Lunch".to_string(),
            amount: 50.5,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            notes: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["title"], "Lunch");
        assert_eq!(value["amount"], 50.5);
        assert_eq!(value["category"], "food");
        assert_eq!(value["date"], "2024-01-01");
        // Absent notes are omitted, not sent as null
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount(&[]), 0.0);
        let expenses = vec![expense(1, 50.5), expense(2, 2.75), expense(3, 10.0)];
        assert_eq!(total_amount(&expenses), 63.25);
    }

    #[test]
    fn test_amount_accepts_decimal_string() {
        // Decimal-backed servers quote the amount
        let body = r#"{"id": 1, "title": "Lunch", "amount": "50.50",
                       "category": "food", "date": "2024-01-01", "notes": null}"#;
        let parsed: Expense = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.amount, 50.5);

        let body = r#"{"id": 1, "title": "Lunch", "amount": "not a number",
                       "category": "food", "date": "2024-01-01"}"#;
        assert!(serde_json::from_str::<Expense>(body).is_err());
    }

    fn test_state() -> AppState {
        AppState {
            expenses: create_rw_signal(Vec::new()),
            refresh_counter: create_rw_signal(0),
            editing: create_rw_signal(None),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    #[test]
    fn test_reload_bumps_counter_by_one() {
        let runtime = create_runtime();

        let state = test_state();
        assert_eq!(state.refresh_counter.get_untracked(), 0);
        state.reload();
        assert_eq!(state.refresh_counter.get_untracked(), 1);
        state.reload();
        assert_eq!(state.refresh_counter.get_untracked(), 2);

        runtime.dispose();
    }

    #[test]
    fn test_unstage_deleted_clears_matching_edit_only() {
        let runtime = create_runtime();

        let state = test_state();
        state.editing.set(Some(expense(1, 50.5)));

        // Deleting a different record leaves the staged edit alone
        state.unstage_deleted(2);
        assert!(state.editing.get_untracked().is_some());

        state.unstage_deleted(1);
        assert_eq!(state.editing.get_untracked(), None);

        // No-op when nothing is staged
        state.unstage_deleted(1);
        assert_eq!(state.editing.get_untracked(), None);

        runtime.dispose();
    }
}
