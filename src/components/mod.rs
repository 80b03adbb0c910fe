//! UI Components
//!
//! Reusable Leptos components.

pub mod expense_form;
pub mod expense_table;
pub mod loading;
pub mod nav;
pub mod toast;

pub use expense_form::ExpenseForm;
pub use expense_table::ExpenseTable;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::Toast;
