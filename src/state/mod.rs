//! State Management
//!
//! Session store and app-wide reactive state.

pub mod global;
pub mod session;

pub use global::{provide_app_state, total_amount, AppState, Category, Expense, NewExpense};
pub use session::Session;
