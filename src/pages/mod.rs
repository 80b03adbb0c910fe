//! Pages
//!
//! Top-level screen components.

pub mod dashboard;
pub mod login;
pub mod register;

pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
