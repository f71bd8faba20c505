//! Pages
//!
//! Top-level page components for each route.

pub mod country;
pub mod dashboard;

pub use country::Country;
pub use dashboard::Dashboard;
