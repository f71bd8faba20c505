//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod error_panel;
pub mod loading;
pub mod nav;
pub mod rate_badge;

pub use error_panel::ErrorPanel;
pub use loading::Loading;
pub use nav::Nav;
pub use rate_badge::RateBadge;
