//! Product Manage Page (form + table on one screen)
//!
//! Simplified MVVM pattern implementation:
//! - state.rs: pure form state machine, rows and row actions
//! - model.rs: gateway over the REST API and browser dialogs
//! - view_model.rs: ViewModel with commands over reactive state
//! - view.rs: Leptos component (pure UI)

mod model;
pub mod state;
mod view;
mod view_model;

pub use view::ProductManagePage;
