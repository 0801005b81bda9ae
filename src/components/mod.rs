//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session snapshot, stores and HTTP client from the
//! context providers set up in [`crate::app::App`] and never own state that
//! outlives them.

pub mod chat_panel;
pub mod favorites_list;
pub mod feedback_form;
pub mod law_search;
