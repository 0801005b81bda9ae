//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat` message model, `session` request
//! lifecycle, `loading` per-operation flags) so components can depend on
//! small focused models.

pub mod chat;
pub mod loading;
pub mod session;
