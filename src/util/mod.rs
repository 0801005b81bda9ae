//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate clock/identifier and display-formatting concerns
//! from session and component logic so they stay testable off the browser.

pub mod clock;
pub mod date;
