//! Networking modules for the answering service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `types` defines the wire schema and its mapping
//! into the message model, and `error` classifies failures into the closed
//! set of user-facing outcomes.

pub mod api;
pub mod error;
pub mod types;
