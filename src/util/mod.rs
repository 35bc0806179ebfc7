//! Utility helpers shared across panel modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability.

pub mod auth;
pub mod columns;
pub mod dialog;
pub mod timeout;
