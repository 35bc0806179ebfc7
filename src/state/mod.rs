//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `designs`) so components depend on
//! small focused models. Both are plain structs held in `RwSignal`s.

pub mod auth;
pub mod designs;
