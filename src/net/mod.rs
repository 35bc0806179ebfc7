//! Networking modules for the designs backend and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the designs backend, `auth` wraps the
//! identity provider, and `types` defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod types;
