//! Networking modules for the session flow and the informational panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoint` resolves deployment prefixes, `http` defines the outcome model
//! and client trait, `resource` loads panel data, and `browser` (behind the
//! `csr` feature) talks to `fetch`.

#[cfg(feature = "csr")]
pub mod browser;
pub mod endpoint;
pub mod http;
pub mod resource;
