//! # infra-demo-client
//!
//! Leptos + WASM frontend for the infrastructure demo. It renders three
//! independent panels: application info, request cookies, and the current
//! user's session.
//!
//! The session panel is driven by [`session::resolver::SessionResolver`]:
//! a credentialed profile probe, at most one silent refresh on 401, at most
//! one retry, then a terminal state. Browser access (`fetch`,
//! `window.location`) sits behind traits and the `csr` feature so everything
//! except the DOM glue runs in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod session;
pub mod state;
pub mod util;
