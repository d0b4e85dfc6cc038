//! Client state shared between network tasks and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each top-level concern (session, info panel, cookie panel) owns its own
//! slice; nothing here is shared across concerns.

pub mod entries;
pub mod resource;
pub mod session;
