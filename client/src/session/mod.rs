//! Session resolution and the capabilities it depends on.
//!
//! SYSTEM CONTEXT
//! ==============
//! `resolver` owns the probe/refresh/retry machine, `sink` carries its
//! transitions to the UI, `view` projects state for rendering, `redirect`
//! handles the explicit login action and `location` abstracts the browser.

pub mod location;
pub mod redirect;
pub mod resolver;
pub mod sink;
pub mod view;
