//! Reusable UI components.

pub mod key_value_table;
pub mod panel_body;
pub mod resource_panel;
pub mod session_panel;
