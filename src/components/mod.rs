//! Shared UI components.

pub mod nav_bar;
pub mod toast_host;
