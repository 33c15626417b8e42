//! Page components, one per routed view.

pub mod dashboard;
pub mod links;
pub mod login;
pub mod register;
pub mod settings;
pub mod visits;
