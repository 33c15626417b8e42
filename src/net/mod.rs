//! Network layer: interceptors, endpoint wrappers, wire types, errors.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
