//! Environment seams: persistent storage, credentials, and navigation.

pub mod credentials;
pub mod navigator;
pub mod storage;
