//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`) so the network layer can
//! depend on narrow handles instead of the whole UI tree.

pub mod session;
pub mod toast;
