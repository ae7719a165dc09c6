//! Top-level facade crate for bodytrack.
//!
//! Re-exports the domain core and the HTTP server library so users can depend on a single crate.

pub mod core {
    pub use bodytrack_core::*;
}

pub mod server {
    pub use bodytrack_server::*;
}
