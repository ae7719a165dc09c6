//! bodytrack server library entry.
//!
//! Wires config, the in-memory store, the JSON API and the operational
//! endpoints into one axum application. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod cors;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
