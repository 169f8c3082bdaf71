//! Library surface of the jardim server.
//!
//! The binary in `main.rs` is a thin wrapper around this crate; the
//! routers are exposed here so integration tests can drive them without
//! going through a TCP socket.

pub mod args;
pub mod http;
