//! HTTP routers for both deployment variants.
//!
//! The handlers are a thin translation layer: deserialize the payload,
//! call the matching [`Keeper`] operation, serialize the result. Error
//! translation to HTTP status codes lives in [`errors`].

use std::sync::Arc;

use jardim_core::Keeper;

pub mod encyclopedia;
pub mod errors;
pub mod garden;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub keeper: Arc<Keeper>,
}
