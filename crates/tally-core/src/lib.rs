//! tally-core - field validation, request models and method dispatch for
//! the tally scoring API.
//!
//! The crate is transport-agnostic: the HTTP layer hands [`dispatch`] a raw
//! JSON body plus a [`CallContext`] and gets back a (payload, status)
//! [`Reply`]; numeric computation is delegated to whatever
//! [`ScoringBackend`] the caller injects.

pub mod auth;
pub mod backend;
pub mod dispatch;
pub mod error;
pub mod fields;
pub mod requests;
pub mod types;

// Re-export commonly used types
pub use backend::{ScoreQuery, ScoringBackend};
pub use dispatch::{dispatch, CallContext, Method, Reply};
pub use error::{BackendError, FieldError, ResponseCode};
pub use types::Gender;
