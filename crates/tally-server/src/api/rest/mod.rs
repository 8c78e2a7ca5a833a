//! REST API surface.

mod extractors;
mod handlers;
mod router;
mod types;


pub use router::create_router;
pub use types::{ApiEnvelope, AppState, HealthResponse};
