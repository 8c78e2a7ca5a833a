//! Request object model.
//!
//! [`MethodRequest`] is the signed envelope; the concrete requests bind
//! their fields from the envelope's arguments mapping in declaration
//! order, the first validation failure winning. Whole-request invariants
//! run only after every field has bound.

mod clients_interests;
mod envelope;
mod online_score;

pub use clients_interests::ClientsInterestsRequest;
pub use envelope::MethodRequest;
pub use online_score::OnlineScoreRequest;
