//! The scoring collaborator interface.

use chrono::NaiveDate;

use crate::error::BackendError;
use crate::types::Gender;

/// Borrowed view of an `online_score` request handed to the backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreQuery<'a> {
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

/// External collaborator computing scores and interest lists.
///
/// Implementations own whatever store they need; the dispatcher holds a
/// shared read-only handle, never mutates it, and treats both operations
/// as opaque synchronous lookups. Interests are looked up per client id,
/// one call each.
pub trait ScoringBackend: Send + Sync {
    fn score(&self, query: &ScoreQuery<'_>) -> Result<f64, BackendError>;

    fn interests(&self, client_id: i64) -> Result<Vec<String>, BackendError>;
}
