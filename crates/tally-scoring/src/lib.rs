//! tally-scoring - the in-process scoring collaborator.
//!
//! Implements [`ScoringBackend`] over an in-memory store: scores are a
//! presence-weighted sum over the query's fields, interests come from
//! seeded per-client profiles when present and from a random draw over a
//! fixed catalog otherwise.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use tally_core::{BackendError, ScoreQuery, ScoringBackend};

/// Interest catalog sampled for clients without a seeded profile.
const CATALOG: &[&str] = &[
    "cars", "pets", "travel", "hi-tech", "sport", "music", "books", "tv", "cinema", "geek",
    "otus",
];

/// Number of interests reported per client.
const INTERESTS_PER_CLIENT: usize = 2;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    interests: HashMap<i64, Vec<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Seed a fixed interest list for a client (fixtures and tests).
    pub fn with_interests(mut self, client_id: i64, interests: Vec<String>) -> Self {
        self.interests.insert(client_id, interests);
        self
    }
}

impl ScoringBackend for MemoryBackend {
    fn score(&self, query: &ScoreQuery<'_>) -> Result<f64, BackendError> {
        Ok(weigh(query))
    }

    fn interests(&self, client_id: i64) -> Result<Vec<String>, BackendError> {
        if let Some(found) = self.interests.get(&client_id) {
            return Ok(found.clone());
        }
        let mut rng = rand::thread_rng();
        Ok(CATALOG
            .choose_multiple(&mut rng, INTERESTS_PER_CLIENT)
            .map(|interest| (*interest).to_string())
            .collect())
    }
}

/// Presence-weighted score: phone and email weigh 1.5 each, a full
/// birthday/gender pair another 1.5, a full name pair 0.5.
fn weigh(query: &ScoreQuery<'_>) -> f64 {
    let mut score = 0.0;
    if query.phone.is_some() {
        score += 1.5;
    }
    if query.email.is_some() {
        score += 1.5;
    }
    if query.birthday.is_some() && query.gender.is_some() {
        score += 1.5;
    }
    if query.first_name.is_some() && query.last_name.is_some() {
        score += 0.5;
    }
    score
}
