pub mod compose;
pub mod cooljugator;

pub use cooljugator::{Conjugator, BASE_URL};

use thiserror::Error;

/// Everything a lookup can report back to the interaction surface.
///
/// The `Display` impl of each variant is the exact text the surface renders
/// in place of content, so callers only ever need `err.to_string()`.
#[derive(Debug, Error)]
pub enum ConjugateError {
    /// Cooperative short-circuit for an empty query, not a real failure.
    #[error("Please enter a verb")]
    EmptyVerb,

    /// The conjugation page itself could not be fetched (network error or
    /// non-success status). Per-stylesheet failures never end up here.
    #[error("Error fetching data: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The page came back fine but holds no conjugation container.
    #[error("No conjugation data found for this verb")]
    NoConjugationData,

    #[error("An error occurred: {0}")]
    BadUrl(#[from] url::ParseError),
}
