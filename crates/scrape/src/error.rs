// ABOUTME: Error types for timeline scraping.
// ABOUTME: Provides ScrapeError with Malformed and Selector variants plus convenience constructors.

use thiserror::Error;

/// Errors that can occur while configuring or running the scraper.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A candidate container is missing a required field, or carries one that
    /// cannot be interpreted. This is the routine outcome for elements that
    /// match the container class without being posts (ads, follow widgets);
    /// the scanner recovers by skipping the candidate.
    #[error("malformed post container: {0}")]
    Malformed(String),

    /// A configured class name does not form a valid CSS selector.
    #[error("invalid selector: {0}")]
    Selector(String),
}

impl ScrapeError {
    /// Creates a Malformed error for a required element that was not found.
    pub fn missing(what: impl std::fmt::Display) -> Self {
        ScrapeError::Malformed(format!("missing {}", what))
    }

    /// Creates a Malformed error with a custom message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        ScrapeError::Malformed(msg.into())
    }

    /// Returns true if this is a Malformed error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ScrapeError::Malformed(_))
    }
}
