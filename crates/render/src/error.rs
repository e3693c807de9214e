// ABOUTME: Error types for feed rendering.
// ABOUTME: Provides RenderError with Xml and Json variants and Display-based constructors.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while serializing posts into a feed.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the XML document failed.
    #[error("failed to write feed XML: {0}")]
    Xml(String),

    /// Serializing posts to JSON failed.
    #[error("failed to serialize posts: {0}")]
    Json(String),
}

impl RenderError {
    /// Creates an Xml error from an underlying writer error.
    pub fn xml(err: impl fmt::Display) -> Self {
        RenderError::Xml(err.to_string())
    }

    /// Creates a Json error from an underlying serde_json error.
    pub fn json(err: impl fmt::Display) -> Self {
        RenderError::Json(err.to_string())
    }
}
