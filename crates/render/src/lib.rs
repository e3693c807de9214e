// ABOUTME: Feed rendering library for birdfeed: serializes posts into Atom, RSS 2.0, or JSON.
// ABOUTME: Re-exports Format, FeedMeta, RenderError, and the render dispatcher.

//! birdfeed-render - turns extracted posts into syndication feeds.
//!
//! Posts are consumed verbatim; nothing here re-derives fields or touches
//! the network. The [`render`] dispatcher picks one of the three formats.

use std::fmt;

use birdfeed_scrape::Post;

pub mod atom;
pub mod error;
pub mod json;
pub mod rss;

mod xml;

pub use crate::error::RenderError;

/// The output feed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Atom,
    Rss,
    Json,
}

impl Format {
    /// The HTTP content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Atom => "application/atom+xml",
            Format::Rss => "application/rss+xml",
            Format::Json => "application/json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::Atom => "atom",
            Format::Rss => "rss",
            Format::Json => "json",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for Format {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "rss" => Format::Rss,
            "json" => Format::Json,
            _ => Format::Atom,
        }
    }
}

/// Feed-level metadata supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct FeedMeta {
    /// Human-readable feed title.
    pub title: String,
    /// Alternate link for the feed (the scraped page), when one exists.
    pub uri: Option<String>,
}

/// Render posts in the requested format. `pretty` only affects JSON.
pub fn render(
    format: Format,
    meta: &FeedMeta,
    posts: &[Post],
    pretty: bool,
) -> Result<String, RenderError> {
    match format {
        Format::Atom => atom::render(meta, posts),
        Format::Rss => rss::render(meta, posts),
        Format::Json => json::render(posts, pretty),
    }
}
