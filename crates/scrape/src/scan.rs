// ABOUTME: The Scanner: walks a full document for post containers and drives extraction per candidate.
// ABOUTME: Total operation; malformed candidates are logged at debug level and skipped.

use scraper::Html;

use crate::error::ScrapeError;
use crate::extract::{extract_post, SelectorSet};
use crate::models::Post;
use crate::options::{ScannerBuilder, ScrapeOptions};

/// Scans timeline documents for posts.
///
/// Construction compiles the configured selector vocabulary once; a built
/// Scanner is immutable and safe to share across threads and documents.
pub struct Scanner {
    opts: ScrapeOptions,
    selectors: SelectorSet,
}

impl Scanner {
    /// Create a Scanner from options, compiling its selectors.
    pub fn new(opts: ScrapeOptions) -> Result<Self, ScrapeError> {
        let selectors = SelectorSet::compile(&opts)?;
        Ok(Self { opts, selectors })
    }

    /// Create a ScannerBuilder with default options.
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// The options this Scanner was built with.
    pub fn options(&self) -> &ScrapeOptions {
        &self.opts
    }

    /// Extract every post from a document, in document order.
    ///
    /// The container class is a coarse heuristic that also matches non-post
    /// content; candidates that fail extraction are skipped silently. An
    /// input with no valid candidate yields an empty vec, never an error.
    pub fn scan(&self, html: &str) -> Vec<Post> {
        let document = Html::parse_document(html);
        let mut posts = Vec::new();
        for container in document.select(&self.selectors.container) {
            match extract_post(container, &self.opts, &self.selectors) {
                Ok(post) => posts.push(post),
                Err(err) => {
                    tracing::debug!("skipping container: {}", err);
                }
            }
        }
        posts
    }
}
