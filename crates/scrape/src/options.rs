// ABOUTME: Configuration for the scanner: base URL plus the markup class vocabulary.
// ABOUTME: ScannerBuilder provides a fluent API for constructing Scanner instances with custom settings.

use url::Url;

use crate::error::ScrapeError;
use crate::scan::Scanner;

/// Default origin used to absolutize relative links and build author URLs.
pub const DEFAULT_BASE_URL: &str = "https://twitter.com/";

/// Path under the base URL that serves search results.
const SEARCH_PATH: &str = "search/realtime";

/// Configuration for scanning a timeline page.
///
/// The class names describe the markup vocabulary of the scraped page; the
/// defaults match the page shape this crate targets. Tests substitute a
/// synthetic `base_url` and alternate class names.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Origin every relative link is resolved against. Should end with `/`
    /// so that joined paths land under the origin root.
    pub base_url: Url,
    /// Class marking an element as a post container.
    pub container_class: String,
    /// Class of the permalink anchor inside a container.
    pub permalink_class: String,
    /// Class of the span holding the bolded author handle.
    pub username_class: String,
    /// Class of the element holding the author display name.
    pub fullname_class: String,
    /// Class of the avatar image.
    pub avatar_class: String,
    /// Class of the body paragraph.
    pub body_class: String,
    /// Class of the timestamp span.
    pub timestamp_class: String,
    /// Attribute on the timestamp span carrying epoch seconds.
    pub timestamp_attr: String,
    /// Span classes that exist purely as presentation wrappers; the
    /// normalizer splices their children into place.
    pub unwrap_classes: Vec<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            container_class: "content".to_string(),
            permalink_class: "details".to_string(),
            username_class: "username".to_string(),
            fullname_class: "fullname".to_string(),
            avatar_class: "avatar".to_string(),
            body_class: "tweet-text".to_string(),
            timestamp_class: "_timestamp".to_string(),
            timestamp_attr: "data-time".to_string(),
            unwrap_classes: vec![
                "invisible".to_string(),
                "js-display-url".to_string(),
                "tco-ellipsis".to_string(),
            ],
        }
    }
}

impl ScrapeOptions {
    /// Absolute URL of an author's profile page. A leading `@` on the handle
    /// is accepted and stripped. Falls back to the base URL itself when the
    /// handle cannot form a path segment.
    pub fn profile_url(&self, handle: &str) -> Url {
        let handle = handle.trim_start_matches('@');
        self.base_url
            .join(handle)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Absolute URL of the search results page for `query`, with the query
    /// carried percent-encoded in the `q` parameter.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

/// Builder for constructing Scanner instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ScannerBuilder {
    opts: ScrapeOptions,
}

impl ScannerBuilder {
    /// Create a new ScannerBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: ScrapeOptions::default(),
        }
    }

    /// Set the base URL used for link absolutization and author URLs.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.opts.base_url = base_url;
        self
    }

    /// Set the post container class.
    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.opts.container_class = class.into();
        self
    }

    /// Set the permalink anchor class.
    pub fn permalink_class(mut self, class: impl Into<String>) -> Self {
        self.opts.permalink_class = class.into();
        self
    }

    /// Set the username span class.
    pub fn username_class(mut self, class: impl Into<String>) -> Self {
        self.opts.username_class = class.into();
        self
    }

    /// Set the display-name element class.
    pub fn fullname_class(mut self, class: impl Into<String>) -> Self {
        self.opts.fullname_class = class.into();
        self
    }

    /// Set the avatar image class.
    pub fn avatar_class(mut self, class: impl Into<String>) -> Self {
        self.opts.avatar_class = class.into();
        self
    }

    /// Set the body paragraph class.
    pub fn body_class(mut self, class: impl Into<String>) -> Self {
        self.opts.body_class = class.into();
        self
    }

    /// Set the timestamp span class.
    pub fn timestamp_class(mut self, class: impl Into<String>) -> Self {
        self.opts.timestamp_class = class.into();
        self
    }

    /// Set the attribute carrying epoch seconds on the timestamp span.
    pub fn timestamp_attr(mut self, attr: impl Into<String>) -> Self {
        self.opts.timestamp_attr = attr.into();
        self
    }

    /// Replace the set of presentation wrapper classes.
    pub fn unwrap_classes(mut self, classes: Vec<String>) -> Self {
        self.opts.unwrap_classes = classes;
        self
    }

    /// Build the Scanner, compiling the selector vocabulary.
    pub fn build(self) -> Result<Scanner, ScrapeError> {
        Scanner::new(self.opts)
    }
}

impl Default for ScannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url() {
        let opts = ScrapeOptions::default();
        assert_eq!(
            opts.profile_url("MerryMeats").as_str(),
            "https://twitter.com/MerryMeats"
        );
    }

    #[test]
    fn test_profile_url_strips_sigil() {
        let opts = ScrapeOptions::default();
        assert_eq!(
            opts.profile_url("@MerryMeats").as_str(),
            "https://twitter.com/MerryMeats"
        );
    }

    #[test]
    fn test_profile_url_synthetic_base() {
        let opts = ScrapeOptions {
            base_url: Url::parse("https://example.org/").unwrap(),
            ..Default::default()
        };
        assert_eq!(opts.profile_url("foo").as_str(), "https://example.org/foo");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let opts = ScrapeOptions::default();
        let url = opts.search_url("merry meats");
        assert_eq!(url.path(), "/search/realtime");
        assert_eq!(url.query(), Some("q=merry+meats"));
    }
}
