// ABOUTME: Core scraping library for birdfeed: turns a timeline HTML page into post records.
// ABOUTME: Re-exports the public API: Scanner, ScannerBuilder, ScrapeOptions, Post, ScrapeError.

//! birdfeed-scrape - extracts post records from a scraped timeline page.
//!
//! This crate holds the only real parsing logic in the system: locating post
//! containers in an HTML document, pulling structured fields out of each, and
//! normalizing the embedded body markup (relative links, decorative wrapper
//! tags, placeholder sigils) into canonical absolute-URL HTML. It performs no
//! I/O; callers hand it a page body and receive records.
//!
//! # Example
//!
//! ```
//! use birdfeed_scrape::{Scanner, ScrapeError};
//!
//! fn main() -> Result<(), ScrapeError> {
//!     let scanner = Scanner::builder().build()?;
//!     let posts = scanner.scan("<html><body></body></html>");
//!     assert!(posts.is_empty());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod options;
pub mod scan;

pub use crate::error::ScrapeError;
pub use crate::models::{iso_timestamp, Post};
pub use crate::options::{ScannerBuilder, ScrapeOptions};
pub use crate::scan::Scanner;
