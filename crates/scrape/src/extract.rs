// ABOUTME: Field extraction from one post container element.
// ABOUTME: Compiles the selector vocabulary and assembles a Post, failing on any missing field.

//! Turns a candidate container element into a [`Post`].
//!
//! Every field lookup is a fallible selector match; the first missing one
//! aborts the candidate with a single error kind. Containers that match the
//! container class without being posts fail here routinely, and the scanner
//! skips them.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::error::ScrapeError;
use crate::models::{iso_timestamp, Post};
use crate::normalize::{normalize_body, visible_text};
use crate::options::ScrapeOptions;

static BOLD: Lazy<Selector> = Lazy::new(|| Selector::parse("b").unwrap());

/// Selectors compiled once from the configured class vocabulary.
pub(crate) struct SelectorSet {
    pub container: Selector,
    pub permalink: Selector,
    pub username: Selector,
    pub fullname: Selector,
    pub avatar: Selector,
    pub body: Selector,
    pub timestamp: Selector,
}

impl SelectorSet {
    pub fn compile(opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        Ok(Self {
            container: class_selector("div", &opts.container_class)?,
            permalink: class_selector("a", &opts.permalink_class)?,
            username: class_selector("span", &opts.username_class)?,
            fullname: class_selector("", &opts.fullname_class)?,
            avatar: class_selector("img", &opts.avatar_class)?,
            body: class_selector("p", &opts.body_class)?,
            timestamp: class_selector("span", &opts.timestamp_class)?,
        })
    }
}

fn class_selector(tag: &str, class: &str) -> Result<Selector, ScrapeError> {
    let css = format!("{}.{}", tag, class);
    Selector::parse(&css).map_err(|_| ScrapeError::Selector(css.clone()))
}

/// First descendant of `scope` matching `sel`, if any.
fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// Extract one post from a container element.
///
/// Fails with [`ScrapeError::Malformed`] on any missing element or attribute
/// and on a timestamp that is not a representable integer; no partial record
/// is ever produced.
pub(crate) fn extract_post(
    container: ElementRef<'_>,
    opts: &ScrapeOptions,
    selectors: &SelectorSet,
) -> Result<Post, ScrapeError> {
    let permalink = first(container, &selectors.permalink)
        .ok_or_else(|| ScrapeError::missing("permalink anchor"))?;
    let path = permalink
        .value()
        .attr("href")
        .ok_or_else(|| ScrapeError::missing("permalink href"))?;
    let uri = opts
        .base_url
        .join(path.trim_start_matches('/'))
        .map_err(|_| ScrapeError::malformed(format!("unresolvable permalink {:?}", path)))?
        .to_string();

    let username =
        first(container, &selectors.username).ok_or_else(|| ScrapeError::missing("username"))?;
    let author_id: String = first(username, &BOLD)
        .ok_or_else(|| ScrapeError::missing("bolded handle inside username"))?
        .text()
        .collect();
    let author_uri = opts.profile_url(&author_id).to_string();

    let author_display_name = first(container, &selectors.fullname)
        .ok_or_else(|| ScrapeError::missing("fullname"))?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    let avatar_uri = first(container, &selectors.avatar)
        .and_then(|img| img.value().attr("src"))
        .ok_or_else(|| ScrapeError::missing("avatar src"))?
        .to_string();

    let body =
        first(container, &selectors.body).ok_or_else(|| ScrapeError::missing("body paragraph"))?;
    let body_html = normalize_body(&body.html(), &opts.base_url, &opts.unwrap_classes);
    let body_text = visible_text(&body_html);

    let raw_time = first(container, &selectors.timestamp)
        .ok_or_else(|| ScrapeError::missing("timestamp"))?
        .value()
        .attr(&opts.timestamp_attr)
        .ok_or_else(|| ScrapeError::missing("timestamp attribute"))?
        .trim()
        .to_string();
    let timestamp_epoch: i64 = raw_time
        .parse()
        .map_err(|_| ScrapeError::malformed(format!("non-numeric timestamp {:?}", raw_time)))?;
    let timestamp_iso = iso_timestamp(timestamp_epoch).ok_or_else(|| {
        ScrapeError::malformed(format!("timestamp {} out of range", timestamp_epoch))
    })?;

    Ok(Post {
        uri,
        author_id,
        author_uri,
        author_display_name,
        avatar_uri,
        body_html,
        body_text,
        timestamp_epoch,
        timestamp_iso,
    })
}
