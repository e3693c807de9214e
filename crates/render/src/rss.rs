// ABOUTME: RSS 2.0 renderer.
// ABOUTME: One item per post with an RFC 2822 pubDate derived from the epoch timestamp.

use birdfeed_scrape::Post;
use chrono::DateTime;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Writer;

use crate::error::RenderError;
use crate::xml::{close, into_string, open, text_element};
use crate::FeedMeta;

/// Render an RSS 2.0 feed.
pub fn render(meta: &FeedMeta, posts: &[Post]) -> Result<String, RenderError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(RenderError::xml)?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    writer
        .write_event(Event::Start(rss))
        .map_err(RenderError::xml)?;
    open(&mut writer, "channel")?;

    text_element(&mut writer, "title", &meta.title)?;
    if let Some(uri) = &meta.uri {
        text_element(&mut writer, "link", uri)?;
    }
    text_element(&mut writer, "description", &meta.title)?;

    for post in posts {
        open(&mut writer, "item")?;
        text_element(&mut writer, "title", &post.body_text)?;
        text_element(&mut writer, "link", &post.uri)?;
        text_element(&mut writer, "description", &post.body_html)?;

        let mut guid = BytesStart::new("guid");
        guid.push_attribute(("isPermaLink", "true"));
        writer
            .write_event(Event::Start(guid))
            .map_err(RenderError::xml)?;
        writer
            .write_event(Event::Text(quick_xml::events::BytesText::new(&post.uri)))
            .map_err(RenderError::xml)?;
        close(&mut writer, "guid")?;

        if let Some(dt) = DateTime::from_timestamp(post.timestamp_epoch, 0) {
            text_element(&mut writer, "pubDate", &dt.to_rfc2822())?;
        }
        close(&mut writer, "item")?;
    }

    close(&mut writer, "channel")?;
    close(&mut writer, "rss")?;
    into_string(writer)
}
