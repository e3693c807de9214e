// ABOUTME: Atom 1.0 renderer.
// ABOUTME: One entry per post; body_html travels escaped inside content type="html".

use std::io::Write;

use birdfeed_scrape::Post;
use chrono::Utc;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::RenderError;
use crate::xml::{close, into_string, open, text_element};
use crate::FeedMeta;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Render an Atom 1.0 feed.
pub fn render(meta: &FeedMeta, posts: &[Post]) -> Result<String, RenderError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(RenderError::xml)?;

    let mut feed = BytesStart::new("feed");
    feed.push_attribute(("xmlns", ATOM_NS));
    writer
        .write_event(Event::Start(feed))
        .map_err(RenderError::xml)?;

    text_element(&mut writer, "title", &meta.title)?;
    let updated = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    text_element(&mut writer, "updated", &updated)?;
    if let Some(uri) = &meta.uri {
        text_element(&mut writer, "id", uri)?;
        link(&mut writer, "alternate", uri)?;
    }

    for post in posts {
        open(&mut writer, "entry")?;
        text_element(&mut writer, "id", &post.uri)?;
        text_element(&mut writer, "title", &post.body_text)?;
        link(&mut writer, "alternate", &post.uri)?;
        link(&mut writer, "icon", &post.avatar_uri)?;

        let mut content = BytesStart::new("content");
        content.push_attribute(("type", "html"));
        writer
            .write_event(Event::Start(content))
            .map_err(RenderError::xml)?;
        writer
            .write_event(Event::Text(BytesText::new(&post.body_html)))
            .map_err(RenderError::xml)?;
        close(&mut writer, "content")?;

        text_element(&mut writer, "updated", &post.timestamp_iso)?;

        open(&mut writer, "author")?;
        text_element(&mut writer, "name", &post.author_display_name)?;
        text_element(&mut writer, "uri", &post.author_uri)?;
        close(&mut writer, "author")?;

        close(&mut writer, "entry")?;
    }

    close(&mut writer, "feed")?;
    into_string(writer)
}

fn link<W: Write>(writer: &mut Writer<W>, rel: &str, href: &str) -> Result<(), RenderError> {
    let mut el = BytesStart::new("link");
    el.push_attribute(("rel", rel));
    el.push_attribute(("href", href));
    writer
        .write_event(Event::Empty(el))
        .map_err(RenderError::xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            uri: "https://twitter.com/foo/status/123".to_string(),
            author_id: "jane".to_string(),
            author_uri: "https://twitter.com/jane".to_string(),
            author_display_name: "Jane Doe".to_string(),
            avatar_uri: "https://img.example/a.png".to_string(),
            body_html: "<p>hello <b>world</b></p>".to_string(),
            body_text: "hello world".to_string(),
            timestamp_epoch: 1371108000,
            timestamp_iso: "2013-06-13T07:20:00Z".to_string(),
        }
    }

    #[test]
    fn test_atom_feed_shape() {
        let meta = FeedMeta {
            title: "Feed for: @jane".to_string(),
            uri: Some("https://twitter.com/jane".to_string()),
        };
        let out = render(&meta, &[sample_post()]).unwrap();

        assert!(out.starts_with("<?xml version=\"1.0\""));
        assert!(out.contains(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#));
        assert!(out.contains("<title>Feed for: @jane</title>"));
        assert!(out.contains(r#"<link rel="alternate" href="https://twitter.com/jane"/>"#));
        assert!(out.contains("<id>https://twitter.com/foo/status/123</id>"));
        assert!(out.contains("<updated>2013-06-13T07:20:00Z</updated>"));
        assert!(out.contains("<name>Jane Doe</name>"));
        assert!(out.contains("<uri>https://twitter.com/jane</uri>"));
    }

    #[test]
    fn test_atom_escapes_body_html() {
        let meta = FeedMeta::default();
        let out = render(&meta, &[sample_post()]).unwrap();
        assert!(out.contains("&lt;p&gt;hello &lt;b&gt;world&lt;/b&gt;&lt;/p&gt;"));
        assert!(!out.contains("<p>hello"));
    }

    #[test]
    fn test_atom_without_feed_uri_has_no_feed_id() {
        let meta = FeedMeta {
            title: "Untitled feed".to_string(),
            uri: None,
        };
        let out = render(&meta, &[]).unwrap();
        assert!(out.contains("<title>Untitled feed</title>"));
        assert!(!out.contains(r#"<link rel="alternate""#));
    }
}
