// ABOUTME: End-to-end test against a snapshot of the real timeline markup.
// ABOUTME: A decoy container and a well-formed one must yield exactly one fully-populated post.

use std::fs;

use birdfeed_scrape::{Post, Scanner};
use pretty_assertions::assert_eq;

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("failed to read fixture: {}", path))
}

#[test]
fn timeline_snapshot_yields_one_post() {
    let html = load_fixture("timeline.html");
    let scanner = Scanner::builder().build().unwrap();

    let posts = scanner.scan(&html);
    assert_eq!(posts.len(), 1);

    let expected = Post {
        uri: "https://twitter.com/foo/status/123".to_string(),
        author_id: "MerryMeats".to_string(),
        author_uri: "https://twitter.com/MerryMeats".to_string(),
        author_display_name: "MERRY MEATS YAPTON".to_string(),
        avatar_uri: "https://example.com/normal.png".to_string(),
        body_html: concat!(
            r#"<p class="js-tweet-text tweet-text"><s>Off</s> "#,
            r#"<a href="https://twitter.com/expanded">to</a> Worthing, "#,
            r#"<a href="http://example.com/notchanged">Petworth</a>, Bognor, "#,
            "<strong>Littlehampton</strong> and Chichester! #hash @at</p>"
        )
        .to_string(),
        body_text: "Off to Worthing, Petworth, Bognor, Littlehampton and Chichester! #hash @at"
            .to_string(),
        timestamp_epoch: 1371108000,
        timestamp_iso: "2013-06-13T07:20:00Z".to_string(),
    };
    assert_eq!(posts[0], expected);
}

#[test]
fn timeline_snapshot_body_text_matches_body_html_projection() {
    let html = load_fixture("timeline.html");
    let scanner = Scanner::builder().build().unwrap();
    let posts = scanner.scan(&html);

    let reparsed = scraper::Html::parse_fragment(&posts[0].body_html);
    let projected: String = reparsed.root_element().text().collect();
    assert_eq!(posts[0].body_text, projected);
}
