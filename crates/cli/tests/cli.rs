// ABOUTME: Integration tests for the birdfeed CLI binary.
// ABOUTME: Feeds timeline HTML through stdin and checks each output format.

use assert_cmd::Command;
use predicates::prelude::*;

fn birdfeed_cmd() -> Command {
    Command::cargo_bin("birdfeed").unwrap()
}

const TIMELINE: &str = r#"<html><body>
<div class="content">
  <a class="details" href="/foo/status/123">foo</a>
  <img class="avatar" src="https://example.com/normal.png">
  <strong class="fullname">MERRY MEATS YAPTON</strong>
  <span class="username"><s>@</s><b>MerryMeats</b></span>
  <span class="_timestamp" data-time="1371108000">41m</span>
  <p class="tweet-text">Off to <a href="/town">town</a> <s>#</s><b>hash</b></p>
</div>
</body></html>"#;

#[test]
fn stdin_defaults_to_atom() {
    birdfeed_cmd()
        .write_stdin(TIMELINE)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<feed xmlns="http://www.w3.org/2005/Atom">"#,
        ))
        .stdout(predicate::str::contains("<title>Untitled feed</title>"))
        .stdout(predicate::str::contains(
            "<id>https://twitter.com/foo/status/123</id>",
        ));
}

#[test]
fn stdin_to_json() {
    birdfeed_cmd()
        .arg("--format")
        .arg("json")
        .write_stdin(TIMELINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"author_id\":\"MerryMeats\""))
        .stdout(predicate::str::contains("2013-06-13T07:20:00Z"));
}

#[test]
fn stdin_to_rss() {
    birdfeed_cmd()
        .arg("--format")
        .arg("rss")
        .write_stdin(TIMELINE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<rss version="2.0">"#))
        .stdout(predicate::str::contains(
            "<pubDate>Thu, 13 Jun 2013 07:20:00 +0000</pubDate>",
        ));
}

#[test]
fn quiet_suppresses_output() {
    birdfeed_cmd()
        .arg("--quiet")
        .write_stdin(TIMELINE)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn empty_stdin_yields_empty_feed() {
    birdfeed_cmd()
        .arg("--format")
        .arg("json")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}
