// ABOUTME: Body-markup normalization: link absolutization, wrapper unwrapping, sigil restoration.
// ABOUTME: Marks nodes on a parsed fragment and applies the edits in a single serialization pass.

//! Normalizes the body fragment of a post into canonical absolute-URL HTML.
//!
//! Three rewrites are applied, then the fragment is re-serialized:
//! - anchor `href` values without a scheme are resolved against the base URL;
//! - spans carrying a configured presentation class are unwrapped (the span
//!   goes away, its children stay in place);
//! - an `<s>` element whose whole text is `#` or `@` is unwrapped together
//!   with the next element in document order, so the sigil and the tag text
//!   merge into one contiguous token. A placeholder with nothing after it is
//!   unwrapped alone.
//!
//! The parsed tree is never mutated; edits are collected as node-id sets and
//! applied while serializing. Running the normalizer on its own output is a
//! no-op.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node};
use url::Url;

/// Normalize one body fragment. `html` must hold a single element (the body
/// paragraph); the serialized output keeps that element's own tag and
/// attributes.
pub fn normalize_body(html: &str, base: &Url, unwrap_classes: &[String]) -> String {
    let fragment = Html::parse_fragment(html);
    let unwrap = mark_unwraps(&fragment, unwrap_classes);

    let mut out = String::new();
    for child in fragment.root_element().children() {
        serialize_normalized(child, base, &unwrap, &mut out);
    }
    out
}

/// The visible-text projection of a fragment: its text nodes concatenated in
/// document order, with no whitespace normalization.
pub fn visible_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect()
}

/// Collect the ids of every element to unwrap: presentation wrapper spans,
/// sigil placeholders, and the element following each placeholder.
fn mark_unwraps(fragment: &Html, unwrap_classes: &[String]) -> HashSet<NodeId> {
    let mut unwrap = HashSet::new();
    let mut take_next = false;

    for node in fragment.tree.root().descendants() {
        let el = match ElementRef::wrap(node) {
            Some(el) => el,
            None => continue,
        };
        if take_next {
            unwrap.insert(el.id());
            take_next = false;
            continue;
        }

        let element = el.value();
        if element.name() == "span"
            && element
                .classes()
                .any(|c| unwrap_classes.iter().any(|u| u == c))
        {
            unwrap.insert(el.id());
        } else if element.name() == "s" {
            let text: String = el.text().collect();
            if text == "#" || text == "@" {
                unwrap.insert(el.id());
                // The tag text sits in the next element of the pre-order
                // walk; when the placeholder is the last element, nothing
                // further happens.
                take_next = true;
            }
        }
    }
    unwrap
}

fn serialize_normalized(
    node: ego_tree::NodeRef<Node>,
    base: &Url,
    unwrap: &HashSet<NodeId>,
    out: &mut String,
) {
    match node.value() {
        Node::Text(t) => out.push_str(&escape_text(&**t)),
        Node::Element(el) => {
            if unwrap.contains(&node.id()) {
                for child in node.children() {
                    serialize_normalized(child, base, unwrap, out);
                }
                return;
            }

            let name = el.name();
            out.push('<');
            out.push_str(name);
            for (k, v) in el.attrs() {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                if name == "a" && k == "href" {
                    out.push_str(&escape_attr(&absolutize(v, base)));
                } else {
                    out.push_str(&escape_attr(v));
                }
                out.push('"');
            }

            if is_void_element(name) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            for child in node.children() {
                serialize_normalized(child, base, unwrap, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Node::Comment(c) => {
            out.push_str("<!--");
            out.push_str(&**c);
            out.push_str("-->");
        }
        _ => {}
    }
}

/// Resolve a link target against the base URL unless it already carries a
/// scheme, in which case it is returned byte-for-byte.
fn absolutize(href: &str, base: &Url) -> String {
    match Url::parse(href) {
        Ok(_) => href.to_string(),
        Err(_) => base
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string()),
    }
}

/// Escape text node content.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape attribute value.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Check if tag is void element.
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
