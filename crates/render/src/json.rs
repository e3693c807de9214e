// ABOUTME: JSON renderer: serializes the post slice directly.
// ABOUTME: Field names follow the Post model; pretty-printing is opt-in.

use birdfeed_scrape::Post;

use crate::error::RenderError;

/// Render posts as a JSON array.
pub fn render(posts: &[Post], pretty: bool) -> Result<String, RenderError> {
    let result = if pretty {
        serde_json::to_string_pretty(posts)
    } else {
        serde_json::to_string(posts)
    };
    result.map_err(RenderError::json)
}
