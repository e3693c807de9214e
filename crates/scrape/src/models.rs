// ABOUTME: The Post record produced for each extracted timeline entry.
// ABOUTME: Self-contained value type; renderers consume it verbatim.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// One extracted post. Constructed atomically by the extractor and never
/// mutated afterwards; every URL field is absolute except `avatar_uri`,
/// which is carried verbatim from the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub uri: String,
    pub author_id: String,
    pub author_uri: String,
    pub author_display_name: String,
    pub avatar_uri: String,
    pub body_html: String,
    pub body_text: String,
    pub timestamp_epoch: i64,
    pub timestamp_iso: String,
}

/// Renders epoch seconds as UTC `YYYY-MM-DDTHH:MM:SSZ`.
/// Returns None when the value falls outside chrono's representable range.
pub fn iso_timestamp(epoch: i64) -> Option<String> {
    let dt = DateTime::from_timestamp(epoch, 0)?;
    Some(dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamp() {
        assert_eq!(
            iso_timestamp(1371108000),
            Some("2013-06-13T07:20:00Z".to_string())
        );
    }

    #[test]
    fn test_iso_timestamp_epoch_zero() {
        assert_eq!(iso_timestamp(0), Some("1970-01-01T00:00:00Z".to_string()));
    }

    #[test]
    fn test_iso_timestamp_zero_padded() {
        // 2001-02-03 04:05:06 UTC
        assert_eq!(
            iso_timestamp(981173106),
            Some("2001-02-03T04:05:06Z".to_string())
        );
    }

    #[test]
    fn test_iso_timestamp_out_of_range() {
        assert!(iso_timestamp(i64::MAX).is_none());
    }
}
