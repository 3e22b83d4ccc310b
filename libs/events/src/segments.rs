//! Segment helpers shared by parsing and reassembly.

/// Separator between event-type segments.
pub const SEPARATOR: char = '.';

/// Minimum number of segments between the application and the version.
pub const MIN_MIDDLE_SEGMENTS: usize = 2;

/// Number of segments in a prefix; the empty prefix has none.
pub fn segment_count(prefix: &str) -> usize {
    if prefix.is_empty() {
        0
    } else {
        prefix.split(SEPARATOR).count()
    }
}

/// Bounds the middle segments to at most two.
///
/// Up to two segments are returned unchanged. Longer lists become the
/// concatenation of all but the last segment, followed by the last segment.
pub fn compress_segments(middle: &[&str]) -> Vec<String> {
    match middle {
        [rest @ .., last] if rest.len() >= MIN_MIDDLE_SEGMENTS => {
            vec![rest.concat(), (*last).to_string()]
        }
        _ => middle.iter().map(|segment| (*segment).to_string()).collect(),
    }
}

/// Joins the canonical parts, skipping an empty prefix.
pub fn join_canonical(prefix: &str, application: &str, middle: &[String], version: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(middle.len() + 3);
    if !prefix.is_empty() {
        parts.push(prefix);
    }
    parts.push(application);
    parts.extend(middle.iter().map(String::as_str));
    parts.push(version);
    parts.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count(""), 0);
        assert_eq!(segment_count("prefix"), 1);
        assert_eq!(segment_count("invalid.prefix"), 2);
        assert_eq!(segment_count("prefix."), 2);
    }

    #[test]
    fn test_compress_keeps_short_lists() {
        assert_eq!(compress_segments(&[]), Vec::<String>::new());
        assert_eq!(compress_segments(&["Segment1"]), vec!["Segment1"]);
        assert_eq!(
            compress_segments(&["Segment1", "Segment2"]),
            vec!["Segment1", "Segment2"]
        );
    }

    #[test]
    fn test_compress_concatenates_leading_segments() {
        assert_eq!(
            compress_segments(&["Segment1", "Segment2", "Segment3"]),
            vec!["Segment1Segment2", "Segment3"]
        );
        assert_eq!(
            compress_segments(&["Segment1", "Segment2", "Segment3", "Segment4", "Segment5"]),
            vec!["Segment1Segment2Segment3Segment4", "Segment5"]
        );
    }

    #[test]
    fn test_join_canonical() {
        let middle = vec!["order".to_string(), "created".to_string()];
        assert_eq!(
            join_canonical("", "testapp", &middle, "v1"),
            "testapp.order.created.v1"
        );
        assert_eq!(
            join_canonical("sap.kyma", "testapp", &middle, "v1"),
            "sap.kyma.testapp.order.created.v1"
        );
    }

    proptest! {
        #[test]
        fn prop_compress_shape(middle in prop::collection::vec("[A-Za-z0-9]{1,8}", 0..10)) {
            let refs: Vec<&str> = middle.iter().map(String::as_str).collect();
            let compressed = compress_segments(&refs);

            if middle.len() <= 2 {
                prop_assert_eq!(compressed, middle);
            } else {
                let (last, rest) = middle.split_last().unwrap();
                prop_assert_eq!(compressed.len(), 2);
                prop_assert_eq!(&compressed[0], &rest.concat());
                prop_assert_eq!(&compressed[1], last);
            }
        }
    }
}
