//! Output: summary lines on stdout and the comment array on disk.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

use crate::error::HarvestError;
use crate::pipeline::HarvestReport;
use crate::utils::config::OUTPUT_INDENT;
use crate::utils::write_via_temp;
use crate::Comment;

/// Pretty-printed JSON array, 4-space indent, UTF-8. Field order follows [`Comment`]'s declaration.
pub fn comments_to_json(comments: &[Comment]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(OUTPUT_INDENT));
    comments.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `comments` to `path`, replacing any previous content.
pub fn write_comments(path: &Path, comments: &[Comment]) -> Result<(), HarvestError> {
    let bytes = comments_to_json(comments).map_err(|e| HarvestError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    write_via_temp(path, &bytes).map_err(|source| HarvestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// `Total comments: N` and `Total videos: M`, in that order.
pub fn summary_lines(report: &HarvestReport) -> [String; 2] {
    [
        format!("Total comments: {}", report.comments.len()),
        format!("Total videos: {}", report.videos.len()),
    ]
}

pub fn print_summary(report: &HarvestReport) {
    for line in summary_lines(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_is_compact() {
        assert_eq!(comments_to_json(&[]).unwrap(), b"[]");
    }

    #[test]
    fn four_space_indent_and_field_order() {
        let json = comments_to_json(&[Comment {
            video_id: "v1".to_string(),
            video_title: "T1".to_string(),
            author: "Alice".to_string(),
            comment_text: "Hi".to_string(),
        }])
        .unwrap();
        let expected = "[\n    {\n        \"video_id\": \"v1\",\n        \"video_title\": \"T1\",\n        \"author\": \"Alice\",\n        \"comment_text\": \"Hi\"\n    }\n]";
        assert_eq!(String::from_utf8(json).unwrap(), expected);
    }

    #[test]
    fn non_ascii_kept_as_utf8() {
        let json = comments_to_json(&[Comment {
            video_id: "v".to_string(),
            video_title: "日本".to_string(),
            author: "Zoë".to_string(),
            comment_text: "👍".to_string(),
        }])
        .unwrap();
        let s = String::from_utf8(json).unwrap();
        assert!(s.contains("日本") && s.contains("Zoë") && s.contains("👍"));
    }
}
