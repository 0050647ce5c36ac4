//! Typed pages for the list endpoints. Only the fields the pipeline reads are modeled;
//! a missing required field fails the decode instead of surfacing later as a bad lookup.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::HarvestError;

/// One page of `search.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListPage {
    #[serde(default)]
    pub next_page_token: Option<String>,
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
}

/// One page of `commentThreads.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListPage {
    #[serde(default)]
    pub next_page_token: Option<String>,
    pub items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: String,
    pub text_display: String,
}

/// Pages that carry a continuation token.
pub trait Paged {
    fn next_page_token(&self) -> Option<&str>;

    /// Token for the next request, or `None` when this is the last page.
    /// An empty token ends pagination the same way a missing one does.
    fn continuation(&self) -> Option<String> {
        self.next_page_token()
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}

impl Paged for SearchListPage {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl Paged for CommentThreadListPage {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Decode one response body, mapping any shape mismatch to [`HarvestError::MalformedResponse`].
pub fn decode_page<T: DeserializeOwned>(
    endpoint: &'static str,
    body: &str,
) -> Result<T, HarvestError> {
    serde_json::from_str(body).map_err(|e| HarvestError::malformed(endpoint, e))
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Pull `error.message` out of a Google API error body, if it has one.
pub fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{COMMENT_THREADS_ENDPOINT, SEARCH_ENDPOINT};

    #[test]
    fn search_page_without_token_is_last() {
        let page: SearchListPage = decode_page(
            SEARCH_ENDPOINT,
            r#"{"items":[{"id":{"kind":"youtube#video","videoId":"v1"},"snippet":{"title":"T1"}}]}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.video_id, "v1");
        assert_eq!(page.continuation(), None);
    }

    #[test]
    fn empty_token_is_last_page() {
        let page: SearchListPage =
            decode_page(SEARCH_ENDPOINT, r#"{"nextPageToken":"","items":[]}"#).unwrap();
        assert_eq!(page.continuation(), None);
    }

    #[test]
    fn missing_items_is_malformed() {
        let err = decode_page::<CommentThreadListPage>(
            COMMENT_THREADS_ENDPOINT,
            r#"{"nextPageToken":"X"}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HarvestError::MalformedResponse {
                endpoint: COMMENT_THREADS_ENDPOINT,
                ..
            }
        ));
        assert!(err.to_string().contains("items"));
    }

    #[test]
    fn missing_author_is_malformed() {
        let body = r#"{"items":[{"snippet":{"topLevelComment":{"snippet":{"textDisplay":"Hi"}}}}]}"#;
        let err =
            decode_page::<CommentThreadListPage>(COMMENT_THREADS_ENDPOINT, body).unwrap_err();
        assert!(err.to_string().contains("authorDisplayName"));
    }

    #[test]
    fn api_error_message_extracted() {
        let body = r#"{"error":{"code":403,"message":"The video has disabled comments.","errors":[]}}"#;
        assert_eq!(
            api_error_message(body).as_deref(),
            Some("The video has disabled comments.")
        );
        assert_eq!(api_error_message("<html>bad gateway</html>"), None);
    }
}
