use gloo_console::debug;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::form_urlencoded;
use crate::settings;


#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not be sent or no response was received
    #[error("request failed: {0}")]
    RequestFailed(#[from] gloo_net::Error),
    #[error("HTTP error ({0} {1})")]
    HttpError(u16, String),
    #[error("response is not JSON (content-type: {0:?})")]
    UnexpectedContentType(Option<String>),
    #[error("invalid JSON response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}


/// A single matched resource
///
/// The set of fields depends on the resource type (account, region, names,
/// type-specific details), so records are kept as raw JSON objects and
/// rendered generically.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult(pub serde_json::Map<String, Value>);

/// Body of a successful search response
#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}


/// Query the search endpoint and decode the response
///
/// The subtype is forwarded only when non-empty. Each decoding step maps to
/// its own `SearchError` variant so the caller can tell response classes
/// apart.
pub async fn fetch_results(term: &str, rtype: &str, subtype: &str) -> Result<Vec<SearchResult>, SearchError> {
    let url = build_search_url(term, rtype, subtype);
    debug!("fetching search results", url.as_str());

    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(SearchError::HttpError(response.status(), response.status_text()));
    }

    let content_type = response.headers().get("content-type");
    if !is_json_content_type(content_type.as_deref()) {
        return Err(SearchError::UnexpectedContentType(content_type));
    }

    let body = response.text().await?;
    Ok(parse_results(&body)?)
}

/// Build the search URL for the given form values
///
/// Query values are percent-encoded; `resource_subtype` is omitted when the
/// subtype is empty.
fn build_search_url(term: &str, rtype: &str, subtype: &str) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("resource_name", term);
    params.append_pair("resource_type", rtype);
    if !subtype.is_empty() {
        params.append_pair("resource_subtype", subtype);
    }
    format!("{}?{}", settings::SEARCH_API_URL, params.finish())
}

/// Return true if a `content-type` header value declares a JSON body
fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.map_or(false, |ct| ct.contains("application/json"))
}

/// Parse a response body into its result records
fn parse_results(body: &str) -> Result<Vec<SearchResult>, serde_json::Error> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.results)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_omits_empty_subtype() {
        let url = build_search_url("my-bucket", "s3", "");
        assert_eq!(url, "/api/search?resource_name=my-bucket&resource_type=s3");
    }

    #[test]
    fn search_url_includes_subtype() {
        let url = build_search_url("deploy", "iam", "key");
        assert_eq!(url, "/api/search?resource_name=deploy&resource_type=iam&resource_subtype=key");
    }

    #[test]
    fn search_url_encodes_query_values() {
        let url = build_search_url("a b&c", "s3", "");
        assert_eq!(url, "/api/search?resource_name=a+b%26c&resource_type=s3");
    }

    #[test]
    fn json_content_types_are_detected() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(!is_json_content_type(Some("text/plain")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn valid_payload_parses_into_records() {
        let results = parse_results(r#"{"results": [{"id": "x"}]}"#).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.get("id"), Some(&Value::String("x".into())));
    }

    #[test]
    fn extra_payload_fields_are_ignored() {
        let results = parse_results(r#"{"results": [], "took_ms": 12}"#).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn payload_without_results_field_is_rejected() {
        assert!(parse_results(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn non_json_body_is_rejected() {
        assert!(parse_results("<html></html>").is_err());
    }
}
