//! Response content classification
//!
//! Turns a response's Content-Type and body into the one-line summary
//! recorded in the report: the HTML document title, a JSON size indicator,
//! or a content-type label for everything else.

use scraper::{Html, Selector};
use thiserror::Error;

/// The body could not be decoded per its declared content type
///
/// The fetcher folds this into its general error path, so the run keeps
/// going and the record carries the failure sentinel.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("{0}")]
    JsonDecode(#[from] serde_json::Error),
}

/// Classifies a 200 response body into its display summary
///
/// * Content-Type containing `text/html`: the trimmed `<title>` text, or
///   `"No title found"` when the document has no non-empty title element.
/// * Content-Type containing `application/json`: `"JSON Response: {N}
///   characters"` where N is the length of the decoded value's string
///   representation.
/// * Anything else: `"Non-HTML content: {content_type}"` verbatim, including
///   an empty content type.
pub fn classify_body(content_type: &str, body: &[u8]) -> Result<String, ClassifyError> {
    if content_type.contains("text/html") {
        let html = String::from_utf8_lossy(body);
        Ok(extract_title(&html).unwrap_or_else(|| "No title found".to_string()))
    } else if content_type.contains("application/json") {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        Ok(format!(
            "JSON Response: {} characters",
            value.to_string().len()
        ))
    } else {
        Ok(format!("Non-HTML content: {}", content_type))
    }
}

/// Extracts the page title from an HTML document
fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_title() {
        let html = b"<html><head><title>Example</title></head><body></body></html>";
        let title = classify_body("text/html", html).unwrap();
        assert_eq!(title, "Example");
    }

    #[test]
    fn test_html_title_trimmed() {
        let html = b"<html><head><title>  Spaced Out  </title></head><body></body></html>";
        let title = classify_body("text/html; charset=utf-8", html).unwrap();
        assert_eq!(title, "Spaced Out");
    }

    #[test]
    fn test_html_without_title() {
        let html = b"<html><head></head><body><h1>Heading</h1></body></html>";
        let title = classify_body("text/html", html).unwrap();
        assert_eq!(title, "No title found");
    }

    #[test]
    fn test_html_empty_title_element() {
        let html = b"<html><head><title>   </title></head><body></body></html>";
        let title = classify_body("text/html", html).unwrap();
        assert_eq!(title, "No title found");
    }

    #[test]
    fn test_html_title_with_nested_markup() {
        let html = b"<html><head><title>One <b>Two</b></title></head></html>";
        let title = classify_body("text/html", html).unwrap();
        assert_eq!(title, "One Two");
    }

    #[test]
    fn test_json_summary() {
        let body = br#"{"name": "crawler", "count": 3}"#;
        let title = classify_body("application/json", body).unwrap();
        let n = serde_json::from_slice::<serde_json::Value>(body)
            .unwrap()
            .to_string()
            .len();
        assert_eq!(title, format!("JSON Response: {} characters", n));
    }

    #[test]
    fn test_json_summary_format() {
        let title = classify_body("application/json; charset=utf-8", b"[1, 2, 3]").unwrap();
        assert!(title.starts_with("JSON Response: "));
        assert!(title.ends_with(" characters"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = classify_body("application/json", b"{not valid json");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_html_content() {
        let title = classify_body("text/plain; charset=utf-8", b"plain text").unwrap();
        assert_eq!(title, "Non-HTML content: text/plain; charset=utf-8");
    }

    #[test]
    fn test_empty_content_type() {
        let title = classify_body("", b"whatever").unwrap();
        assert_eq!(title, "Non-HTML content: ");
    }
}
