//! HTTP client for the question-answering backend.
//!
//! Every call returns `Result<T, String>` with a message ready to show
//! in the UI. The backend reports failures as JSON bodies shaped like
//! `{ "detail": "..." }` on any non-2xx status.

use serde::{Deserialize, Serialize};

pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadResponse {
    pub chunks: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub chat_history: Option<serde_json::Value>,
}

/// True when the browser-declared MIME type looks like a PDF.
pub fn is_pdf_type(content_type: &str) -> bool {
    content_type.contains("pdf")
}

fn ask_url(question: &str) -> String {
    format!("{}/ask?q={}", API_BASE_URL, urlencoding::encode(question))
}

/// Pull the backend's `detail` message out of an error body.
fn error_detail(body: &str, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.detail.is_empty() => parsed.detail,
        _ => fallback.to_string(),
    }
}

/// Upload a PDF as the multipart field `file`.
pub async fn upload_pdf(filename: &str, data: &[u8]) -> Result<UploadResponse, String> {
    use gloo_net::http::Request;
    use js_sys::{Array, Uint8Array};
    use web_sys::{Blob, BlobPropertyBag, FormData};

    let url = format!("{}/upload", API_BASE_URL);

    let bytes = Uint8Array::new_with_length(data.len() as u32);
    bytes.copy_from(data);

    let parts = Array::new();
    parts.push(&bytes);
    let blob_options = BlobPropertyBag::new();
    blob_options.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &blob_options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let form_data = FormData::new().map_err(|_| "Failed to create FormData".to_string())?;
    form_data
        .append_with_blob_and_filename("file", &blob, filename)
        .map_err(|_| "Failed to append file to FormData".to_string())?;

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| format!("Failed to create request: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    if !(200..=299).contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(error_detail(&body, "Upload failed"));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask a question about the uploaded document.
pub async fn ask(question: &str) -> Result<AskResponse, String> {
    let response = gloo_net::http::Request::get(&ask_url(question))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    if !(200..=299).contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(error_detail(&body, "Failed to get answer"));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_extracted_from_error_bodies() {
        assert_eq!(
            error_detail(r#"{"detail":"Invalid PDF"}"#, "Upload failed"),
            "Invalid PDF"
        );
    }

    #[test]
    fn fallback_when_body_is_not_json() {
        assert_eq!(error_detail("<html>502</html>", "Upload failed"), "Upload failed");
        assert_eq!(error_detail("", "Upload failed"), "Upload failed");
    }

    #[test]
    fn fallback_when_detail_is_missing_or_empty() {
        assert_eq!(
            error_detail(r#"{"error":"nope"}"#, "Failed to get answer"),
            "Failed to get answer"
        );
        assert_eq!(
            error_detail(r#"{"detail":""}"#, "Failed to get answer"),
            "Failed to get answer"
        );
    }

    #[test]
    fn ask_url_is_percent_encoded() {
        assert_eq!(
            ask_url("What is the total?"),
            "http://127.0.0.1:8000/ask?q=What%20is%20the%20total%3F"
        );
        assert_eq!(
            ask_url("a&b=c"),
            "http://127.0.0.1:8000/ask?q=a%26b%3Dc"
        );
    }

    #[test]
    fn pdf_type_check_is_a_substring_match() {
        assert!(is_pdf_type("application/pdf"));
        assert!(is_pdf_type("application/x-pdf"));
        assert!(!is_pdf_type("text/plain"));
        assert!(!is_pdf_type(""));
    }

    #[test]
    fn ask_response_tolerates_missing_chat_history() {
        let parsed: AskResponse = serde_json::from_str(r#"{"answer":"$500"}"#).unwrap();
        assert_eq!(parsed.answer, "$500");
        assert!(parsed.chat_history.is_none());
    }

    #[test]
    fn upload_response_reads_chunk_count() {
        let parsed: UploadResponse = serde_json::from_str(r#"{"chunks":12}"#).unwrap();
        assert_eq!(parsed.chunks, 12);
    }
}
