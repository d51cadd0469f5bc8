use folio_common::{FolioError, Result};

/// Turn a non-success response into `FolioError::Status`.
///
/// Strapi reports failures as `{"error":{"message":…}}`, EmailJS as plain
/// text; both end up in `message`.
pub(crate) async fn check_response_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(FolioError::Status {
        status: status.as_u16(),
        message: extract_message(&body),
    })
}

fn extract_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json["error"]["message"]
            .as_str()
            .or_else(|| json["message"].as_str())
            .map(String::from)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}
