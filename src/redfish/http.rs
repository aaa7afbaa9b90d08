//! HTTP utilities for Redfish REST API calls

use crate::error::Error;
use reqwest::Client;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and masks potentially sensitive patterns
fn sanitize_for_log(body: &str) -> String {
    // Masking first leaves pure ASCII, so the byte-offset truncation
    // below cannot split a multi-byte character.
    let cleaned = body.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "");

    if cleaned.len() > MAX_LOG_BODY_LENGTH {
        format!(
            "{}... [truncated, {} bytes total]",
            &cleaned[..MAX_LOG_BODY_LENGTH],
            body.len()
        )
    } else {
        cleaned
    }
}

/// HTTP client wrapper for Redfish API calls
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(concat!("redfish-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request and return the raw response body.
    ///
    /// Decoding is the resource's job, not the transport's; bodies come
    /// back verbatim. The body is consumed within this call on every
    /// path, so the underlying connection is always released.
    pub async fn get(&self, url: &str, token: Option<&str>) -> Result<String, Error> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.header("X-Auth-Token", token);
        }

        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(Error::Http { status, body });
        }

        Ok(body)
    }
}
