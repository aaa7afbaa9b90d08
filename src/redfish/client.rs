//! Redfish Client
//!
//! Main client for talking to one Redfish service, combining the HTTP
//! wrapper with the service's base URL and session token.

use std::fmt;

use url::Url;

use super::http::HttpClient;
use crate::error::Error;

/// Client bound to one Redfish service.
///
/// Cloning is cheap (the underlying HTTP client shares its connection
/// pool) and clones are safe to use concurrently from multiple tasks.
/// The client performs no locking of its own.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base: Url,
    token: Option<String>,
}

impl Client {
    /// Create a client for the service at `base_url`, without a session.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            http: HttpClient::new()?,
            base: parse_base(base_url)?,
            token: None,
        })
    }

    /// Create a client that authenticates with an existing session token.
    ///
    /// The token is sent as `X-Auth-Token` on every request. Session
    /// creation and renewal are the caller's concern.
    pub fn with_token(base_url: &str, token: &str) -> Result<Self, Error> {
        Ok(Self {
            http: HttpClient::new()?,
            base: parse_base(base_url)?,
            token: Some(token.to_string()),
        })
    }

    /// The service base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Canonical service root URI.
    pub fn service_root(&self) -> &'static str {
        "/redfish/v1/"
    }

    /// Resolve a resource URI (usually an absolute-path `@odata.id`)
    /// against the service base.
    fn url_for(&self, uri: &str) -> Result<Url, Error> {
        self.base.join(uri).map_err(|source| Error::InvalidUri {
            uri: uri.to_string(),
            source,
        })
    }

    /// Make a GET request for a resource URI and return the raw body.
    pub async fn get(&self, uri: &str) -> Result<String, Error> {
        let url = self.url_for(uri)?;
        self.http.get(url.as_str(), self.token.as_deref()).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The session token stays out of debug output.
        f.debug_struct("Client")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

fn parse_base(base_url: &str) -> Result<Url, Error> {
    Url::parse(base_url).map_err(|source| Error::InvalidUri {
        uri: base_url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_absolute_resource_paths() {
        let client = Client::new("https://bmc.example.com").unwrap();
        let url = client.url_for("/redfish/v1/Systems/1").unwrap();
        assert_eq!(url.as_str(), "https://bmc.example.com/redfish/v1/Systems/1");
    }

    #[test]
    fn test_url_for_rejects_unjoinable_uris() {
        let client = Client::new("https://bmc.example.com").unwrap();
        let err = client.url_for("https://[bad").unwrap_err();
        assert!(matches!(err, Error::InvalidUri { .. }));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            Client::new("not a url"),
            Err(Error::InvalidUri { .. })
        ));
    }

    #[test]
    fn test_debug_output_omits_token() {
        let client = Client::with_token("https://bmc.example.com", "secret-token").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-token"));
    }
}
