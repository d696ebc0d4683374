//! Thin HTTP transport over reqwest.
//!
//! Builds credentialed headers and issues the two request shapes the API
//! needs: a plain GET and a streaming JSON POST. Status interpretation is
//! left to the caller; only transport failures are mapped here.

use crate::config::Config;
use crate::error::Error;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;

/// Credential attached to a request.
#[derive(Clone)]
pub(crate) enum Credential {
    /// Session token sent as a named cookie (`Cookie: {name}={token}`).
    SessionCookie { name: &'static str, token: String },
    /// Bearer token authentication (`Authorization: Bearer {token}`).
    Bearer(String),
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionCookie { name, .. } => f
                .debug_struct("SessionCookie")
                .field("name", name)
                .field("token", &"[REDACTED]")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}

/// HTTP client bound to one API host.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client with the configured timeouts.
    pub(crate) fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Build headers for a request: credential plus user agent.
    fn build_headers(credential: &Credential, user_agent: &str) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();

        let ua = HeaderValue::from_str(user_agent).map_err(|_| Error::InvalidHeader("user agent"))?;
        headers.insert(USER_AGENT, ua);

        match credential {
            Credential::SessionCookie { name, token } => {
                let value = HeaderValue::from_str(&format!("{name}={token}"))
                    .map_err(|_| Error::InvalidHeader("session token"))?;
                headers.insert(COOKIE, value);
            }
            Credential::Bearer(token) => {
                let value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| Error::InvalidHeader("access token"))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(headers)
    }

    /// Issue a GET. The response is returned with its status unchecked.
    pub(crate) async fn get(
        &self,
        path: &str,
        credential: &Credential,
        user_agent: &str,
    ) -> Result<reqwest::Response, Error> {
        let url = format!("{}{path}", self.base_url);
        let headers = Self::build_headers(credential, user_agent)?;

        let response = self.client.get(&url).headers(headers).send().await?;
        Ok(response)
    }

    /// Issue a JSON POST whose body will be consumed as a byte stream.
    ///
    /// Sets `Accept: application/json` and `Content-Type: application/json`;
    /// the response is returned with its status unchecked so the caller can
    /// decide what a failure means for its endpoint.
    pub(crate) async fn post_json<T: Serialize>(
        &self,
        path: &str,
        credential: &Credential,
        user_agent: &str,
        body: &T,
    ) -> Result<reqwest::Response, Error> {
        let url = format!("{}{path}", self.base_url);
        let mut headers = Self::build_headers(credential, user_agent)?;
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_credential() {
        let credential = Credential::SessionCookie {
            name: "__Secure-next-auth.session-token",
            token: "tok-123".into(),
        };
        let headers = HttpClient::build_headers(&credential, "agent/1.0").unwrap();
        assert_eq!(
            headers.get(COOKIE).unwrap(),
            "__Secure-next-auth.session-token=tok-123"
        );
        assert_eq!(headers.get(USER_AGENT).unwrap(), "agent/1.0");
    }

    #[test]
    fn test_bearer_credential() {
        let credential = Credential::Bearer("abc123".into());
        let headers = HttpClient::build_headers(&credential, "agent/1.0").unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let credential = Credential::Bearer("line\nbreak".into());
        let err = HttpClient::build_headers(&credential, "agent/1.0").unwrap_err();
        assert!(matches!(err, Error::InvalidHeader("access token")));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cookie = Credential::SessionCookie {
            name: "session",
            token: "super-secret".into(),
        };
        let bearer = Credential::Bearer("super-secret".into());
        assert!(!format!("{cookie:?}").contains("super-secret"));
        assert!(!format!("{bearer:?}").contains("super-secret"));
    }
}
