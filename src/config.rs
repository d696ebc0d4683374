//! Client configuration.

use std::time::Duration;

/// Production endpoint.
pub const BASE_URL: &str = "https://chat.openai.com";

/// User agent presented to the session endpoint.
pub const AUTH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// User agent presented to the conversation endpoint.
pub const CONVERSATION_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36 Edg/108.0.1462.41";

/// HTTP request timeout.
pub const TIMEOUT: Duration = Duration::from_secs(120);
/// Connection timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport and endpoint settings for a [`ChatSession`](crate::ChatSession).
///
/// Never read from disk; callers construct it in process, usually via
/// `Config::default()`. Overriding `base_url` points the client at a mirror
/// or a test server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme and host of the API, without a trailing slash.
    pub base_url: String,
    /// User agent for the session endpoint.
    pub auth_user_agent: String,
    /// User agent for the conversation endpoint.
    pub conversation_user_agent: String,
    /// Overall request timeout. Bounds the full streamed read.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            auth_user_agent: AUTH_USER_AGENT.to_string(),
            conversation_user_agent: CONVERSATION_USER_AGENT.to_string(),
            timeout: TIMEOUT,
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}
