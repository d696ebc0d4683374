//! Conversation sessions against the chat backend.
//!
//! A [`ChatSession`] holds the caller-supplied session token and can do one
//! thing: exchange it for a bearer access token. That exchange consumes it
//! and produces an [`AuthenticatedSession`], the only type that can send
//! messages — sending before authenticating does not compile.
//!
//! **Warning:** Unofficial / unsupported API surface.

use crate::config::Config;
use crate::error::Error;
use crate::http::{Credential, HttpClient};
use crate::stream::forward_body;
use crate::types::{ConversationRequest, MessageContent, SessionInfo, UserMessage};
use bytes::Bytes;
use reqwest::StatusCode;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Cookie that carries the caller-supplied session token.
const AUTH_COOKIE_NAME: &str = "__Secure-next-auth.session-token";
/// Exchanges the session cookie for a bearer access token.
const AUTH_PATH: &str = "/api/auth/session";
/// Accepts a message and streams model output back.
const CONVERSATION_PATH: &str = "/backend-api/conversation";
/// Model identifier the backend expects.
const MODEL: &str = "text-davinci-002-render";

/// An unauthenticated session: a session token plus a transport.
///
/// The parent message id seeding the thread is generated here so that the
/// first send after [`authenticate`](Self::authenticate) is already chained.
pub struct ChatSession {
    http: HttpClient,
    config: Config,
    session_token: String,
    parent_message_id: String,
}

impl ChatSession {
    /// Create a session with the default (production) configuration.
    pub fn new(session_token: impl Into<String>) -> Self {
        Self::with_config(session_token, Config::default())
    }

    /// Create a session with explicit endpoint and transport settings.
    pub fn with_config(session_token: impl Into<String>, config: Config) -> Self {
        Self {
            http: HttpClient::new(&config),
            config,
            session_token: session_token.into(),
            parent_message_id: Uuid::new_v4().to_string(),
        }
    }

    /// Exchange the session token for a bearer access token.
    ///
    /// Sends the token as the `__Secure-next-auth.session-token` cookie to
    /// the session endpoint. Any non-200 status is [`Error::Auth`]; a body
    /// that is not JSON or lacks `accessToken` is [`Error::Parse`].
    pub async fn authenticate(self) -> Result<AuthenticatedSession, Error> {
        let credential = Credential::SessionCookie {
            name: AUTH_COOKIE_NAME,
            token: self.session_token,
        };

        tracing::debug!("requesting access token from {AUTH_PATH}");
        let response = self
            .http
            .get(AUTH_PATH, &credential, &self.config.auth_user_agent)
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, "session endpoint refused authentication");
            return Err(Error::Auth { status });
        }

        let body = response.text().await?;
        let info: SessionInfo = serde_json::from_str(&body)?;
        tracing::debug!("session authenticated");

        Ok(AuthenticatedSession {
            http: self.http,
            config: self.config,
            access_token: info.access_token,
            conversation_id: None,
            parent_message_id: self.parent_message_id,
        })
    }
}

/// An authenticated session: holds the bearer token and the thread state.
pub struct AuthenticatedSession {
    http: HttpClient,
    config: Config,
    access_token: String,
    conversation_id: Option<String>,
    parent_message_id: String,
}

impl AuthenticatedSession {
    /// Send one message and stream the raw response body into `sink`.
    ///
    /// The response is whatever the server emits — typically newline-delimited
    /// JSON event fragments — forwarded chunk by chunk without buffering or
    /// framing. Any non-200 status is [`Error::Request`] and nothing reaches
    /// the sink. After the body has been fully consumed, the next message is
    /// chained under the one just sent; a failed send leaves the thread state
    /// untouched.
    pub async fn send_message(
        &mut self,
        text: impl Into<String>,
        sink: mpsc::Sender<Bytes>,
    ) -> Result<(), Error> {
        let message_id = Uuid::new_v4().to_string();
        let request = self.build_request(text.into(), message_id.clone());
        let credential = Credential::Bearer(self.access_token.clone());

        tracing::debug!(
            conversation_id = request.conversation_id.as_deref(),
            parent_message_id = %request.parent_message_id,
            "posting message"
        );
        let response = self
            .http
            .post_json(
                CONVERSATION_PATH,
                &credential,
                &self.config.conversation_user_agent,
                &request,
            )
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, "conversation endpoint refused message");
            return Err(Error::Request { status });
        }

        forward_body(response.bytes_stream(), &sink).await?;
        tracing::debug!("response stream finished");

        self.parent_message_id = message_id;
        Ok(())
    }

    /// Continue an existing server-side thread on subsequent sends.
    ///
    /// An empty id means "no thread" and clears instead.
    pub fn set_conversation_id(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        self.conversation_id = if id.is_empty() { None } else { Some(id) };
        self
    }

    /// Forget the current thread; the next send starts a fresh conversation.
    pub fn clear_conversation_id(&mut self) -> &mut Self {
        self.conversation_id = None;
        self
    }

    /// Re-thread the next message under an explicit message id.
    ///
    /// Useful for callers that parse the event stream themselves and want to
    /// chain under the assistant's reply rather than their own last message.
    pub fn set_parent_message_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.parent_message_id = id.into();
        self
    }

    /// The bearer token obtained during authentication.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The thread the next send will continue, if any.
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// The id the next message will be threaded under.
    pub fn parent_message_id(&self) -> &str {
        &self.parent_message_id
    }

    fn build_request(&self, text: String, message_id: String) -> ConversationRequest {
        ConversationRequest {
            action: "next",
            messages: vec![UserMessage {
                id: message_id,
                role: "user",
                content: MessageContent {
                    content_type: "text",
                    parts: vec![text],
                },
            }],
            parent_message_id: self.parent_message_id.clone(),
            model: MODEL,
            conversation_id: self.conversation_id.clone(),
        }
    }
}
