//! Client for the unofficial `chat.openai.com` conversation API.
//!
//! Authenticates with a browser session token, exchanges it for a bearer
//! access token, and posts chat messages, streaming the raw response body
//! to a caller-supplied sink. One logical conversation, driven serially.
//!
//! # Example
//!
//! ```ignore
//! use gpt_chat::ChatSession;
//! use tokio::sync::mpsc;
//!
//! let mut session = ChatSession::new(session_token).authenticate().await?;
//! let (tx, mut rx) = mpsc::channel(16);
//! tokio::spawn(async move {
//!     while let Some(chunk) = rx.recv().await {
//!         print!("{}", String::from_utf8_lossy(&chunk));
//!     }
//! });
//! session.send_message("hello", tx).await?;
//! ```
//!
//! **Warning:** Unofficial / unsupported API surface.

pub mod config;
pub mod error;
mod http;
pub mod session;
mod stream;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use session::{AuthenticatedSession, ChatSession};
