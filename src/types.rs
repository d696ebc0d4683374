//! Wire types for the session and conversation endpoints.

use serde::{Deserialize, Serialize};

/// Conversation request body.
///
/// Field order matches what the backend expects on the wire; `conversation_id`
/// is omitted entirely until a thread exists.
#[derive(Debug, Serialize)]
pub struct ConversationRequest {
    pub action: &'static str,
    pub messages: Vec<UserMessage>,
    pub parent_message_id: String,
    pub model: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// A single outgoing user message.
#[derive(Debug, Serialize)]
pub struct UserMessage {
    pub id: String,
    pub role: &'static str,
    pub content: MessageContent,
}

/// Message payload. The backend only accepts text parts.
#[derive(Debug, Serialize)]
pub struct MessageContent {
    pub content_type: &'static str,
    pub parts: Vec<String>,
}

/// Subset of the session endpoint's response we consume.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_info_parses_access_token() {
        let info: SessionInfo =
            serde_json::from_str(r#"{"accessToken":"abc123","expires":"2026-01-01"}"#).unwrap();
        assert_eq!(info.access_token, "abc123");
    }

    #[test]
    fn test_session_info_missing_field_is_an_error() {
        let result = serde_json::from_str::<SessionInfo>(r#"{"user":{"id":"u-1"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_info_invalid_json_is_an_error() {
        let result = serde_json::from_str::<SessionInfo>("<html>sign in</html>");
        assert!(result.is_err());
    }

    #[test]
    fn test_conversation_id_omitted_when_none() {
        let request = ConversationRequest {
            action: "next",
            messages: vec![],
            parent_message_id: "p-1".into(),
            model: "text-davinci-002-render",
            conversation_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("conversation_id"));
    }

    #[test]
    fn test_conversation_id_serialized_when_set() {
        let request = ConversationRequest {
            action: "next",
            messages: vec![],
            parent_message_id: "p-1".into(),
            model: "text-davinci-002-render",
            conversation_id: Some("conv-1".into()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""conversation_id":"conv-1""#));
    }
}
