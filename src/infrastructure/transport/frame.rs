//! Wire format for realtime events: `{"event": <name>, "data": <payload>}`

use serde::{Deserialize, Serialize};
use crate::domain::entities::Message;
use crate::domain::traits::SEND_MESSAGE_EVENT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub event: String,
    pub data: serde_json::Value,
}

pub fn encode(event: &str, message: &Message) -> Result<String, serde_json::Error> {
    let frame = Frame {
        event: event.to_string(),
        data: serde_json::to_value(message)?,
    };
    serde_json::to_string(&frame)
}

/// Decode a text frame. `Ok(None)` for events other than chat messages.
pub fn decode_message(text: &str) -> Result<Option<Message>, serde_json::Error> {
    let frame: Frame = serde_json::from_str(text)?;
    if frame.event != SEND_MESSAGE_EVENT {
        return Ok(None);
    }
    serde_json::from_value(frame.data).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_shape() {
        let text = encode(SEND_MESSAGE_EVENT, &Message::new("hello", "alice")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"event": "send_message", "data": {"text": "hello", "author": "alice"}})
        );
    }

    #[test]
    fn test_decode_chat_message() {
        let text = r#"{"event":"send_message","data":{"text":"hi","author":"bob"}}"#;
        assert_eq!(decode_message(text).unwrap(), Some(Message::new("hi", "bob")));
    }

    #[test]
    fn test_decode_other_event_is_skipped() {
        let text = r#"{"event":"typing","data":{"author":"bob"}}"#;
        assert_eq!(decode_message(text).unwrap(), None);
    }

    #[test]
    fn test_decode_rejects_bad_payloads() {
        assert!(decode_message("not json").is_err());
        assert!(decode_message(r#"{"event":"send_message","data":{"text":"hi"}}"#).is_err());
    }
}
