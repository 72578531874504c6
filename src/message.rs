use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============ Transcript Entry ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }

    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "user" => Some(Role::User),
            // Older front ends call the bot side "model"
            "bot" | "model" => Some(Role::Bot),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl ChatMessage {
    pub fn user(text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            text: text.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            attachment: None,
        }
    }

    /// Only bot messages may carry an attachment.
    pub fn bot(response: BotResponse) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Bot,
            text: response.text,
            timestamp: Utc::now().to_rfc3339(),
            attachment: response.attachment,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

// ============ Responder Envelope ============

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BotResponse {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl BotResponse {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(text: impl Into<String>, attachment: Attachment) -> Self {
        Self {
            text: text.into(),
            attachment: Some(attachment),
        }
    }
}

// ============ Attachment Cards ============

/// Structured payload rendered as cards under a bot message.
///
/// Serializes as `{"type": "mbti" | "multi-iq" | "htp" | "smartphone", "data": [...]}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum Attachment {
    Mbti(Vec<MbtiProfile>),
    MultiIq(Vec<MultiIqProfile>),
    Htp(Vec<HtpGuide>),
    Smartphone(Vec<SmartphoneGuide>),
}

impl Attachment {
    pub fn kind(&self) -> &'static str {
        match self {
            Attachment::Mbti(_) => "mbti",
            Attachment::MultiIq(_) => "multi-iq",
            Attachment::Htp(_) => "htp",
            Attachment::Smartphone(_) => "smartphone",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Attachment::Mbti(data) => data.len(),
            Attachment::MultiIq(data) => data.len(),
            Attachment::Htp(data) => data.len(),
            Attachment::Smartphone(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MbtiProfile {
    pub code: String,
    pub alias: String,
    pub emoji: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MultiIqProfile {
    pub name: String,
    pub description: String,
    pub jobs: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GuideItem {
    pub emoji: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HtpGuide {
    pub title: String,
    pub intro: String,
    pub items: Vec<GuideItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SmartphoneGuide {
    pub title: String,
    pub intro: String,
    pub symptoms: Vec<GuideItem>,
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_wire_shape() {
        let attachment = Attachment::MultiIq(vec![MultiIqProfile {
            name: "음악지능".to_string(),
            description: "소리와 리듬에 민감하다".to_string(),
            jobs: "작곡가".to_string(),
        }]);

        let json = serde_json::to_value(&attachment).unwrap();

        assert_eq!(json["type"], "multi-iq");
        assert_eq!(json["data"][0]["name"], "음악지능");
        assert_eq!(attachment.kind(), "multi-iq");
    }

    #[test]
    fn test_plain_response_omits_attachment() {
        let json = serde_json::to_string(&BotResponse::plain("hi")).unwrap();
        assert_eq!(json, r#"{"text":"hi"}"#);
    }

    #[test]
    fn test_bot_message_keeps_attachment() {
        let response = BotResponse::with_attachment(
            "guide",
            Attachment::Htp(vec![HtpGuide {
                title: "t".to_string(),
                intro: "i".to_string(),
                items: Vec::new(),
            }]),
        );

        let message = ChatMessage::bot(response);

        assert_eq!(message.role, Role::Bot);
        assert_eq!(message.attachment.as_ref().map(|a| a.kind()), Some("htp"));
        assert!(ChatMessage::user("hello").is_user());
        assert!(!message.is_user());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("a");
        let b = ChatMessage::user("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_as_str_round_trips() {
        for role in [Role::User, Role::Bot] {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::Bot.as_str(), "bot");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("USER"), Some(Role::User));
        assert_eq!(Role::from_str("model"), Some(Role::Bot));
        assert_eq!(Role::from_str("system"), None);
    }
}
