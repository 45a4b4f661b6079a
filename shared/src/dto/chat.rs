use serde::{Deserialize, Serialize};

wire_enum! {
    /// Payload kind of a chat message.
    MessageType {
        Text => "text",
        Image => "image",
        File => "file",
    }
}

/// Single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    #[serde(default)]
    pub chat_id: String,
    pub sender_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_at: Option<String>,
}

/// Conversation between marketplace users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<ChatMessage>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub unread_count: u32,
}

/// Conversation with its full transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatDetail {
    #[serde(flatten)]
    pub chat: Chat,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Chat list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub data: Vec<Chat>,
    #[serde(default)]
    pub total: u64,
}
