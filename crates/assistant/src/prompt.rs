//! Chat messages sent with every question.

use serde::{Deserialize, Serialize};

use pasieka_analytics::Snapshot;

/// Answer used when the model returns no content.
pub const FALLBACK_ANSWER: &str = "Nie udało mi się znaleźć odpowiedzi.";

const SYSTEM_PREAMBLE: &str = "Jesteś pomocnym asystentem analitycznym dla właściciela pasieki. \
Odpowiadaj na pytania bazując WYŁĄCZNIE na poniższych danych w formacie JSON. \
Odpowiadaj krótko i po polsku. Dane: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// System instructions with the snapshot as JSON, then the question.
pub fn build_messages(question: &str, snapshot: &Snapshot) -> Result<Vec<ChatMessage>, serde_json::Error> {
    let data = serde_json::to_string(snapshot)?;
    Ok(vec![
        ChatMessage::system(format!("{SYSTEM_PREAMBLE}{data}")),
        ChatMessage::user(question),
    ])
}
