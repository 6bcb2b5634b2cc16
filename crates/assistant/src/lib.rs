//! Question answering over the shop data.
//!
//! The assistant forwards a free-text question together with the current
//! snapshot to a chat-completion model and returns its answer verbatim. It
//! holds no state between questions.

pub mod error;
pub mod openai;
pub mod prompt;

use async_trait::async_trait;

use pasieka_analytics::Snapshot;

pub use error::AssistantError;
pub use openai::OpenAiAssistant;
pub use prompt::{ChatMessage, ChatRole, FALLBACK_ANSWER, build_messages};

/// Answers questions about the data in a snapshot.
#[async_trait]
pub trait Assistant: Send + Sync {
    async fn ask(&self, question: &str, snapshot: &Snapshot) -> Result<String, AssistantError>;
}
