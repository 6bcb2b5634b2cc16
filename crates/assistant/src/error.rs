use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssistantError {
    #[error("Pytanie jest wymagane.")]
    EmptyQuestion,

    #[error("Klucz API OpenAI nie jest skonfigurowany.")]
    NotConfigured,

    /// The model provider answered with an error; carries its message.
    #[error("{0}")]
    Upstream(String),

    /// The provider could not be reached or sent an unreadable body.
    #[error("transport error: {0}")]
    Transport(String),
}
