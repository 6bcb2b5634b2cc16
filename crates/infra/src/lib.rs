//! Infrastructure layer: configuration, boundary ingestion, entity stores.

pub mod config;
pub mod error;
pub mod ingest;
pub mod store;

pub use config::{AppConfig, AssistantSettings, StoreBackend};
pub use error::{ConfigError, IngestError, StoreError};
pub use store::{EntityStore, InMemoryEntityStore, SheetEntityStore};
