// Public fallible APIs in this crate share one concrete error contract (`MeetHubError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod assistant;
pub mod client;
pub mod config;
pub mod error;
pub(crate) mod mime;
pub mod models;
pub mod state;

pub use assistant::{ArticleSource, Assistant, InMemoryArticles};
pub use client::MeetHub;
pub use config::{AppConfig, AssistantConfig, FieldWeights};
pub use error::{MeetHubError, Result};
pub use state::SqliteStateStore;
