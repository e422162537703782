// ollama-chat/src/lib.rs
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod types;

// Re-export key types
pub use chat::Chat;
pub use config::ChatConfig;
pub use types::{Message, Prompt, Role};
