use crate::types::Prompt;
use anyhow::Result;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// Text fragments of a streamed reply, in arrival order.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the prompt and returns the full reply text.
    async fn chat(&self, prompt: &Prompt) -> Result<String>;

    /// Sends the prompt and streams the reply as it is generated.
    async fn chat_stream(&self, prompt: &Prompt) -> Result<FragmentStream>;
}
