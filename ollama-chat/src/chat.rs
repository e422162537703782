use crate::llm::{ChatProvider, FragmentStream};
use crate::types::Prompt;
use futures::stream::{self, Stream, StreamExt};
use std::sync::Arc;

/// Chat front-end that never fails: errors are logged and become `None`
/// or the end of the stream.
#[derive(Clone)]
pub struct Chat {
    provider: Arc<dyn ChatProvider>,
}

enum StreamState {
    Pending(Arc<dyn ChatProvider>, Prompt),
    Streaming(FragmentStream),
}

impl Chat {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Full reply text, or `None` if the call failed or the reply was empty.
    pub async fn chat(&self, prompt: &Prompt) -> Option<String> {
        let result = match self.provider.chat(prompt).await {
            Ok(content) if content.is_empty() => None,
            Ok(content) => Some(content),
            Err(e) => {
                tracing::error!("Error in Ollama chat: {:#}", e);
                None
            }
        };
        tracing::info!("Ollama chat completed");
        result
    }

    /// Reply fragments in arrival order.
    ///
    /// Nothing is sent until the stream is first polled. On error the stream
    /// logs and ends; fragments already yielded stay yielded. Dropping the
    /// stream stops reading the response.
    pub fn chat_with_stream(&self, prompt: Prompt) -> impl Stream<Item = String> + Send + 'static {
        let initial = StreamState::Pending(Arc::clone(&self.provider), prompt);

        stream::unfold(initial, |state| async move {
            let mut fragments = match state {
                StreamState::Pending(provider, prompt) => match provider.chat_stream(&prompt).await {
                    Ok(fragments) => fragments,
                    Err(e) => {
                        tracing::error!("Error in Ollama chat streaming: {:#}", e);
                        tracing::info!("Ollama streaming chat completed");
                        return None;
                    }
                },
                StreamState::Streaming(fragments) => fragments,
            };

            match fragments.next().await {
                Some(Ok(fragment)) => Some((fragment, StreamState::Streaming(fragments))),
                Some(Err(e)) => {
                    tracing::error!("Error in Ollama chat streaming: {:#}", e);
                    tracing::info!("Ollama streaming chat completed");
                    None
                }
                None => {
                    tracing::info!("Ollama streaming chat completed");
                    None
                }
            }
        })
        .fuse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays scripted results and counts how often it was called.
    struct ScriptedProvider {
        reply: Result<String, String>,
        fragments: Vec<Result<String, String>>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(reply: Result<String, String>, fragments: Vec<Result<String, String>>) -> Self {
            Self {
                reply,
                fragments,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChatProvider for ScriptedProvider {
        async fn chat(&self, _prompt: &Prompt) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(|e| anyhow!(e))
        }

        async fn chat_stream(&self, _prompt: &Prompt) -> Result<FragmentStream> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let items: Vec<Result<String>> = self
                .fragments
                .iter()
                .cloned()
                .map(|r| r.map_err(|e| anyhow!(e)))
                .collect();
            Ok(Box::pin(stream::iter(items)))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ChatProvider for FailingProvider {
        async fn chat(&self, _prompt: &Prompt) -> Result<String> {
            Err(anyhow!("connection refused"))
        }

        async fn chat_stream(&self, _prompt: &Prompt) -> Result<FragmentStream> {
            Err(anyhow!("connection refused"))
        }
    }

    fn prompt() -> Prompt {
        Prompt::new("llama3.2", vec![Message::user("Hi")])
    }

    #[tokio::test]
    async fn test_chat_returns_content() {
        let chat = Chat::new(Arc::new(ScriptedProvider::new(Ok("Hello!".into()), vec![])));
        assert_eq!(chat.chat(&prompt()).await, Some("Hello!".to_string()));
    }

    #[tokio::test]
    async fn test_chat_empty_content_is_none() {
        let chat = Chat::new(Arc::new(ScriptedProvider::new(Ok(String::new()), vec![])));
        assert_eq!(chat.chat(&prompt()).await, None);
    }

    #[tokio::test]
    async fn test_chat_error_is_none() {
        let chat = Chat::new(Arc::new(FailingProvider));
        assert_eq!(chat.chat(&prompt()).await, None);
    }

    #[tokio::test]
    async fn test_stream_yields_in_order() {
        let provider = ScriptedProvider::new(
            Ok(String::new()),
            vec![Ok("Hel".into()), Ok("lo".into()), Ok("!".into())],
        );
        let chat = Chat::new(Arc::new(provider));

        let fragments: Vec<String> = chat.chat_with_stream(prompt()).collect::<Vec<String>>().await;
        assert_eq!(fragments, vec!["Hel", "lo", "!"]);
    }

    #[tokio::test]
    async fn test_stream_keeps_fragments_before_error() {
        let provider = ScriptedProvider::new(
            Ok(String::new()),
            vec![Ok("partial".into()), Err("socket closed".into()), Ok("never".into())],
        );
        let chat = Chat::new(Arc::new(provider));

        let fragments: Vec<String> = chat.chat_with_stream(prompt()).collect::<Vec<String>>().await;
        assert_eq!(fragments, vec!["partial"]);
    }

    #[tokio::test]
    async fn test_stream_request_error_ends_immediately() {
        let chat = Chat::new(Arc::new(FailingProvider));
        let fragments: Vec<String> = chat.chat_with_stream(prompt()).collect::<Vec<String>>().await;
        assert!(fragments.is_empty());
    }

    #[tokio::test]
    async fn test_stream_is_lazy() {
        let provider = Arc::new(ScriptedProvider::new(Ok(String::new()), vec![Ok("a".into())]));
        let chat = Chat::new(provider.clone());

        let stream = chat.chat_with_stream(prompt());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

        let first: Vec<String> = stream.take(1).collect::<Vec<String>>().await;
        assert_eq!(first, vec!["a"]);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}
