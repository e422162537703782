use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Ollama error: {0}")]
    Api(String),

    #[error("No message in response")]
    MissingMessage,

    #[error("Invalid chunk: {0}")]
    InvalidChunk(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}
