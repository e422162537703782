use anyhow::Result;
use clap::Parser;
use futures::{pin_mut, StreamExt};
use ollama_chat::llm::OllamaProvider;
use ollama_chat::{Chat, ChatConfig, Message, Prompt};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "ollama-chat")]
#[command(author, version, about = "Send a prompt to an Ollama server", long_about = None)]
struct Cli {
    /// Prompt text
    prompt: String,

    /// Model to use (defaults to the configured model)
    #[arg(short, long)]
    model: Option<String>,

    /// System message sent before the prompt
    #[arg(short, long)]
    system: Option<String>,

    /// Wait for the full reply instead of streaming it
    #[arg(long)]
    no_stream: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "ollama_chat=debug" } else { "ollama_chat=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ChatConfig::load()?;
    let provider = OllamaProvider::new(config.host.clone(), Duration::from_secs(config.timeout_secs))?;
    let chat = Chat::new(Arc::new(provider));

    let mut messages = Vec::new();
    if let Some(system) = cli.system {
        messages.push(Message::system(system));
    }
    messages.push(Message::user(cli.prompt));
    let prompt = Prompt::new(cli.model.unwrap_or(config.model), messages);

    if cli.no_stream {
        match chat.chat(&prompt).await {
            Some(reply) => println!("{}", reply),
            None => std::process::exit(1),
        }
        return Ok(());
    }

    let fragments = chat.chat_with_stream(prompt);
    pin_mut!(fragments);

    let mut stdout = std::io::stdout();
    while let Some(fragment) = fragments.next().await {
        write!(stdout, "{}", fragment)?;
        stdout.flush()?;
    }
    writeln!(stdout)?;

    Ok(())
}
