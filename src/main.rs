use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use image::DynamicImage;
use tracing::{info, Level};

use ollama_chat::{
    ClientConfig, LlmClient, Message, OllamaClient, DEFAULT_HOST_ADDRESS, DEFAULT_HOST_PORT,
};

#[derive(Parser)]
#[command(name = "ollama-chat")]
#[command(about = "Send one chat turn to a local Ollama server", long_about = None)]
struct Cli {
    prompt: String,

    #[arg(short, long, default_value = "llama3")]
    model: String,

    #[arg(long, default_value = DEFAULT_HOST_ADDRESS)]
    host: String,

    #[arg(long, default_value_t = DEFAULT_HOST_PORT)]
    port: u16,

    #[arg(short, long, help = "Sampling temperature, defaults to 0.7")]
    temperature: Option<f32>,

    #[arg(short, long, help = "System prompt sent before the user message")]
    system: Option<String>,

    #[arg(short, long = "image", help = "Image file to attach (repeatable)")]
    images: Vec<PathBuf>,

    #[arg(short, long, help = "Directory for images returned by the model")]
    output_dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn load_images(paths: &[PathBuf]) -> Result<Vec<DynamicImage>> {
    paths
        .iter()
        .map(|path| {
            image::open(path).with_context(|| format!("Failed to read image {:?}", path))
        })
        .collect()
}

fn save_images(dir: &Path, images: &[DynamicImage]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;

    images
        .iter()
        .enumerate()
        .map(|(n, img)| {
            let path = dir.join(format!("response-{}.png", n));
            img.save_with_format(&path, image::ImageFormat::Png)
                .with_context(|| format!("Failed to write image {:?}", path))?;
            Ok(path)
        })
        .collect()
}

fn build_messages(
    system: Option<&str>,
    prompt: &str,
    images: Vec<DynamicImage>,
) -> Vec<Message> {
    let mut messages = Vec::new();
    if let Some(system) = system {
        messages.push(Message::system(system));
    }
    messages.push(Message::with_images("user", prompt, images));
    messages
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    use tracing_subscriber::EnvFilter;

    let filter = if cli.verbose {
        EnvFilter::new("ollama_chat=debug,warn")
    } else {
        EnvFilter::new("ollama_chat=info,warn")
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(filter)
        .init();

    let client = OllamaClient::from_config(ClientConfig::new(cli.host, cli.port));
    let images = load_images(&cli.images)?;
    let messages = build_messages(cli.system.as_deref(), &cli.prompt, images);

    info!("Chatting with {} at {}", cli.model, client.endpoint());

    let reply = match cli.temperature {
        Some(temperature) => {
            client
                .chat_with_temperature(&cli.model, &messages, temperature)
                .await?
        }
        None => client.chat(&cli.model, &messages).await?,
    };

    println!("{}", reply.content());

    if !reply.images().is_empty() {
        match &cli.output_dir {
            Some(dir) => {
                for path in save_images(dir, reply.images())? {
                    println!("Saved {}", path.display());
                }
            }
            None => println!(
                "({} images returned, pass --output-dir to save them)",
                reply.images().len()
            ),
        }
    }

    Ok(())
}
