use anyhow::Result;
use clap::{Parser, Subcommand};
use paragen_common::{logger, AppConfig};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
            return;
        }
    }

    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "paragen")]
#[command(about = "Paragen - paragraph generator backed by a local Ollama server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Ollama API base URL
        #[arg(long)]
        ollama_url: Option<String>,

        /// Model used when a request names none
        #[arg(long)]
        model: Option<String>,

        /// Directory containing index.html
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Log to the console only, without a log file
        #[arg(long)]
        console_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;
    let mut console_only = false;

    if let Some(Commands::Serve {
        host,
        port,
        ollama_url,
        model,
        static_dir,
        console_only: console,
    }) = cli.command
    {
        if let Some(host) = host {
            config.server_host = host;
        }
        if let Some(port) = port {
            config.server_port = port;
        }
        if let Some(url) = ollama_url {
            config.ollama_base_url = url;
        }
        if let Some(model) = model {
            config.default_model = model;
        }
        if let Some(dir) = static_dir {
            config.static_dir = dir;
        }
        console_only = console;

        config.validate()?;
    }

    if console_only {
        logger::setup_console_logging(&config.log_level)?;
    } else {
        logger::setup_logging(&config.log_dir, &config.log_level)?;
    }

    tracing::info!("Paragen starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Ollama: {}", config.ollama_base_url);
    tracing::info!("  Default model: {}", config.default_model);
    tracing::info!("  Static dir: {}", config.static_dir.display());

    println!("Server listening on http://{}", config.server_bind_address());

    paragen_server::start_server(config).await?;

    Ok(())
}
