use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::oneshot;

use chat_relay::application::errors::PipelineError;
use chat_relay::application::interceptors::{AuthMiddleware, ConnectionMiddleware};
use chat_relay::application::messaging::{InputParser, LoggingMiddleware, MiddlewareChain, Store};
use chat_relay::domain::entities::Command;
use chat_relay::infrastructure::adapters::{ConsoleAdapter, ConsoleRenderer};
use chat_relay::infrastructure::auth::HttpAuthenticator;
use chat_relay::infrastructure::config::Config;
use chat_relay::infrastructure::transport::WebSocketTransport;

#[derive(Parser)]
#[command(name = "chat-relay")]
#[command(about = "Console chat client with a login and realtime relay pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Login endpoint (overrides config)
    #[arg(long)]
    auth_url: Option<String>,

    /// Chat WebSocket endpoint (overrides config)
    #[arg(long)]
    socket_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the chat client
    Run,
    /// Show version
    Version,
    /// Print default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => {
            let config = load_config(&cli.config, cli.auth_url, cli.socket_url);
            run_client(config)
        }
        Commands::Version => {
            println!("chat-relay v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(path: &str, auth_url: Option<String>, socket_url: Option<String>) -> Config {
    let mut config = if std::path::Path::new(path).exists() {
        Config::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    if let Some(url) = auth_url {
        config.server.auth_url = url;
    }
    if let Some(url) = socket_url {
        config.server.socket_url = url;
    }

    config
}

fn run_client(config: Config) -> Result<(), PipelineError> {
    config.validate()?;
    tracing::info!(
        "Starting chat-relay (auth: {}, socket: {})",
        config.server.auth_url,
        config.server.socket_url
    );

    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let chain = MiddlewareChain::new()
            .add(LoggingMiddleware)
            .add(AuthMiddleware::new(Arc::new(HttpAuthenticator::new(&config.server.auth_url))))
            .add(ConnectionMiddleware::new(Arc::new(WebSocketTransport::new(&config.server.socket_url))));

        let store = Store::builder().with_chain(chain).build();
        let dispatcher = store.dispatcher();

        tokio::spawn(ConsoleRenderer::new().run(store.subscribe()));

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let store_task = tokio::spawn(store.run(async move {
            let _ = stop_rx.await;
        }));

        if config.chat.auto_connect {
            dispatcher.dispatch(Command::SocketConnect);
        }

        let console = ConsoleAdapter::new(InputParser::new(&config.chat.prefix), dispatcher);
        let result = console.run(BufReader::new(tokio::io::stdin())).await;

        let _ = stop_tx.send(());
        store_task
            .await
            .map_err(|e| PipelineError::Internal(format!("Store task failed: {}", e)))?;

        result
    })
}

fn init_config() -> Result<(), PipelineError> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
