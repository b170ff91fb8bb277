use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use toast_core::config::RootConfig;
use toast_core::login::LoginRequest;
use toast_core::state::StateRepository;
use toast_infrastructure::{ConfigService, TomlStateRepository};

mod app;
mod commands;
mod output;

use app::LoginApp;

const APP_STATE_FILE: &str = "app_state.toml";

#[derive(Parser)]
#[command(name = "toast")]
#[command(about = "Toast - offline and online account login", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of ~/.config/toast/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the authentication server URL
    #[arg(long, global = true)]
    auth_server: Option<String>,

    /// Log at debug level to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive login form (default)
    Repl,
    /// Log in once and exit
    Login {
        /// Username or email; defaults to the last-known username
        #[arg(short, long)]
        username: Option<String>,
        /// Account password; leave out to play offline
        #[arg(short, long, env = "TOAST_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    let (mut config, load_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (RootConfig::default(), Some(e)),
    };

    init_tracing(cli.debug, &config.debug.log_level);

    if let Some(e) = load_error {
        tracing::warn!(
            "[Config] Failed to load {}: {}; using defaults",
            config_service.path().display(),
            e
        );
    }
    if let Some(server_url) = cli.auth_server {
        tracing::info!("[Config] Using authentication server {}", server_url);
        config.auth.server_url = server_url;
    }

    let command = cli.command.unwrap_or(Commands::Repl);
    if let Commands::Config = command {
        commands::config::show(config_service.path(), &config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let state_repository: Arc<dyn StateRepository> = match &cli.config {
        Some(path) => Arc::new(TomlStateRepository::with_path(
            path.with_file_name(APP_STATE_FILE),
        )),
        None => Arc::new(TomlStateRepository::new()?),
    };
    let app = LoginApp::bootstrap(&config, state_repository).await?;

    match command {
        Commands::Login { username, password } => {
            let request = LoginRequest::new(
                username.unwrap_or_default(),
                password.unwrap_or_default(),
            );
            Ok(commands::login::run(app, request).await)
        }
        Commands::Repl | Commands::Config => {
            commands::repl::run(app).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins over the configured level; `--debug` wins over both.
fn init_tracing(debug: bool, log_level: &str) {
    let filter = if debug {
        EnvFilter::new("debug,hyper=warn,h2=warn,reqwest=warn,rustls=warn,rustyline=warn")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,toast={log_level}")))
    };

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}
