use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use dm_api::{auth::AuthConfig, create_router, error::ApiError, AppConfig, AppState};
use dm_common::logging::{init_tracing_subscriber, install_tracing_panic_hook, LogOptions};
use dm_common::roster::{RosterProvider, StaticRoster};

#[derive(Debug, Clone, Parser)]
#[command(name = "dm-api", about = "HTTP API for the driver directory search engine")]
struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// API key for x-api-key authentication
    #[arg(long, env = "DM_API_KEY")]
    api_key: String,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "DM_CORS_ORIGINS", default_value = "http://localhost:3000")]
    cors_origins: String,

    /// Optional JSON roster file; the built-in demo roster is served when unset
    #[arg(long, env = "DM_ROSTER_PATH")]
    roster_path: Option<PathBuf>,

    /// Directory for daily-rotated log files; stdout when unset
    #[arg(long, env = "DM_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Print the default panic backtrace in addition to the tracing event
    #[arg(long, env = "DM_LOG_BACKTRACE", default_value_t = false)]
    log_backtrace: bool,
}

fn config_from_cli(cli: &Cli) -> Result<AppConfig, ApiError> {
    let cors_origins = cli
        .cors_origins
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect::<Vec<_>>();

    if cli.api_key.trim().is_empty() {
        return Err(ApiError::BadRequest("DM_API_KEY must not be empty".into()));
    }

    Ok(AppConfig {
        port: cli.port,
        cors_origins,
        auth: AuthConfig {
            api_key: cli.api_key.clone(),
        },
    })
}

fn load_roster(cli: &Cli) -> Result<StaticRoster, ApiError> {
    match &cli.roster_path {
        Some(path) => {
            info!(path = %path.display(), "loading roster file");
            Ok(StaticRoster::from_json_file(path)?)
        }
        None => Ok(StaticRoster::demo()),
    }
}

async fn run() -> Result<(), ApiError> {
    dotenv().ok();
    let cli = Cli::parse();

    let log_options = LogOptions {
        dir: cli.log_dir.clone(),
        backtrace_on_panic: cli.log_backtrace,
    };
    init_tracing_subscriber("dm-api", &log_options);
    install_tracing_panic_hook("dm-api", cli.log_backtrace);

    let config = config_from_cli(&cli)?;
    let roster = load_roster(&cli)?.fetch_all()?;
    let roster_size = roster.len();

    let state = Arc::new(AppState {
        roster,
        config: config.clone(),
        readiness: Arc::new(AtomicBool::new(true)),
    });

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state);

    info!(%addr, roster_size, "dm-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "dm-api failed");
        std::process::exit(1);
    }
}
