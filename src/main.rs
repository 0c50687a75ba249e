// Main entry point
use agribot::infrastructure::config::{self, Config, Logging};
use agribot::interfaces::api::router;
use agribot::interfaces::cli::Cli;
use agribot::state::AppState;
use clap::Parser;
use colored::Colorize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.debug {
        config.debug = true;
    }

    if cli.status {
        print_status(&config, cli.config.as_deref());
        return Ok(());
    }

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config)?;
    log_startup(&state.config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    eprintln!("\nShutdown signal received, draining requests...");
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.to_ascii_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "info",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}

fn log_startup(config: &Config) {
    tracing::info!(model = %config.model.url, "model endpoint");
    match config.translate_base() {
        Some(base) => tracing::info!(%base, "translation: primary service with web fallback"),
        None => tracing::warn!("no TRANSLATE_BASE set; using web translation only"),
    }
    if config.debug {
        tracing::info!("debug mode on, responses include pipeline internals");
    }
}

fn print_status(config: &Config, explicit: Option<&std::path::Path>) {
    println!("{}", "AgriBot Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config_path = explicit
        .map(|p| p.display().to_string())
        .or_else(|| {
            config::get_config_path()
                .filter(|p| p.exists())
                .map(|p| p.display().to_string())
        })
        .unwrap_or_else(|| "Not found (defaults)".to_string());
    println!("Config: {}", config_path);
    println!("Listen: {}:{}", config.server.host, config.server.port);
    println!(
        "Model endpoint: {} ({}s timeout)",
        config.model.url, config.model.timeout_secs
    );

    match config.translate_base() {
        Some(base) => {
            let key = if config.translate.api_key.is_some() {
                "with API key"
            } else {
                "no API key"
            };
            println!("Translation: {} ({}), web fallback", base, key);
        }
        None => println!("Translation: {}", "web fallback only".yellow()),
    }

    if config.history.enable {
        println!(
            "History: in-memory, {} exchanges per user, {} users",
            config.history.max_per_user, config.history.max_users
        );
    } else {
        println!("History: disabled");
    }

    let debug = if config.debug {
        "on".yellow()
    } else {
        "off".normal()
    };
    println!("Debug: {}", debug);
}
