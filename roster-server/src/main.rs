mod routes;

use std::env;

use anyhow::Context as _;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{Level, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use roster_core::{Data, PlayerService};
use roster_database::{Database, MIGRATOR, StoreBackend};
use roster_utils::parse::parse_flag;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    let max_level = log_level(env::var("LOG_LEVEL").ok().as_deref());
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(move |metadata| {
        if *metadata.level() > max_level {
            return false;
        }

        // Statement logging is only useful when tracing everything.
        max_level == Level::TRACE || !metadata.target().starts_with("sqlx::query")
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    let store = connect_store().await?;
    info!(backend = store.name(), "Player store ready.");

    let data = Data {
        players: PlayerService::new(store),
    };

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "Roster is listening.");

    axum::serve(listener, routes::router(data)).await?;
    Ok(())
}

async fn connect_store() -> anyhow::Result<StoreBackend> {
    let wants_memory = env::var("STORE_BACKEND")
        .map(|value| value.trim().eq_ignore_ascii_case("memory"))
        .unwrap_or(false);
    if wants_memory {
        info!("STORE_BACKEND=memory; players will not survive a restart.");
        return Ok(StoreBackend::memory());
    }

    let database_url = match env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            warn!("DATABASE_URL is not set; continuing with the in-memory store.");
            return Ok(StoreBackend::memory());
        }
    };

    let max_connections = u32::try_from(env_u64("DATABASE_MAX_CONNECTIONS", 5)).unwrap_or(5);
    let db_pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .context("failed to connect to PostgreSQL")?;
    info!(max_connections, "PostgreSQL connection established.");

    let db = Database::new(db_pool);

    let auto_run_migrations = env_bool("AUTO_RUN_MIGRATIONS", true);
    if auto_run_migrations {
        MIGRATOR.run(db.pool()).await?;
        info!("Database migrations applied.");
    } else {
        info!("Auto migrations disabled (set AUTO_RUN_MIGRATIONS=true to run at startup).");
    }

    Ok(StoreBackend::postgres(db))
}

fn log_level(raw: Option<&str>) -> Level {
    match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("warn") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => Level::INFO,
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_flag(&value),
        Err(_) => default,
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(value) => value.trim().parse::<u64>().unwrap_or(default),
        Err(_) => default,
    }
}
