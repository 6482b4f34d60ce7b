use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::models::Hotel;
use crate::database::{BookingStore, DatabaseManager, MemoryBookingStore, PgBookingStore};
use crate::state::AppState;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, help = "Keep bookings in process memory instead of PostgreSQL")]
    pub memory: bool,

    #[arg(long, requires = "memory", help = "JSON array of hotels to seed the memory store with")]
    pub hotels: Option<PathBuf>,

    #[arg(long, help = "Apply migrations before serving (PostgreSQL only)")]
    pub migrate: bool,
}

pub async fn handle(args: ServeArgs, config: AppConfig) -> anyhow::Result<()> {
    config.validate()?;

    let store: Arc<dyn BookingStore> = if args.memory {
        let hotels = match &args.hotels {
            Some(path) => load_hotels(path)?,
            None => Vec::new(),
        };
        tracing::info!("Using in-memory store with {} hotels", hotels.len());
        Arc::new(MemoryBookingStore::with_hotels(hotels).await)
    } else {
        let pool = DatabaseManager::connect(&config.database).await?;
        if args.migrate {
            DatabaseManager::migrate(&pool).await?;
        }
        Arc::new(PgBookingStore::new(pool))
    };

    crate::server::serve(AppState::new(config, store)).await
}

fn load_hotels(path: &Path) -> anyhow::Result<Vec<Hotel>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read hotels fixture {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid hotels fixture {}", path.display()))
}
