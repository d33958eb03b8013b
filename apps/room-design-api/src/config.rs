//! Command-line and environment configuration

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Room Design API
#[derive(Parser, Debug, Clone)]
#[command(name = "room-design-api")]
#[command(about = "Room layout API: rooms, furniture catalog, saved designs and fitness checks")]
pub struct Args {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// SQLite connection URL (defaults to a file in the user data directory)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value = "5")]
    pub max_connections: u32,

    /// Do not add the sample furniture to an empty catalog
    #[arg(long, env = "SKIP_SEED")]
    pub skip_seed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn database_url(&self) -> String {
        self.database_url.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("room-design-api");
            std::fs::create_dir_all(&data_dir).ok();
            format!("sqlite:{}/room_design.db?mode=rwc", data_dir.display())
        })
    }
}
