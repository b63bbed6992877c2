//! Command-line and environment configuration for the service binary.

use clap::Parser;

/// Student record RPC service.
#[derive(Debug, Clone, Parser)]
#[command(name = "scholar-service", about = "Student record RPC service")]
pub struct ServiceArgs {
    /// Address the RPC server listens on.
    #[arg(long, env = "SCHOLAR_SERVICE_ADDR", default_value = "0.0.0.0:9999")]
    pub bind: String,

    /// SQLite database file path.
    #[arg(long, env = "SCHOLAR_DB_PATH", default_value = "scholar.db")]
    pub db_path: String,

    /// Keep records in memory only (no SQLite file).
    #[arg(long)]
    pub in_memory: bool,

    /// Do not populate the cache when a lookup is served from the store.
    #[arg(long)]
    pub cold_reads: bool,
}
