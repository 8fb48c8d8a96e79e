use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA: &str = include_str!("schema.sql");

/// Drops and recreates the summoner and game tables.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Failed to apply database schema")?;

    log::info!("Database schema reset successfully");
    Ok(())
}
