pub mod connection;
pub mod games;
pub mod setup;
pub mod summoners;

pub use connection::{create_pool, get_connection, DbConn, DbPool};

use rusqlite::types::Type;

use crate::domain::Tier;

/// Reads a tier column, surfacing unknown names as a conversion failure.
pub(crate) fn parse_tier(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Tier> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
