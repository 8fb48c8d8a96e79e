use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::parse_tier;
use crate::domain::{Division, Summoner, SummonerId};

pub fn insert_summoner(conn: &mut DbConn, summoner: &Summoner) -> rusqlite::Result<()> {
    let sql = "INSERT OR REPLACE INTO summoners (summoner_id, name, tier, division) VALUES (?1, ?2, ?3, ?4)";

    conn.execute(
        sql,
        params![
            summoner.summoner_id,
            summoner.name,
            summoner.tier.as_str(),
            summoner.division.0
        ],
    )
    .map(|_| ())
}

fn parse_summoner_row(row: &rusqlite::Row) -> rusqlite::Result<Summoner> {
    Ok(Summoner {
        summoner_id: row.get(0)?,
        name: row.get(1)?,
        tier: parse_tier(row, 2)?,
        division: Division(row.get(3)?),
    })
}

pub fn find_by_id(conn: &mut DbConn, summoner_id: SummonerId) -> rusqlite::Result<Option<Summoner>> {
    let sql = "SELECT summoner_id, name, tier, division FROM summoners WHERE summoner_id = ?1";

    conn.query_row(sql, params![summoner_id], parse_summoner_row)
        .optional()
}
