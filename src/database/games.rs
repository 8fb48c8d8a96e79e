use chrono::NaiveDate;
use rusqlite::params;

use super::connection::DbConn;
use super::parse_tier;
use crate::domain::{Division, GameRecord, PlayerStats, SummonerId, Tier};

const GAME_COLUMNS: &str =
    "game_id, summoner_id, game_date, tier, division, minions_killed, deaths, wards_placed, wards_cleared";

pub fn insert_game_record(conn: &mut DbConn, game: &GameRecord) -> rusqlite::Result<()> {
    let sql = format!(
        "INSERT OR REPLACE INTO game_records ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        GAME_COLUMNS
    );

    conn.execute(
        &sql,
        params![
            game.game_id,
            game.summoner_id,
            game.game_date,
            game.tier.as_str(),
            game.division.0,
            game.stats.minions_killed,
            game.stats.deaths,
            game.stats.wards_placed,
            game.stats.wards_cleared
        ],
    )
    .map(|_| ())
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<GameRecord> {
    Ok(GameRecord {
        game_id: row.get(0)?,
        summoner_id: row.get(1)?,
        game_date: row.get(2)?,
        tier: parse_tier(row, 3)?,
        division: Division(row.get(4)?),
        stats: PlayerStats {
            minions_killed: row.get(5)?,
            deaths: row.get(6)?,
            wards_placed: row.get(7)?,
            wards_cleared: row.get(8)?,
        },
    })
}

/// Games played by one summoner with `start <= game_date < end`
pub fn list_by_summoner(
    conn: &mut DbConn,
    summoner_id: SummonerId,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<GameRecord>> {
    let sql = format!(
        "SELECT {} FROM game_records WHERE summoner_id = ?1 AND game_date >= ?2 AND game_date < ?3 ORDER BY game_date, game_id, summoner_id",
        GAME_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![summoner_id, start, end], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Games played at a tier and division with `start <= game_date < end`
pub fn list_by_tier_division(
    conn: &mut DbConn,
    tier: Tier,
    division: Division,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<GameRecord>> {
    let sql = format!(
        "SELECT {} FROM game_records WHERE tier = ?1 AND division = ?2 AND game_date >= ?3 AND game_date < ?4 ORDER BY game_date, game_id, summoner_id",
        GAME_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![tier.as_str(), division.0, start, end], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
