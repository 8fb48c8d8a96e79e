use log::debug;

use crate::database::{self, DbConn, DbPool};
use crate::domain::{Division, GameRecord, Summoner, SummonerId, Tier, TimeWindow};
use crate::errors::StoreError;

/// Read access to processed game records
pub trait GameStore {
    fn fetch_summoner(&self, summoner_id: SummonerId) -> Result<Summoner, StoreError>;

    fn fetch_games_by_summoner(
        &self,
        summoner_id: SummonerId,
        window: &TimeWindow,
    ) -> Result<Vec<GameRecord>, StoreError>;

    fn fetch_games_by_tier_division(
        &self,
        tier: Tier,
        division: Division,
        window: &TimeWindow,
    ) -> Result<Vec<GameRecord>, StoreError>;
}

/// SQLite-backed game store
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(database_path: &str) -> Result<Self, StoreError> {
        let pool = database::create_pool(database_path)?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn connection(&self) -> Result<DbConn, StoreError> {
        database::get_connection(&self.pool)
    }

    pub fn insert_summoner(&self, summoner: &Summoner) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        database::summoners::insert_summoner(&mut conn, summoner)?;
        Ok(())
    }

    pub fn insert_game_record(&self, game: &GameRecord) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        database::games::insert_game_record(&mut conn, game)?;
        Ok(())
    }
}

impl GameStore for SqliteStore {
    fn fetch_summoner(&self, summoner_id: SummonerId) -> Result<Summoner, StoreError> {
        let mut conn = self.connection()?;
        database::summoners::find_by_id(&mut conn, summoner_id)?
            .ok_or(StoreError::SummonerNotFound(summoner_id))
    }

    fn fetch_games_by_summoner(
        &self,
        summoner_id: SummonerId,
        window: &TimeWindow,
    ) -> Result<Vec<GameRecord>, StoreError> {
        let mut conn = self.connection()?;
        let games = database::games::list_by_summoner(&mut conn, summoner_id, window.start, window.end)?;
        debug!("Fetched {} games for summoner {} in [{}, {})", games.len(), summoner_id, window.start, window.end);
        Ok(games)
    }

    fn fetch_games_by_tier_division(
        &self,
        tier: Tier,
        division: Division,
        window: &TimeWindow,
    ) -> Result<Vec<GameRecord>, StoreError> {
        let mut conn = self.connection()?;
        let games = database::games::list_by_tier_division(&mut conn, tier, division, window.start, window.end)?;
        debug!("Fetched {} games for {} {} in [{}, {})", games.len(), tier, division, window.start, window.end);
        Ok(games)
    }
}
