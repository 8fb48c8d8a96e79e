use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::StoreError;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool, StoreError> {
    let manager = build_manager(database_path);
    build_pool(manager)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path)
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool, StoreError> {
    r2d2::Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(StoreError::Unavailable)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn, StoreError> {
    pool.get().map_err(StoreError::Unavailable)
}
