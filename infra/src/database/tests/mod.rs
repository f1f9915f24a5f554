mod repository_tests;
mod seed_tests;

use tempfile::TempDir;
use wc_shared::DatabaseConfig;

use crate::database::connection::DatabasePool;
use crate::database::schema::create_tables;

/// Configuration for a SQLite file inside `dir`
pub(super) fn sqlite_config(dir: &TempDir) -> DatabaseConfig {
    let path = dir.path().join("wordcrafter-test.db");
    DatabaseConfig::sqlite(path.display().to_string())
        .with_max_connections(2)
        .with_seed_defaults(false)
}

/// Pool on a fresh database with every table created
pub(super) async fn test_pool(dir: &TempDir) -> DatabasePool {
    let pool = DatabasePool::new(&sqlite_config(dir)).await.unwrap();
    create_tables(&pool).await.unwrap();
    pool
}
