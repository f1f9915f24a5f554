//! Table definitions for both dialects
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running them again on
//! an existing database changes nothing.

use wc_shared::DatabaseBackend;

use super::connection::DatabasePool;

const SQLITE_TABLES: [&str; 5] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL DEFAULT 'PLAYER' CHECK (role IN ('PLAYER', 'ADMIN')),
        score INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS morphemes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        definition TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS words (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT UNIQUE NOT NULL,
        points INTEGER NOT NULL,
        definition TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS word_morphemes (
        word_id INTEGER NOT NULL,
        morpheme_id INTEGER NOT NULL,
        position INTEGER NOT NULL,
        PRIMARY KEY (word_id, morpheme_id, position),
        FOREIGN KEY (word_id) REFERENCES words(id) ON DELETE CASCADE,
        FOREIGN KEY (morpheme_id) REFERENCES morphemes(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS player_words (
        user_id INTEGER NOT NULL,
        word_id INTEGER NOT NULL,
        PRIMARY KEY (user_id, word_id),
        FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
        FOREIGN KEY (word_id) REFERENCES words(id) ON DELETE CASCADE
    )
    "#,
];

const MYSQL_TABLES: [&str; 5] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGINT PRIMARY KEY AUTO_INCREMENT,
        username VARCHAR(50) UNIQUE NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        role VARCHAR(10) NOT NULL DEFAULT 'PLAYER',
        score BIGINT NOT NULL DEFAULT 0,
        CONSTRAINT chk_users_role CHECK (role IN ('PLAYER', 'ADMIN'))
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS morphemes (
        id BIGINT PRIMARY KEY AUTO_INCREMENT,
        text VARCHAR(100) NOT NULL,
        definition VARCHAR(500) NOT NULL
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS words (
        id BIGINT PRIMARY KEY AUTO_INCREMENT,
        text VARCHAR(100) UNIQUE NOT NULL,
        points BIGINT NOT NULL,
        definition VARCHAR(500) NOT NULL DEFAULT ''
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS word_morphemes (
        word_id BIGINT NOT NULL,
        morpheme_id BIGINT NOT NULL,
        position BIGINT NOT NULL,
        PRIMARY KEY (word_id, morpheme_id, position),
        FOREIGN KEY (word_id) REFERENCES words(id) ON DELETE CASCADE,
        FOREIGN KEY (morpheme_id) REFERENCES morphemes(id) ON DELETE CASCADE
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS player_words (
        user_id BIGINT NOT NULL,
        word_id BIGINT NOT NULL,
        PRIMARY KEY (user_id, word_id),
        FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
        FOREIGN KEY (word_id) REFERENCES words(id) ON DELETE CASCADE
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
    "#,
];

/// DDL for a backend, in dependency order
pub fn table_statements(backend: DatabaseBackend) -> &'static [&'static str] {
    match backend {
        DatabaseBackend::Sqlite => &SQLITE_TABLES,
        DatabaseBackend::MySql => &MYSQL_TABLES,
    }
}

/// Create any missing table
pub async fn create_tables(pool: &DatabasePool) -> Result<(), sqlx::Error> {
    for &statement in table_statements(pool.backend()) {
        sqlx::query(statement).execute(pool.pool()).await?;
    }
    tracing::debug!(backend = %pool.backend(), "Database tables ready");
    Ok(())
}
