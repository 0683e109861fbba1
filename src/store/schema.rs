//! Schema creation, run once at startup

use deadpool_postgres::Pool;

use crate::store::error::Result;

/// Tables and indexes required by the chat store
///
/// Identifiers are generated client-side as UUIDv4, so no extension is
/// needed for defaults. The UNIQUE constraint on email is what turns a
/// duplicate registration into a clean 400 instead of a second row.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    name TEXT,
    role TEXT NOT NULL DEFAULT 'user',
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS messages (
    id UUID PRIMARY KEY,
    content TEXT NOT NULL,
    sender TEXT NOT NULL,
    user_id UUID NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS messages_user_created_idx
    ON messages (user_id, created_at);
";

/// Create the chat store tables if they do not exist yet
pub async fn migrate(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;
    conn.batch_execute(SCHEMA_SQL).await?;
    Ok(())
}
