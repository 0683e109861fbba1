use deadpool_postgres::Pool;
use tokio_postgres::Row;
use uuid::Uuid;

use crate::store::error::{Error, Result};
use crate::store::types::{NewMessage, StoredMessage};

fn parse_message_row(row: &Row) -> Result<StoredMessage> {
    // The sender column is free text in the database; reject anything that
    // is not a known tag rather than guessing
    let sender_str: String = row.get("sender");
    let sender = sender_str.parse().map_err(|_| {
        Error::DatabaseError(format!("Unknown sender '{}' in messages table", sender_str))
    })?;

    Ok(StoredMessage {
        id: row.get("id"),
        content: row.get("content"),
        sender,
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
    })
}

/// Insert a chat message and return the stored row
///
/// The id is generated client-side as UUIDv4 and `created_at` is set by the
/// database, so retrieval order follows insertion order.
pub async fn insert_message(pool: &Pool, message: NewMessage) -> Result<StoredMessage> {
    let conn = pool.get().await?;

    let id = Uuid::new_v4();
    let sender = message.sender.as_str();
    let sql = "INSERT INTO messages (id, content, sender, user_id) \
               VALUES ($1, $2, $3, $4) \
               RETURNING id, content, sender, user_id, created_at";

    let row = conn
        .query_one(sql, &[&id, &message.content, &sender, &message.user_id])
        .await?;

    parse_message_row(&row)
}

/// Retrieve all messages for a user, oldest first
///
/// No pagination: the whole history is returned ordered by `created_at`
/// ascending.
pub async fn get_history(pool: &Pool, user_id: Uuid) -> Result<Vec<StoredMessage>> {
    let conn = pool.get().await?;

    let sql = "SELECT id, content, sender, user_id, created_at \
               FROM messages WHERE user_id = $1 \
               ORDER BY created_at ASC";

    let rows = conn.query(sql, &[&user_id]).await?;
    rows.iter().map(parse_message_row).collect()
}
