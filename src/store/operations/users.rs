use deadpool_postgres::Pool;
use tokio_postgres::error::SqlState;
use tokio_postgres::Row;
use uuid::Uuid;

use crate::store::error::{Error, Result};
use crate::store::types::{NewUser, User};

fn parse_user_row(row: &Row) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        role: row.get("role"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

/// Insert a new user and return the stored row
///
/// The id is generated client-side as UUIDv4; the role defaults to "user"
/// and `created_at` is set by the database.
///
/// # Errors
///
/// * `Error::DuplicateEmail` - a user with this email already exists
/// * `Error::DatabaseError` - connection or SQL errors
pub async fn create_user(pool: &Pool, user: NewUser) -> Result<User> {
    let conn = pool.get().await?;

    let id = Uuid::new_v4();
    let sql = "INSERT INTO users (id, email, name, password_hash) \
               VALUES ($1, $2, $3, $4) \
               RETURNING id, email, name, role, password_hash, created_at";

    let result = conn
        .query_one(sql, &[&id, &user.email, &user.name, &user.password_hash])
        .await;

    match result {
        Ok(row) => Ok(parse_user_row(&row)),
        Err(e) => {
            // Unique violation on the email column means the user exists
            if let Some(db_error) = e.as_db_error() {
                if db_error.code() == &SqlState::UNIQUE_VIOLATION {
                    return Err(Error::DuplicateEmail(user.email));
                }
            }
            Err(e.into())
        }
    }
}

/// Look up a user by email
///
/// Returns `None` if no user with that email exists.
pub async fn get_user_by_email(pool: &Pool, email: &str) -> Result<Option<User>> {
    let conn = pool.get().await?;

    let sql = "SELECT id, email, name, role, password_hash, created_at \
               FROM users WHERE email = $1";

    let row = conn.query_opt(sql, &[&email]).await?;
    Ok(row.as_ref().map(parse_user_row))
}
