//! Row types for the chat store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Sender;

/// A registered user row
///
/// The password hash never leaves the process: it is skipped during
/// serialization so a `User` can be returned from a handler directly.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
}

/// A stored chat message row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a message
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub content: String,
    pub sender: Sender,
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_skips_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            name: Some("Alice".to_string()),
            role: "user".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            created_at: Utc::now(),
        };
        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("a@example.com"));
        assert!(!serialized.contains("password_hash"));
        assert!(!serialized.contains("secret"));
    }

    #[test]
    fn test_stored_message_serialization() {
        let message = StoredMessage {
            id: Uuid::new_v4(),
            content: "Hello".to_string(),
            sender: Sender::User,
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&message).unwrap()).unwrap();
        assert_eq!(value["content"], "Hello");
        assert_eq!(value["sender"], "user");

        let round_trip: StoredMessage =
            serde_json::from_value(value).unwrap();
        assert_eq!(round_trip, message);
    }
}
