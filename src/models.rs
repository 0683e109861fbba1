// HTTP request and response shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Tag stored in the `sender` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("unknown sender tag: {}", other)),
        }
    }
}

/// Body of POST /register
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of POST /login and POST /api/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful response of POST /api/login
#[derive(Debug, Clone, Serialize)]
pub struct ApiLoginResponse {
    pub id: String,
    pub email: String,
    pub token: String,
}

/// Body of POST /api/chat
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub content: String,
    pub sender: Sender,
    pub user_id: Uuid,
}

/// Response of POST /api/chat
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}
