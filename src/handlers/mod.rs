// Handlers module

pub mod auth;
pub mod chat;

use std::convert::Infallible;

use warp::http::StatusCode;

pub use auth::{api_login_handler, login_handler, register_handler};
pub use chat::{chat_handler, history_handler};

/// GET / handler
pub async fn root_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&serde_json::json!({
        "message": "Welcome to the API"
    })))
}

/// Build a `{"detail": ...}` reply with the given status
pub(crate) fn detail_reply(
    status: StatusCode,
    detail: &str,
) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "detail": detail })),
        status,
    )
}
