// Route definitions and handlers

use std::convert::Infallible;
use std::sync::Arc;

use uuid::Uuid;
use warp::Filter;

use crate::handlers;
use crate::llm::Assistant;
use crate::store::ChatStore;

fn with_store(
    store: ChatStore,
) -> impl Filter<Extract = (ChatStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

fn with_assistant(
    assistant: Arc<Assistant>,
) -> impl Filter<Extract = (Arc<Assistant>,), Error = Infallible> + Clone {
    warp::any().map(move || assistant.clone())
}

pub fn configure_routes(
    store: ChatStore,
    assistant: Arc<Assistant>,
    frontend_origin: &str,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /
    let root = warp::path::end()
        .and(warp::get())
        .and_then(handlers::root_handler);

    // POST /register
    let register = warp::path("register")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::register_handler);

    // POST /login
    let login = warp::path("login")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::login_handler);

    let api = warp::path("api");

    // POST /api/login (hardcoded demo credential)
    let api_login = api
        .and(warp::path("login"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(handlers::api_login_handler);

    // POST /api/chat
    let chat = api
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and(with_assistant(assistant))
        .and_then(handlers::chat_handler);

    // GET /api/chat/history/{userId}
    let history = api
        .and(warp::path("chat"))
        .and(warp::path("history"))
        .and(warp::path::param::<Uuid>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store))
        .and_then(handlers::history_handler);

    // CORS restricted to the configured frontend origin
    let cors = warp::cors()
        .allow_origin(frontend_origin)
        .allow_methods(vec!["GET", "POST"])
        .allow_headers(vec!["content-type"]);

    // Combine routes
    root.or(register)
        .or(login)
        .or(api_login)
        .or(chat)
        .or(history)
        .with(cors)
}
