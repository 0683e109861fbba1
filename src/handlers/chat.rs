// POST /api/chat and GET /api/chat/history/{userId} handlers

use std::convert::Infallible;
use std::sync::Arc;

use uuid::Uuid;
use warp::http::StatusCode;

use super::detail_reply;
use crate::llm::Assistant;
use crate::models::{ChatRequest, ChatResponse, Sender};
use crate::store::{ChatStore, NewMessage};

pub async fn chat_handler(
    request: ChatRequest,
    store: ChatStore,
    assistant: Arc<Assistant>,
) -> Result<impl warp::Reply, Infallible> {
    println!("POST /api/chat from user {}: {}", request.user_id, request.content);

    // Save the user message
    let user_message = NewMessage {
        content: request.content.clone(),
        sender: request.sender,
        user_id: request.user_id,
    };
    if let Err(e) = store.insert_message(user_message).await {
        eprintln!("Failed to store user message: {}", e);
        return Ok(detail_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not store message",
        ));
    }

    // Provider failures degrade to the fixed apology inside respond(), so
    // this call never fails the request
    let reply = assistant.respond(&request.content).await;

    // Save the bot reply under the same user
    let bot_message = NewMessage {
        content: reply.clone(),
        sender: Sender::Bot,
        user_id: request.user_id,
    };
    if let Err(e) = store.insert_message(bot_message).await {
        eprintln!("Failed to store bot message: {}", e);
        return Ok(detail_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not store message",
        ));
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&ChatResponse { response: reply }),
        StatusCode::OK,
    ))
}

pub async fn history_handler(
    user_id: Uuid,
    store: ChatStore,
) -> Result<impl warp::Reply, Infallible> {
    println!("GET /api/chat/history/{}", user_id);

    match store.get_history(user_id).await {
        Ok(messages) => Ok(warp::reply::with_status(
            warp::reply::json(&messages),
            StatusCode::OK,
        )),
        Err(e) => {
            eprintln!("Failed to load chat history: {}", e);
            Ok(detail_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not load chat history",
            ))
        }
    }
}
