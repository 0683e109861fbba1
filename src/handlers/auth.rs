// POST /register, POST /login, and POST /api/login handlers

use std::convert::Infallible;

use warp::http::StatusCode;

use super::detail_reply;
use crate::models::{ApiLoginResponse, LoginRequest, RegisterRequest};
use crate::store::{ChatStore, Error, NewUser};

/// The single credential accepted by the demo login endpoint
const DEMO_EMAIL: &str = "test@example.com";
const DEMO_PASSWORD: &str = "test123456";
const DEMO_TOKEN: &str = "sampletoken";

pub async fn register_handler(
    request: RegisterRequest,
    store: ChatStore,
) -> Result<impl warp::Reply, Infallible> {
    println!("POST /register: {}", request.email);

    let password_hash = match bcrypt::hash(&request.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(e) => {
            eprintln!("Failed to hash password: {}", e);
            return Ok(detail_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not create user",
            ));
        }
    };

    let new_user = NewUser {
        email: request.email,
        name: request.name,
        password_hash,
    };

    match store.create_user(new_user).await {
        Ok(_) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "message": "User created successfully"
            })),
            StatusCode::OK,
        )),
        Err(Error::DuplicateEmail(_)) => {
            Ok(detail_reply(StatusCode::BAD_REQUEST, "User already exists"))
        }
        Err(e) => {
            eprintln!("Failed to create user: {}", e);
            Ok(detail_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not create user",
            ))
        }
    }
}

pub async fn login_handler(
    request: LoginRequest,
    store: ChatStore,
) -> Result<impl warp::Reply, Infallible> {
    println!("Received login request: {}", request.email);

    let user = match store.get_user_by_email(&request.email).await {
        Ok(user) => user,
        Err(e) => {
            eprintln!("Failed to look up user: {}", e);
            return Ok(detail_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not verify credentials",
            ));
        }
    };

    if let Some(user) = user {
        if bcrypt::verify(&request.password, &user.password_hash).unwrap_or(false) {
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "message": "Login successful"
                })),
                StatusCode::OK,
            ));
        }
    }

    Ok(detail_reply(
        StatusCode::UNAUTHORIZED,
        "Invalid email or password",
    ))
}

pub async fn api_login_handler(request: LoginRequest) -> Result<impl warp::Reply, Infallible> {
    println!("POST /api/login: {}", request.email);

    if request.email != DEMO_EMAIL || request.password != DEMO_PASSWORD {
        return Ok(detail_reply(
            StatusCode::UNAUTHORIZED,
            "Invalid email or password",
        ));
    }

    let response = ApiLoginResponse {
        id: "1".to_string(),
        email: request.email,
        token: DEMO_TOKEN.to_string(),
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}
