use std::sync::Arc;

use supplier_chat::config::AppConfig;
use supplier_chat::llm::{Assistant, OpenAiClient};
use supplier_chat::routes::configure_routes;
use supplier_chat::store::{ChatStore, StoreConfig};

#[tokio::main]
async fn main() {
    // Load .env if present; values already in the environment win
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store_config = match StoreConfig::from_connection_string(&config.database_url) {
        Ok(store_config) => store_config,
        Err(e) => {
            eprintln!("Invalid DATABASE_URL: {}", e);
            std::process::exit(1);
        }
    };

    let store = match ChatStore::new(store_config).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };

    // Create tables on boot
    if let Err(e) = store.migrate().await {
        eprintln!("Failed to run schema migration: {}", e);
        std::process::exit(1);
    }

    let client = match OpenAiClient::new(config.openai_api_key.clone(), config.openai_model.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create OpenAI client: {}", e);
            std::process::exit(1);
        }
    };
    let assistant = Arc::new(Assistant::new(Box::new(client)));

    let routes = configure_routes(store, assistant, &config.frontend_origin);

    println!("Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;
}
