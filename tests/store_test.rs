mod common;

use std::time::Duration;

use supplier_chat::models::Sender;
use supplier_chat::store::{ChatStore, Error, NewMessage, NewUser, StoreConfig};
use testcontainers::clients::Cli;
use uuid::Uuid;

async fn setup_store(host_port: u16) -> ChatStore {
    let connection_string = common::build_connection_string("127.0.0.1", host_port);

    let config = StoreConfig::from_connection_string(&connection_string)
        .expect("Failed to create config from connection string");

    let store = ChatStore::new(config)
        .await
        .expect("Failed to create chat store");

    store.migrate().await.expect("Failed to run migration");

    store
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: None,
        password_hash: "$2b$12$not-a-real-hash".to_string(),
    }
}

#[tokio::test]
async fn test_create_user_and_lookup() {
    let docker = Cli::default();
    let container = docker.run(common::create_postgres_container());
    let store = setup_store(container.get_host_port_ipv4(common::POSTGRES_PORT)).await;

    let created = store
        .create_user(NewUser {
            email: "alice@example.com".to_string(),
            name: Some("Alice".to_string()),
            password_hash: "$2b$12$not-a-real-hash".to_string(),
        })
        .await
        .expect("Failed to create user");

    assert_eq!(created.email, "alice@example.com");
    assert_eq!(created.name.as_deref(), Some("Alice"));
    assert_eq!(created.role, "user");

    let found = store
        .get_user_by_email("alice@example.com")
        .await
        .expect("Lookup failed")
        .expect("User should exist");
    assert_eq!(found.id, created.id);

    let missing = store
        .get_user_by_email("nobody@example.com")
        .await
        .expect("Lookup failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let docker = Cli::default();
    let container = docker.run(common::create_postgres_container());
    let store = setup_store(container.get_host_port_ipv4(common::POSTGRES_PORT)).await;

    store
        .create_user(new_user("bob@example.com"))
        .await
        .expect("First registration should succeed");

    let second = store.create_user(new_user("bob@example.com")).await;
    assert!(matches!(second, Err(Error::DuplicateEmail(ref email)) if email == "bob@example.com"));
}

#[tokio::test]
async fn test_chat_turn_writes_user_and_bot_rows() {
    let docker = Cli::default();
    let container = docker.run(common::create_postgres_container());
    let store = setup_store(container.get_host_port_ipv4(common::POSTGRES_PORT)).await;

    let user_id = Uuid::new_v4();

    store
        .insert_message(NewMessage {
            content: "What suppliers carry widgets?".to_string(),
            sender: Sender::User,
            user_id,
        })
        .await
        .expect("Failed to insert user message");

    store
        .insert_message(NewMessage {
            content: "Acme and Globex both stock widgets.".to_string(),
            sender: Sender::Bot,
            user_id,
        })
        .await
        .expect("Failed to insert bot message");

    let history = store.get_history(user_id).await.expect("History failed");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sender, Sender::User);
    assert_eq!(history[1].sender, Sender::Bot);
    assert!(history.iter().all(|m| m.user_id == user_id));
}

#[tokio::test]
async fn test_history_is_ordered_by_creation_time() {
    let docker = Cli::default();
    let container = docker.run(common::create_postgres_container());
    let store = setup_store(container.get_host_port_ipv4(common::POSTGRES_PORT)).await;

    let user_id = Uuid::new_v4();

    for i in 0..5 {
        store
            .insert_message(NewMessage {
                content: format!("message {}", i),
                sender: if i % 2 == 0 { Sender::User } else { Sender::Bot },
                user_id,
            })
            .await
            .expect("Failed to insert message");

        // Keep created_at strictly increasing so ordering is observable
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let history = store.get_history(user_id).await.expect("History failed");
    assert_eq!(history.len(), 5);

    for pair in history.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
    for (i, message) in history.iter().enumerate() {
        assert_eq!(message.content, format!("message {}", i));
    }
}

#[tokio::test]
async fn test_history_scoped_to_user() {
    let docker = Cli::default();
    let container = docker.run(common::create_postgres_container());
    let store = setup_store(container.get_host_port_ipv4(common::POSTGRES_PORT)).await;

    let first_user = Uuid::new_v4();
    let second_user = Uuid::new_v4();

    store
        .insert_message(NewMessage {
            content: "first user's message".to_string(),
            sender: Sender::User,
            user_id: first_user,
        })
        .await
        .expect("Failed to insert message");

    store
        .insert_message(NewMessage {
            content: "second user's message".to_string(),
            sender: Sender::User,
            user_id: second_user,
        })
        .await
        .expect("Failed to insert message");

    let history = store.get_history(first_user).await.expect("History failed");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].content, "first user's message");

    let empty = store.get_history(Uuid::new_v4()).await.expect("History failed");
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    let docker = Cli::default();
    let container = docker.run(common::create_postgres_container());
    let store = setup_store(container.get_host_port_ipv4(common::POSTGRES_PORT)).await;

    // Running the migration again must not fail or clobber data
    store
        .create_user(new_user("carol@example.com"))
        .await
        .expect("Failed to create user");

    store.migrate().await.expect("Second migration failed");

    let found = store
        .get_user_by_email("carol@example.com")
        .await
        .expect("Lookup failed");
    assert!(found.is_some());
}
