mod common;

use axum::Router;
use axum::http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};
use migration::{Migrator, MigratorTrait};

use gamelist_api::auth::jwt::Claims;
use gamelist_api::config::{Config, Environment};
use gamelist_api::state::AppState;

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

async fn test_app() -> Router {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();

    let state = AppState {
        db,
        config: Config {
            database_url: String::new(),
            jwt_secret: SECRET.to_string(),
            server_host: std::net::IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            environment: Environment::Development,
            log_level: "warn".to_string(),
            frontend_url: "http://localhost:3001".to_string(),
        },
    };

    gamelist_api::routes::router().with_state(state)
}

fn token_with(username: &str, exp: i64) -> String {
    let claims = Claims {
        username: username.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap_or_default()
}

#[tokio::test]
async fn missing_header_rejected() {
    let app = test_app().await;

    let (status, _) = common::get(&app, "/list/me").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_scheme_rejected() {
    let app = test_app().await;

    let (status, _) =
        common::get_with_authorization(&app, "/list/me", "Basic dXNlcjpwYXNz").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_rejected() {
    let app = test_app().await;

    let (status, _) = common::get_with_auth(&app, "/list/me", "not-a-jwt").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_rejected() {
    let app = test_app().await;
    let token = token_with("alice", chrono::Utc::now().timestamp() - 3600);

    let (status, _) = common::get_with_auth(&app, "/list/me", &token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_username_rejected() {
    let app = test_app().await;
    let token = token_with("", chrono::Utc::now().timestamp() + 3600);

    let (status, _) = common::get_with_auth(&app, "/list/me", &token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_accepted() {
    let app = test_app().await;
    let token = token_with("alice", chrono::Utc::now().timestamp() + 3600);

    let (status, body) = common::get_with_auth(&app, "/list/me", &token).await;

    assert_eq!(status, StatusCode::OK, "{body}");
}
