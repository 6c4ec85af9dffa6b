use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::{
    routing::{get, post},
    Router,
};
use reqwest::Client;
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gitgate_backend::config::Config;
use gitgate_backend::db::postgres_user_repository::PostgresUserRepository;
use gitgate_backend::db::user_repository::UserRepository;
use gitgate_backend::responses::JsonResponse;
use gitgate_backend::routes::auth::{
    github_login::{github_callback, github_login},
    handle_authenticate, handle_me,
};
use gitgate_backend::services::auth::authenticate_user::AuthenticateUserService;
use gitgate_backend::services::oauth::github::client::GitHubOAuthClient;
use gitgate_backend::services::oauth::github::service::GitHubOAuthService;
use gitgate_backend::state::AppState;
use gitgate_backend::utils::jwt::JwtKeys;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env());
    let jwt_keys = JwtKeys::from_env().expect("JWT secret must be configured");

    let pg_pool = establish_connection(&config.database_url).await;
    let user_repo = Arc::new(PostgresUserRepository {
        pool: pg_pool.clone(),
    }) as Arc<dyn UserRepository>;

    let http_client = Client::new();
    let github_oauth = Arc::new(GitHubOAuthClient::new(
        http_client.clone(),
        config.github.clone(),
    )) as Arc<dyn GitHubOAuthService>;

    let authenticator = Arc::new(AuthenticateUserService::new(
        user_repo.clone(),
        github_oauth.clone(),
        jwt_keys.clone(),
    ));

    let state = AppState {
        db: user_repo,
        github_oauth,
        authenticator,
        jwt_keys,
        http_client: Arc::new(http_client),
        config: config.clone(),
    };

    let rate_limit_auth_s: u64 = std::env::var("RATE_LIMITER_AUTH_SECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(1);
    let rate_limit_auth_burst: u32 = std::env::var("RATE_LIMITER_AUTH_BURST")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(10);
    // Stricter limiter for /api/auth/*
    let auth_governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(rate_limit_auth_s)
            .burst_size(rate_limit_auth_burst)
            .use_headers()
            .error_handler(|_err| {
                JsonResponse::too_many_requests(
                    "Too many requests. Please wait a moment and try again.",
                )
                .into_response()
            })
            .finish()
            .unwrap(),
    );

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    let auth_routes = Router::new()
        .route("/authenticate", post(handle_authenticate))
        .route("/github-login", get(github_login))
        .route("/github-callback", get(github_callback))
        .route("/me", get(handle_me))
        .layer(GovernorLayer {
            config: auth_governor_conf,
        });

    let app = Router::new()
        .route("/", get(root))
        .nest("/api/auth", auth_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let make_service = app.into_make_service_with_connect_info::<SocketAddr>();
    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .expect("BIND_ADDR must be a valid socket address");

    let listener = TcpListener::bind(addr).await.unwrap();
    info!("Running at http://{}", addr);
    axum::serve(listener, make_service).await.unwrap();
}

/// A simple root route.
async fn root() -> Response {
    JsonResponse::success("Hello, Gitgate!").into_response()
}

/// Establish a connection to the database, verify it, and apply migrations.
async fn establish_connection(database_url: &str) -> PgPool {
    let pool = PgPool::connect(database_url)
        .await
        .expect("Failed to connect to the database");

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .expect("Failed to verify database connection");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    info!("✅ Successfully connected to the database");
    pool
}
