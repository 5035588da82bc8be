use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use skillmatch_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);
    app_state.job_service.seed_mock_jobs().await?;

    let public_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/v1/auth/signup", post(routes::auth::signup))
        .route("/api/v1/auth/login", post(routes::auth::login))
        .route("/api/v1/resume/analyze", post(routes::resume::analyze_resume));

    let authed_api = Router::new()
        .route(
            "/api/v1/skills",
            get(routes::skills::list_skills).post(routes::skills::create_skill),
        )
        .route("/api/v1/skills/:name", delete(routes::skills::delete_skill))
        .route(
            "/api/v1/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route(
            "/api/v1/jobs/recommendations",
            get(routes::jobs::recommend_jobs),
        )
        .route(
            "/api/v1/jobs/:id",
            get(routes::jobs::get_job)
                .patch(routes::jobs::update_job)
                .delete(routes::jobs::delete_job),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth,
        ));

    let app = public_api
        .merge(authed_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
