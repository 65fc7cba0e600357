use crate::{
    routes::{addresses, api, applications, appointments, caregivers, home, jobs, members,
        reports, users},
    util::assets::AssetCache,
};
use axum::{
    Router,
    routing::{get, get_service},
};
use minijinja::Environment;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub templates: Arc<Environment<'static>>,
}

pub async fn create_router(db: DatabaseConnection) -> anyhow::Result<Router> {
    let templates = setup_templates().await;

    let state = AppState {
        db,
        templates: Arc::new(templates),
    };

    let app = Router::new()
        .route("/", get(home::dashboard))
        .nest("/users", users::routes())
        .nest("/caregivers", caregivers::routes())
        .nest("/members", members::routes())
        .nest("/addresses", addresses::routes())
        .nest("/jobs", jobs::routes())
        .nest("/applications", applications::routes())
        .nest("/appointments", appointments::routes())
        .route("/reports", get(reports::reports_page))
        .route("/api/stats", get(api::api_stats))
        .route(
            "/api/reports/accepted-appointments",
            get(api::api_accepted_appointments),
        )
        .with_state(state)
        .nest_service("/static", get_service(ServeDir::new("static")))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

async fn setup_templates() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader("templates"));
    let assets = AssetCache::new();
    assets.register(&mut env);
    env
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
