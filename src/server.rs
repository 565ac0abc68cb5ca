use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

use crate::config::Config;
use crate::handlers;
use crate::state::AppState;
use crate::store::THUMBNAILS_DIR;

pub fn router(config: &Config, app_state: AppState) -> Router {
    let ui = &config.ui_dir;

    Router::new()
        .route(
            "/api/projects",
            get(handlers::list_projects)
                .post(handlers::create_project)
                .put(handlers::update_project)
                .delete(handlers::delete_project),
        )
        .route(
            "/api/about",
            get(handlers::get_about).post(handlers::save_about),
        )
        .route(
            "/api/social",
            get(handlers::get_social).post(handlers::save_social),
        )
        .route("/api/upload", post(handlers::upload_asset))
        .route("/api/cleanup-thumbnails", post(handlers::cleanup_thumbnails))
        .route_service("/", ServeFile::new(ui.join("index.html")))
        .route_service("/about", ServeFile::new(ui.join("about.html")))
        .route_service("/social", ServeFile::new(ui.join("social.html")))
        .nest_service(
            "/thumbnails",
            ServeDir::new(config.public_dir.join(THUMBNAILS_DIR)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Binds the configured port (0 picks an ephemeral one), spawns the serve
/// loop and returns the bound port.
pub async fn start_server(
    config: &Config,
    app_state: AppState,
) -> Result<u16, Box<dyn std::error::Error>> {
    let app = router(config, app_state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();

    info!("Admin server listening on port {port}");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("server terminated: {e}");
        }
    });

    Ok(port)
}
