use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use crate::api_json::handlers::{
    check_conflict_handler, courses_handler, generate_path_handler, help_handler, AppState,
};
use crate::config::AppConfig;
use crate::error::PlannerError;
use crate::providers::{DataSource, SqliteStore};

/// Registra las rutas de la API (compartido entre el servidor y los tests).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/courses", web::get().to(courses_handler))
        .route("/api/generate-path", web::post().to(generate_path_handler))
        .route("/api/check-conflict", web::post().to(check_conflict_handler))
        .route("/help", web::get().to(help_handler));
}

/// Estado de la app respaldado por la base SQLite configurada.
pub fn sqlite_state(config: &AppConfig) -> AppState {
    let db_path = config.db_path.clone();
    AppState {
        planner: config.planner.clone(),
        open_store: Arc::new(move || -> Result<Box<dyn DataSource>, PlannerError> {
            let store = SqliteStore::open(&db_path)?;
            Ok(Box::new(store) as Box<dyn DataSource>)
        }),
    }
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let state = web::Data::new(sqlite_state(&config));
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
