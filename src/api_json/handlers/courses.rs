use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::api_json::catalog_view;
use crate::api_json::handlers::AppState;
use crate::providers::CatalogProvider;

/// GET /api/courses
/// Catálogo completo con prerequisitos directos y franjas horarias.
pub async fn courses_handler(state: web::Data<AppState>) -> impl Responder {
    let open_store = state.open_store.clone();
    let res = tokio::task::spawn_blocking(move || {
        let store = open_store()?;
        let snapshot = store.snapshot()?;
        Ok::<_, crate::error::PlannerError>(catalog_view(&snapshot))
    })
    .await;

    match res {
        Ok(Ok(view)) => HttpResponse::Ok().json(view),
        Ok(Err(e)) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to read catalog: {}", e)})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)})),
    }
}
