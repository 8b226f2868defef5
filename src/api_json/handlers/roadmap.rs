use actix_web::{web, HttpResponse, Responder};
use std::sync::{Arc, OnceLock};
use tokio::sync::Semaphore;

use crate::algorithm::generate_roadmap;
use crate::api_json::parse_generate_path;
use crate::api_json::handlers::AppState;
use crate::models::RoadmapEntry;

/// Limita cuántas planificaciones corren a la vez en el pool bloqueante.
fn planning_semaphore() -> Arc<Semaphore> {
    static GLOBAL_SEM: OnceLock<Arc<Semaphore>> = OnceLock::new();
    GLOBAL_SEM
        .get_or_init(|| Arc::new(Semaphore::new(std::cmp::max(1, num_cpus::get()))))
        .clone()
}

/// POST /api/generate-path
/// Devuelve la lista de semestres `{semester, courses, total_credits, reason}`.
/// Ante cualquier falla (incluido un cuerpo que no es JSON) responde `[]` y
/// deja el detalle en el log.
pub async fn generate_path_handler(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let empty: Vec<RoadmapEntry> = Vec::new();

    let params = match parse_generate_path(&body) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("❌ [generate-path] cuerpo inválido: {}", e);
            return HttpResponse::Ok().json(empty);
        }
    };
    let request = params.into_request();

    let permit = match planning_semaphore().acquire_owned().await {
        Ok(p) => p,
        Err(_) => {
            eprintln!("❌ [generate-path] no se pudo adquirir el semáforo");
            return HttpResponse::Ok().json(empty);
        }
    };

    let open_store = state.open_store.clone();
    let planner = state.planner.clone();
    let start = std::time::Instant::now();

    let blocking_handle = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        match open_store() {
            Ok(store) => generate_roadmap(&*store, &*store, &request, &planner),
            Err(e) => {
                eprintln!("❌ [generate-path] no se pudo abrir el catálogo: {}", e);
                Vec::new()
            }
        }
    });

    let entries = match blocking_handle.await {
        Ok(entries) => entries,
        Err(e) => {
            // un panic dentro del planificador termina aquí
            eprintln!("❌ [generate-path] task join error: {}", e);
            Vec::new()
        }
    };

    crate::log_changes!(
        state.planner.verbosity,
        "✅ [generate-path] {} semestres en {} ms",
        entries.len(),
        start.elapsed().as_millis()
    );
    HttpResponse::Ok().json(entries)
}
