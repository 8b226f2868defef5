use actix_web::{web, HttpResponse, Responder};

use crate::algorithm::{check_conflict_or_block, ConflictResult};
use crate::api_json::parse_conflict_request;

/// POST /api/check-conflict
/// El cuerpo se lee crudo: JSON inválido, sin `Content-Type` o con otra forma
/// se responde como choque (mensaje genérico), nunca como 400.
pub async fn check_conflict_handler(body: web::Bytes) -> impl Responder {
    let req = match parse_conflict_request(&body) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("⚠️  [check-conflict] cuerpo inválido: {}", e);
            return HttpResponse::Ok().json(ConflictResult::fail_safe());
        }
    };

    HttpResponse::Ok().json(check_conflict_or_block(&req.new_course, &req.current_schedule))
}
