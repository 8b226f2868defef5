use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::ScheduledCourse;
use crate::api_json::{ConflictRequest, GeneratePathRequest, ScheduleRef};
use crate::models::TimeSlot;

pub async fn help_handler() -> impl Responder {
    let path_example = GeneratePathRequest {
        username: "BSCS51F24R010".to_string(),
        strategy: Some("balanced".to_string()),
        current_schedule: vec![ScheduleRef { id: "CMPC-5201".to_string() }],
    };

    let conflict_example = ConflictRequest {
        new_course: ScheduledCourse {
            id: "CMPC-5205".to_string(),
            name: "Data Structures".to_string(),
            schedule: vec![TimeSlot::new("Mon", 1000, 1130)],
        },
        current_schedule: vec![ScheduledCourse {
            id: "CMPC-5201".to_string(),
            name: "Programming Fundamentals".to_string(),
            schedule: vec![TimeSlot::new("Mon", 900, 1030)],
        }],
    };

    let help = json!({
        "description": "API del planificador de semestres. POST /api/generate-path arma el roadmap del estudiante; POST /api/check-conflict revisa choques de horario; GET /api/courses lista el catálogo.",
        "generate_path_example": path_example,
        "check_conflict_example": conflict_example,
        "strategies": ["aggressive", "balanced", "relaxed"],
        "note": "Estrategias desconocidas se tratan como 'balanced'. Las horas son enteros 24h (900 = 09:00)."
    });

    HttpResponse::Ok().json(help)
}
