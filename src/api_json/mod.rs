pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::algorithm::{RoadmapRequest, ScheduledCourse, Strategy};
use crate::models::{Catalog, CourseType, TimeSlot};

/// Cuerpo de `POST /api/generate-path`
///
/// ```json
/// {
///   "username": "BSCS51F24R010",
///   "strategy": "balanced",
///   "current_schedule": [{"id": "CMPC-5201", "name": "Programming Fundamentals"}]
/// }
/// ```
///
/// - `strategy`: `aggressive`, `balanced` o `relaxed`; cualquier otro valor se toma como `balanced`
/// - `current_schedule`: ramos inscritos tentativamente; solo se usa `id` y cuentan como aprobados
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratePathRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub current_schedule: Vec<ScheduleRef>,
}

/// Referencia a un ramo del horario en curso (los demás campos se ignoran).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRef {
    pub id: String,
}

impl GeneratePathRequest {
    pub fn into_request(self) -> RoadmapRequest {
        RoadmapRequest {
            student: self.username,
            strategy: Strategy::parse_or_default(self.strategy.as_deref()),
            current_schedule: self.current_schedule.into_iter().map(|c| c.id).collect(),
        }
    }
}

/// Cuerpo de `POST /api/check-conflict`
#[derive(Debug, Serialize, Deserialize)]
pub struct ConflictRequest {
    pub new_course: ScheduledCourse,
    #[serde(default)]
    pub current_schedule: Vec<ScheduledCourse>,
}

/// Ramo del catálogo tal como lo expone `GET /api/courses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseView {
    pub id: String,
    pub name: String,
    pub credits: u32,
    pub difficulty: u8,
    pub min_semester: u32,
    #[serde(rename = "type")]
    pub kind: CourseType,
    pub prereqs: Vec<String>,
    pub schedule: Vec<TimeSlot>,
}

pub fn catalog_view(catalog: &Catalog) -> Vec<CourseView> {
    catalog
        .courses
        .iter()
        .map(|c| CourseView {
            id: c.id.clone(),
            name: c.name.clone(),
            credits: c.credits,
            difficulty: c.difficulty,
            min_semester: c.min_semester,
            kind: c.kind,
            prereqs: catalog.prereqs_of(&c.id).to_vec(),
            schedule: c.schedule.clone(),
        })
        .collect()
}

/// Interpreta el cuerpo crudo de `POST /api/generate-path`.
pub fn parse_generate_path(body: &[u8]) -> Result<GeneratePathRequest, serde_json::Error> {
    serde_json::from_slice::<GeneratePathRequest>(body)
}

/// Interpreta el cuerpo crudo de `POST /api/check-conflict`.
pub fn parse_conflict_request(body: &[u8]) -> Result<ConflictRequest, serde_json::Error> {
    serde_json::from_slice::<ConflictRequest>(body)
}
