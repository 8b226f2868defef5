// Módulo de alto nivel para la generación del roadmap y el chequeo de choques.
pub mod conflict;
pub mod filters;
pub mod packer;
pub mod roadmap;
pub mod scoring;
pub mod weight;

pub use conflict::{check_conflict, check_conflict_or_block, ConflictResult, ScheduledCourse};
pub use roadmap::{PlanOutcome, Roadmap, RoadmapBuilder};
pub use scoring::Strategy;
pub use weight::DependencyWeights;

use std::collections::HashSet;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::models::RoadmapEntry;
use crate::providers::{CatalogProvider, StudentProvider};

/// Pedido de roadmap para un estudiante.
#[derive(Debug, Clone, Default)]
pub struct RoadmapRequest {
    pub student: String,
    pub strategy: Strategy,
    /// Ramos inscritos tentativamente; cuentan como aprobados para planificar.
    pub current_schedule: Vec<String>,
}

/// Arma el roadmap de un estudiante con una foto fresca del catálogo.
///
/// El semestre inicial es el semestre actual registrado + 1, o 1 si el
/// estudiante no existe.
pub fn plan_for_student<C, S>(
    catalog: &C,
    students: &S,
    request: &RoadmapRequest,
    config: &PlannerConfig,
) -> Result<Roadmap, PlannerError>
where
    C: CatalogProvider + ?Sized,
    S: StudentProvider + ?Sized,
{
    let mut passed: HashSet<String> = students.passed_courses(&request.student)?.into_iter().collect();
    passed.extend(request.current_schedule.iter().cloned());

    let start_semester = match students.current_semester(&request.student)? {
        Some(sem) => sem + 1,
        None => {
            crate::log_checks!(config.verbosity, "   estudiante {} sin registro: semestre inicial 1", request.student);
            1
        }
    };

    let snapshot = catalog.snapshot()?;
    RoadmapBuilder::new(&snapshot, request.strategy, config).build(passed, start_semester)
}

/// Borde público: cualquier falla se registra y se devuelve un roadmap vacío.
pub fn generate_roadmap<C, S>(
    catalog: &C,
    students: &S,
    request: &RoadmapRequest,
    config: &PlannerConfig,
) -> Vec<RoadmapEntry>
where
    C: CatalogProvider + ?Sized,
    S: StudentProvider + ?Sized,
{
    match plan_for_student(catalog, students, request, config) {
        Ok(roadmap) => {
            if roadmap.outcome == PlanOutcome::Unplaceable {
                eprintln!(
                    "⚠️  [roadmap] {}: armado detenido, sin ubicar: {}",
                    request.student,
                    roadmap.unplaced.join(", ")
                );
            }
            roadmap.entries
        }
        Err(e) => {
            eprintln!("❌ [roadmap] {}: {}", request.student, e);
            Vec::new()
        }
    }
}
