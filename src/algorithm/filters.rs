//! Filtro de candidatos por semestre.
//!
//! Un ramo pendiente es candidato en `semester` si:
//! - todos sus prerequisitos directos están en `passed`
//! - su `min_semester` ya se alcanzó
//! - no figura en la lista de excluidos de la configuración
//!
//! Se re-evalúa en cada iteración porque `passed` crece a medida que se arma el roadmap.

use crate::config::PlannerConfig;
use crate::models::{Catalog, Course};
use std::collections::HashSet;

pub fn filter_candidates<'a>(
    catalog: &Catalog,
    remaining: &[&'a Course],
    passed: &HashSet<String>,
    semester: u32,
    config: &PlannerConfig,
) -> Vec<&'a Course> {
    remaining
        .iter()
        .copied()
        .filter(|course| {
            if config.excluded_courses.contains(&course.id.to_uppercase()) {
                crate::log_checks!(config.verbosity, "   ⊘ {} excluido por configuración", course.id);
                return false;
            }
            if let Some(missing) = catalog.prereqs_of(&course.id).iter().find(|p| !passed.contains(*p)) {
                crate::log_checks!(config.verbosity, "   ⊘ {} espera prerequisito {}", course.id, missing);
                return false;
            }
            if course.min_semester > semester {
                crate::log_checks!(
                    config.verbosity,
                    "   ⊘ {} se ofrece desde el semestre {}",
                    course.id,
                    course.min_semester
                );
                return false;
            }
            true
        })
        .collect()
}
