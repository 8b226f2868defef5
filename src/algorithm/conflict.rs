// Funciones para detectar choques de horario entre ramos.
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::TimeSlot;

/// Mensaje genérico cuando la entrada no se puede evaluar.
pub const GENERIC_CONFLICT_MESSAGE: &str = "Server Error";

/// Ramo tal como llega desde un horario en construcción: solo importan el
/// nombre (para el mensaje) y sus franjas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub schedule: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictResult {
    pub conflict: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl ConflictResult {
    pub fn clear() -> Self {
        ConflictResult { conflict: false, message: None }
    }

    /// Resultado usado ante entradas inválidas: bloquear antes que dejar pasar un choque.
    pub fn fail_safe() -> Self {
        ConflictResult { conflict: true, message: Some(GENERIC_CONFLICT_MESSAGE.to_string()) }
    }
}

/// Franja con inicio >= fin.
fn validate_slots(course: &ScheduledCourse) -> Result<(), PlannerError> {
    for s in course.schedule.iter() {
        if s.start >= s.end {
            return Err(PlannerError::MalformedSlot {
                course: if course.name.is_empty() { course.id.clone() } else { course.name.clone() },
                day: s.day.clone(),
                start: s.start,
                end: s.end,
            });
        }
    }
    Ok(())
}

/// Compara todas las franjas del ramo nuevo contra todas las franjas de cada
/// ramo ya tomado. Devuelve el primer choque encontrado (en orden del horario).
pub fn check_conflict(
    new_course: &ScheduledCourse,
    current_schedule: &[ScheduledCourse],
) -> Result<ConflictResult, PlannerError> {
    // se valida todo antes de responder, sin importar cuál ramo es el nuevo
    validate_slots(new_course)?;
    for existing in current_schedule.iter() {
        validate_slots(existing)?;
    }
    if new_course.schedule.is_empty() {
        return Ok(ConflictResult::clear());
    }

    for existing in current_schedule.iter() {
        for s1 in existing.schedule.iter() {
            for s2 in new_course.schedule.iter() {
                if s1.overlaps(s2) {
                    return Ok(ConflictResult {
                        conflict: true,
                        message: Some(format!("Clash with {} ({} {})", existing.name, s1.day, s1.start)),
                    });
                }
            }
        }
    }
    Ok(ConflictResult::clear())
}

/// Variante de borde: cualquier falla se reporta como choque con mensaje genérico.
pub fn check_conflict_or_block(new_course: &ScheduledCourse, current_schedule: &[ScheduledCourse]) -> ConflictResult {
    match check_conflict(new_course, current_schedule) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("⚠️  [conflict] entrada inválida: {}", e);
            ConflictResult::fail_safe()
        }
    }
}
