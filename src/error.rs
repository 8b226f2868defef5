//! Errores del planificador.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// El grafo de prerequisitos contiene un ciclo que pasa por `course`.
    #[error("circular prerequisite chain detected at course '{course}'")]
    CycleDetected { course: String },

    #[error("malformed time slot for '{course}': {day} {start}-{end}")]
    MalformedSlot {
        course: String,
        day: String,
        start: i32,
        end: i32,
    },

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
