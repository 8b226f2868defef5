// Biblioteca raíz del crate `coursepath`.
// Planificador de semestres (roadmap con prerequisitos, topes de créditos y
// electivos) y detector de choques de horario, más la API HTTP que los expone.
pub mod logging;
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

pub use algorithm::{check_conflict, generate_roadmap, plan_for_student, RoadmapBuilder, RoadmapRequest, Strategy};
pub use config::{AppConfig, PlannerConfig};
pub use error::PlannerError;
