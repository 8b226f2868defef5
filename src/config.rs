//! Configuración del servicio y del planificador.
//!
//! Se lee del entorno (y de `.env` si existe):
//! - `COURSEPATH_DB_PATH`: ruta a la base SQLite del catálogo (default `university.db`)
//! - `COURSEPATH_BIND`: dirección del servidor HTTP (default `127.0.0.1:5000`)
//! - `COURSEPATH_VERBOSITY`: 0-3 (default 1)
//! - `COURSEPATH_EXCLUDED_COURSES`: códigos separados por coma que nunca se planifican
//!   (default: los proyectos de título `CMPC-6702,CMPC-6703`; vacío = sin exclusiones)

use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use crate::logging::{parse_verbosity, VERBOSITY_CHANGES};

pub const DEFAULT_DB_PATH: &str = "university.db";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const MAX_SEMESTER: u32 = 8;
pub const MAX_ELECTIVES_PER_SEMESTER: usize = 2;
/// Proyectos de título: se inscriben a mano, el roadmap no los propone.
pub const DEFAULT_EXCLUDED_COURSES: [&str; 2] = ["CMPC-6702", "CMPC-6703"];

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Último semestre que el roadmap puede poblar.
    pub max_semester: u32,
    pub max_electives: usize,
    /// Ramos que nunca entran como candidatos (p.ej. proyectos de título con inscripción manual).
    pub excluded_courses: HashSet<String>,
    pub verbosity: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_semester: MAX_SEMESTER,
            max_electives: MAX_ELECTIVES_PER_SEMESTER,
            excluded_courses: DEFAULT_EXCLUDED_COURSES.iter().map(|c| c.to_string()).collect(),
            verbosity: VERBOSITY_CHANGES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub bind_addr: String,
    pub planner: PlannerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            bind_addr: DEFAULT_BIND.to_string(),
            planner: PlannerConfig::default(),
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Convierte 'a, b,,c' -> {"A","B","C"}
pub fn parse_course_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|p| p.trim().to_uppercase())
        .filter(|p| !p.is_empty())
        .collect()
}

impl AppConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Variante parametrizable para pruebas: recibe la función que resuelve variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let db_path = lookup("COURSEPATH_DB_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);
        let bind_addr = lookup("COURSEPATH_BIND")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.bind_addr);
        let verbosity = parse_verbosity(lookup("COURSEPATH_VERBOSITY").as_deref());
        let excluded_courses = lookup("COURSEPATH_EXCLUDED_COURSES")
            .map(|s| parse_course_list(&s))
            .unwrap_or(defaults.planner.excluded_courses);

        Self {
            db_path,
            bind_addr,
            planner: PlannerConfig {
                verbosity,
                excluded_courses,
                ..defaults.planner
            },
        }
    }
}
