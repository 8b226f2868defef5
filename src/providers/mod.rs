//! Fuentes de datos externas: catálogo de ramos y datos del estudiante.
//!
//! El planificador solo lee de estas fuentes; nunca escribe.

pub mod sqlite;

use std::collections::HashMap;

use crate::error::PlannerError;
use crate::models::{Catalog, Course, PrereqEdge};

pub use sqlite::SqliteStore;

pub trait CatalogProvider {
    /// Ramos con sus franjas horarias ya resueltas.
    fn courses(&self) -> Result<Vec<Course>, PlannerError>;
    fn prerequisite_edges(&self) -> Result<Vec<PrereqEdge>, PlannerError>;

    /// Foto completa del catálogo para una corrida.
    fn snapshot(&self) -> Result<Catalog, PlannerError> {
        Ok(Catalog::new(self.courses()?, self.prerequisite_edges()?))
    }
}

pub trait StudentProvider {
    /// `None` si el estudiante no existe.
    fn current_semester(&self, student: &str) -> Result<Option<u32>, PlannerError>;
    fn passed_courses(&self, student: &str) -> Result<Vec<String>, PlannerError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pub courses: Vec<Course>,
    pub edges: Vec<PrereqEdge>,
}

impl InMemoryCatalog {
    pub fn new(courses: Vec<Course>, edges: Vec<PrereqEdge>) -> Self {
        InMemoryCatalog { courses, edges }
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn courses(&self) -> Result<Vec<Course>, PlannerError> {
        Ok(self.courses.clone())
    }

    fn prerequisite_edges(&self) -> Result<Vec<PrereqEdge>, PlannerError> {
        Ok(self.edges.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentRecord {
    pub current_semester: u32,
    pub passed: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStudents {
    pub students: HashMap<String, StudentRecord>,
}

impl InMemoryStudents {
    pub fn with_student(mut self, id: &str, current_semester: u32, passed: &[&str]) -> Self {
        self.students.insert(
            id.to_string(),
            StudentRecord {
                current_semester,
                passed: passed.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }
}

impl StudentProvider for InMemoryStudents {
    fn current_semester(&self, student: &str) -> Result<Option<u32>, PlannerError> {
        Ok(self.students.get(student).map(|s| s.current_semester))
    }

    fn passed_courses(&self, student: &str) -> Result<Vec<String>, PlannerError> {
        Ok(self.students.get(student).map(|s| s.passed.clone()).unwrap_or_default())
    }
}

/// Fuente que entrega catálogo y estudiantes a la vez (lo que consume el servidor).
pub trait DataSource: CatalogProvider + StudentProvider {}

impl<T: CatalogProvider + StudentProvider> DataSource for T {}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub catalog: InMemoryCatalog,
    pub students: InMemoryStudents,
}

impl CatalogProvider for InMemoryStore {
    fn courses(&self) -> Result<Vec<Course>, PlannerError> {
        self.catalog.courses()
    }

    fn prerequisite_edges(&self) -> Result<Vec<PrereqEdge>, PlannerError> {
        self.catalog.prerequisite_edges()
    }
}

impl StudentProvider for InMemoryStore {
    fn current_semester(&self, student: &str) -> Result<Option<u32>, PlannerError> {
        self.students.current_semester(student)
    }

    fn passed_courses(&self, student: &str) -> Result<Vec<String>, PlannerError> {
        self.students.passed_courses(student)
    }
}
