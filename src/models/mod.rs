// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prefijos de código que identifican ramos electivos (especialización).
pub const ELECTIVE_PREFIXES: [&str; 5] = ["CSDE", "ITDC", "SEDC", "DSDC", "AIDC"];

pub const DEFAULT_DIFFICULTY: u8 = 3;
pub const DEFAULT_MIN_SEMESTER: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    #[default]
    Core,
    Elective,
}

impl CourseType {
    /// Clasifica un código de ramo según su prefijo de categoría.
    pub fn classify(course_id: &str) -> CourseType {
        let upper = course_id.trim().to_uppercase();
        if ELECTIVE_PREFIXES.iter().any(|p| upper.starts_with(p)) {
            CourseType::Elective
        } else {
            CourseType::Core
        }
    }
}

/// Franja semanal (día, inicio, fin). Las horas son enteros 24h (p.ej. 900, 1030).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: String,
    pub start: i32,
    pub end: i32,
}

impl TimeSlot {
    pub fn new(day: &str, start: i32, end: i32) -> Self {
        TimeSlot { day: day.to_string(), start, end }
    }

    /// Mismo día y rangos abiertos que se cruzan.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub credits: u32,
    pub difficulty: u8,
    pub min_semester: u32,
    #[serde(rename = "type", default)]
    pub kind: CourseType,
    #[serde(default)]
    pub schedule: Vec<TimeSlot>,
}

impl Course {
    /// Construye un ramo aplicando los valores por defecto del catálogo:
    /// dificultad 3 si falta y semestre mínimo 1 si falta o viene en 0.
    pub fn new(
        id: &str,
        name: &str,
        credits: u32,
        difficulty: Option<u8>,
        min_semester: Option<u32>,
    ) -> Self {
        Course {
            id: id.to_string(),
            name: name.to_string(),
            credits,
            difficulty: difficulty.filter(|d| *d > 0).unwrap_or(DEFAULT_DIFFICULTY),
            min_semester: min_semester.filter(|s| *s > 0).unwrap_or(DEFAULT_MIN_SEMESTER),
            kind: CourseType::classify(id),
            schedule: Vec::new(),
        }
    }

    pub fn with_slot(mut self, day: &str, start: i32, end: i32) -> Self {
        self.schedule.push(TimeSlot::new(day, start, end));
        self
    }

    pub fn is_elective(&self) -> bool {
        self.kind == CourseType::Elective
    }
}

/// Arista de prerequisito: `course` no puede cursarse hasta aprobar `prereq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrereqEdge {
    pub course: String,
    pub prereq: String,
}

impl PrereqEdge {
    pub fn new(course: &str, prereq: &str) -> Self {
        PrereqEdge { course: course.to_string(), prereq: prereq.to_string() }
    }
}

/// Foto del catálogo usada en una corrida de planificación.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub edges: Vec<PrereqEdge>,
    prereqs_by_course: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>, edges: Vec<PrereqEdge>) -> Self {
        let mut prereqs_by_course: HashMap<String, Vec<String>> = HashMap::new();
        for e in edges.iter() {
            prereqs_by_course.entry(e.course.clone()).or_default().push(e.prereq.clone());
        }
        Catalog { courses, edges, prereqs_by_course }
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Prerequisitos directos (vacío si el ramo no tiene).
    pub fn prereqs_of(&self, id: &str) -> &[String] {
        self.prereqs_by_course.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

/// Semestre del roadmap: ramos elegidos, créditos totales y explicación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub semester: u32,
    pub courses: Vec<Course>,
    pub total_credits: u32,
    pub reason: String,
}
