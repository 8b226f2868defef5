use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::PlannerError;
use crate::models::{Course, PrereqEdge, TimeSlot};
use crate::providers::{CatalogProvider, StudentProvider};

/// Lector de la base `university.db`. Tablas usadas:
/// `Courses`, `Prerequisites`, `CourseSchedule`, `StudentProfiles`, `PassedCourses`.
///
/// La conexión se abre en solo lectura cuando viene de un archivo; el esquema
/// lo administra otro componente.
pub struct SqliteStore {
    conn: Connection,
}

impl fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SqliteStore(..)")
    }
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(SqliteStore { conn })
    }

    /// Envuelve una conexión existente (p.ej. una base en memoria para tests).
    pub fn from_connection(conn: Connection) -> Self {
        SqliteStore { conn }
    }

    fn schedules(&self) -> Result<HashMap<String, Vec<TimeSlot>>, PlannerError> {
        let mut stmt = self.conn.prepare(
            "SELECT course_id, day_of_week, start_time, end_time FROM CourseSchedule ORDER BY schedule_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                TimeSlot {
                    day: row.get::<_, String>(1)?,
                    start: row.get::<_, i32>(2)?,
                    end: row.get::<_, i32>(3)?,
                },
            ))
        })?;

        let mut by_course: HashMap<String, Vec<TimeSlot>> = HashMap::new();
        for r in rows {
            let (course_id, slot) = r?;
            by_course.entry(course_id).or_default().push(slot);
        }
        Ok(by_course)
    }
}

impl CatalogProvider for SqliteStore {
    fn courses(&self) -> Result<Vec<Course>, PlannerError> {
        let mut schedules = self.schedules()?;
        let mut stmt = self.conn.prepare(
            "SELECT course_id, course_name, credits, difficulty_level, min_semester FROM Courses ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            let id: String = row.get(0)?;
            let name: Option<String> = row.get(1)?;
            let credits: Option<u32> = row.get(2)?;
            let difficulty: Option<u8> = row.get(3)?;
            let min_semester: Option<u32> = row.get(4)?;
            Ok(Course::new(
                &id,
                name.as_deref().unwrap_or(&id),
                credits.unwrap_or(0),
                difficulty,
                min_semester,
            ))
        })?;

        let mut out: Vec<Course> = Vec::new();
        for r in rows {
            let mut course = r?;
            if let Some(slots) = schedules.remove(&course.id) {
                course.schedule = slots;
            }
            out.push(course);
        }
        Ok(out)
    }

    fn prerequisite_edges(&self) -> Result<Vec<PrereqEdge>, PlannerError> {
        let mut stmt = self.conn.prepare("SELECT course_id, prereq_id FROM Prerequisites ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok(PrereqEdge {
                course: row.get(0)?,
                prereq: row.get(1)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl StudentProvider for SqliteStore {
    fn current_semester(&self, student: &str) -> Result<Option<u32>, PlannerError> {
        let sem: Option<Option<u32>> = self
            .conn
            .query_row(
                "SELECT current_semester FROM StudentProfiles WHERE roll_number = ?1",
                params![student],
                |row| row.get(0),
            )
            .optional()?;
        // un perfil sin semestre registrado cuenta como desconocido
        Ok(sem.flatten())
    }

    fn passed_courses(&self, student: &str) -> Result<Vec<String>, PlannerError> {
        let mut stmt = self
            .conn
            .prepare("SELECT course_id FROM PassedCourses WHERE roll_number = ?1")?;
        let rows = stmt.query_map(params![student], |row| row.get::<_, String>(0))?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
