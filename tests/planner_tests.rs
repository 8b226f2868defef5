mod common;

use coursepath::algorithm::{generate_roadmap, plan_for_student, PlanOutcome, RoadmapRequest, Strategy};
use coursepath::config::{parse_course_list, PlannerConfig};
use coursepath::logging::VERBOSITY_SILENT;
use coursepath::models::{Course, PrereqEdge};
use coursepath::providers::{InMemoryCatalog, InMemoryStudents};

fn quiet() -> PlannerConfig {
    PlannerConfig { verbosity: VERBOSITY_SILENT, ..PlannerConfig::default() }
}

fn university() -> InMemoryCatalog {
    InMemoryCatalog::new(common::university_courses(), common::university_edges())
}

fn request(student: &str, strategy: Strategy, current: &[&str]) -> RoadmapRequest {
    RoadmapRequest {
        student: student.to_string(),
        strategy,
        current_schedule: current.iter().map(|s| s.to_string()).collect(),
    }
}

fn all_ids(entries: &[coursepath::models::RoadmapEntry]) -> Vec<String> {
    entries.iter().flat_map(|e| e.courses.iter().map(|c| c.id.clone())).collect()
}

#[test]
fn test_plan_starts_after_current_semester() {
    let catalog = university();
    let students = InMemoryStudents::default().with_student("BSCS51F24R010", 2, &["CMPC-5201", "URCA-5123"]);
    let rm = plan_for_student(&catalog, &students, &request("BSCS51F24R010", Strategy::Balanced, &[]), &quiet())
        .expect("plan debe armarse");
    assert_eq!(rm.entries[0].semester, 3);
    let ids = all_ids(&rm.entries);
    assert!(!ids.contains(&"CMPC-5201".to_string()));
    assert!(!ids.contains(&"URCA-5123".to_string()));
}

#[test]
fn test_unknown_student_starts_at_first_semester() {
    let catalog = university();
    let students = InMemoryStudents::default();
    let entries = generate_roadmap(&catalog, &students, &request("nadie", Strategy::Aggressive, &[]), &quiet());
    assert!(!entries.is_empty());
    assert_eq!(entries[0].semester, 1);
    assert!(entries[0].reason.starts_with("Focusing on foundational courses."));
}

#[test]
fn test_current_schedule_counts_as_passed() {
    let catalog = university();
    let students = InMemoryStudents::default().with_student("u1", 1, &["CMPC-5201"]);
    let rm = plan_for_student(&catalog, &students, &request("u1", Strategy::Balanced, &["CMPC-5202"]), &quiet())
        .expect("plan debe armarse");
    let ids = all_ids(&rm.entries);
    assert!(!ids.contains(&"CMPC-5202".to_string()));
    // Data Structures depende de CMPC-5202, que ya se da por aprobado
    let ds = rm
        .entries
        .iter()
        .find(|e| e.courses.iter().any(|c| c.id == "CMPC-5205"))
        .expect("CMPC-5205 debe ubicarse");
    assert_eq!(ds.semester, 3);
}

#[test]
fn test_passed_set_is_not_persisted() {
    let catalog = university();
    let students = InMemoryStudents::default().with_student("u1", 0, &[]);
    let req = request("u1", Strategy::Balanced, &[]);
    let first = generate_roadmap(&catalog, &students, &req, &quiet());
    let second = generate_roadmap(&catalog, &students, &req, &quiet());
    assert_eq!(first, second);
    assert_eq!(students.students["u1"].passed.len(), 0);
}

#[test]
fn test_cycle_yields_empty_roadmap() {
    let catalog = InMemoryCatalog::new(
        vec![
            Course::new("A", "A", 3, None, None),
            Course::new("B", "B", 3, None, None),
            Course::new("C", "C", 3, None, None),
        ],
        vec![PrereqEdge::new("A", "B"), PrereqEdge::new("B", "C"), PrereqEdge::new("C", "A")],
    );
    let students = InMemoryStudents::default();
    let entries = generate_roadmap(&catalog, &students, &request("u1", Strategy::Balanced, &[]), &quiet());
    assert!(entries.is_empty());
}

#[test]
fn test_excluded_courses_never_scheduled() {
    let catalog = university();
    let students = InMemoryStudents::default();
    let mut cfg = quiet();
    cfg.excluded_courses = parse_course_list("cmpc-6702, URCQ-5101");

    let rm = plan_for_student(&catalog, &students, &request("u1", Strategy::Balanced, &[]), &cfg)
        .expect("plan debe armarse");
    let ids = all_ids(&rm.entries);
    assert!(!ids.contains(&"CMPC-6702".to_string()));
    assert!(!ids.contains(&"URCQ-5101".to_string()));
    // el proyecto II depende del I, que quedó excluido
    assert!(!ids.contains(&"CMPC-6703".to_string()));
    assert!(rm.unplaced.contains(&"CMPC-6703".to_string()));
    assert_ne!(rm.outcome, PlanOutcome::Completed);
}

#[test]
fn test_missing_catalog_prerequisite_blocks_course() {
    let catalog = InMemoryCatalog::new(
        vec![Course::new("A", "A", 3, None, None), Course::new("B", "B", 3, None, None)],
        vec![PrereqEdge::new("B", "GHOST")],
    );
    let students = InMemoryStudents::default();
    let rm = plan_for_student(&catalog, &students, &request("u1", Strategy::Balanced, &[]), &quiet())
        .expect("plan debe armarse");
    assert_eq!(all_ids(&rm.entries), vec!["A".to_string()]);
    assert_eq!(rm.unplaced, vec!["B".to_string()]);
    assert_eq!(rm.outcome, PlanOutcome::SemesterCeiling);
}

#[test]
fn test_default_config_skips_final_year_projects() {
    let catalog = university();
    let students = InMemoryStudents::default();
    let rm = plan_for_student(&catalog, &students, &request("u1", Strategy::Aggressive, &[]), &quiet())
        .expect("plan debe armarse");
    let ids = all_ids(&rm.entries);
    assert!(!ids.contains(&"CMPC-6702".to_string()));
    assert!(!ids.contains(&"CMPC-6703".to_string()));
    assert!(rm.unplaced.contains(&"CMPC-6702".to_string()));
}
