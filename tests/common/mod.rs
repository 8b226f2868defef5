// Catálogo de ejemplo (plan BSCS) usado por varias pruebas de integración.
#![allow(dead_code)]

use coursepath::models::{Catalog, Course, PrereqEdge};

pub fn university_courses() -> Vec<Course> {
    let rows: [(&str, &str, u32, u8, u32); 45] = [
        ("CMPC-5201", "Programming Fundamentals", 4, 3, 1), ("URCA-5123", "ICT", 3, 1, 1),
        ("URCQ-5101", "Discrete Structures", 3, 4, 1), ("URCQ-5102", "Calculus & Analytical Geometry", 3, 5, 1),
        ("URCE-5118", "Functional English", 3, 2, 1), ("BUSB-6101", "Intro to Marketing", 3, 2, 1),
        ("CMPC-5202", "Object Oriented Programming", 4, 4, 2), ("CMPC-5203", "Database Systems", 4, 3, 2),
        ("CMPC-5204", "Digital Logic Design", 3, 4, 2), ("MATH-5101", "Multivariable Calculus", 3, 5, 2),
        ("MATH-5102", "Linear Algebra", 3, 4, 2), ("URCQ-5111-I", "Translation of Holy Quran I", 1, 1, 2),
        ("CMPC-5205", "Data Structures", 4, 5, 3), ("CMPC-5209", "Comp Organization & Assembly", 3, 5, 3),
        ("CMPC-5207", "Artificial Intelligence", 3, 4, 3), ("CMPC-5208", "Computer Networks", 3, 3, 3),
        ("CMPC-5101", "Software Engineering", 3, 2, 3), ("MATH-5103", "Probability & Statistics", 3, 4, 3),
        ("CMPC-5206", "Information Security", 3, 3, 4), ("CSDC-5101", "Theory of Automata", 3, 5, 4),
        ("CSDC-5102", "Adv. Database Mgmt Systems", 3, 4, 4), ("URCI-5105", "Islamic Studies", 2, 1, 4),
        ("URCW-5201", "Applied Physics", 3, 3, 4), ("URCQ-5111-II", "Translation of Holy Quran II", 1, 1, 4),
        ("CMPC-6201", "Operating Systems", 3, 5, 5), ("CSDC-6201", "HCI & Computer Graphics", 3, 3, 5),
        ("CSDC-6202", "Computer Architecture", 3, 4, 5), ("URCA-5101", "Intro to Management", 2, 2, 5),
        ("CSDC-6203", "Compiler Construction", 3, 5, 6), ("ITDC-6204", "Parallel & Dist. Computing", 3, 5, 6),
        ("URCQ-5111-III", "Translation of Holy Quran III", 1, 1, 6),
        ("CMPC-6702", "Final Year Project - I", 2, 5, 7), ("CMPC-6101", "Analysis of Algorithms", 3, 5, 7),
        ("ENGL-6101", "Technical & Business Writing", 3, 2, 7), ("URCE-5124", "Entrepreneurship", 2, 2, 7),
        ("CMPC-6703", "Final Year Project - II", 4, 5, 8), ("URCI-5122", "Ideology of Pakistan", 2, 1, 8),
        ("URCS-6101", "Professional Practices", 2, 1, 8), ("URCC-5125", "Civics & Community Engagement", 2, 1, 8),
        ("URCQ-5111-IV", "Translation of Holy Quran IV", 1, 1, 8),
        ("ITDC-5201", "Web Technologies", 3, 3, 5), ("CSDE-6202", "Mobile App Development", 3, 4, 5),
        ("CSDE-6505", "Large Language Models", 3, 5, 6), ("CSDE-6501", "MERN Stack Development", 3, 4, 5),
        ("DSDE-5102", "Database Admin & Mgmt", 3, 3, 6),
    ];

    let mut courses: Vec<Course> = rows
        .iter()
        .map(|(id, name, credits, diff, min_sem)| Course::new(id, name, *credits, Some(*diff), Some(*min_sem)))
        .collect();

    let slots: [(&str, &str, i32, i32); 6] = [
        ("CMPC-5201", "Mon", 900, 1030), ("URCA-5123", "Mon", 1100, 1230),
        ("CMPC-5205", "Mon", 900, 1030), ("CMPC-6201", "Tue", 900, 1030),
        ("CMPC-6702", "Fri", 900, 1200), ("ITDC-5201", "Fri", 1400, 1530),
    ];
    for (id, day, start, end) in slots.iter() {
        if let Some(c) = courses.iter_mut().find(|c| c.id == *id) {
            c.schedule.push(coursepath::models::TimeSlot::new(day, *start, *end));
        }
    }
    courses
}

pub fn university_edges() -> Vec<PrereqEdge> {
    [
        ("CMPC-5202", "CMPC-5201"), ("CMPC-5205", "CMPC-5202"), ("CMPC-6201", "CMPC-5205"),
        ("CSDC-6203", "CSDC-5101"), ("CMPC-6703", "CMPC-6702"), ("CMPC-6101", "CMPC-5205"),
        ("ITDC-5202", "CMPC-5206"), ("CSDE-6501", "ITDC-5201"), ("CSDE-6502", "ITDC-5201"),
        ("DSDE-5102", "CMPC-5203"),
    ]
    .iter()
    .map(|(c, p)| PrereqEdge::new(c, p))
    .collect()
}

pub fn university_catalog() -> Catalog {
    Catalog::new(university_courses(), university_edges())
}
