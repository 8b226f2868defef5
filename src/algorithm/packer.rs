// Selección greedy de la carga de un semestre.
//
// Una sola pasada sobre los candidatos ya ordenados: se salta el ramo si
// excede el tope de créditos o si ya hay `max_electives` electivos. No busca
// la combinación óptima; puede dejar créditos sin usar.
use crate::models::Course;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemesterLoad<'a> {
    pub courses: Vec<&'a Course>,
    pub credits: u32,
    pub electives: usize,
}

impl<'a> SemesterLoad<'a> {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

pub fn pack_semester<'a, I>(sorted: I, credit_cap: u32, max_electives: usize) -> SemesterLoad<'a>
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut load = SemesterLoad::default();
    for c in sorted {
        if load.credits + c.credits > credit_cap {
            continue;
        }
        if c.is_elective() {
            if load.electives >= max_electives {
                continue;
            }
            load.electives += 1;
        }
        load.credits += c.credits;
        load.courses.push(c);
    }
    load
}
