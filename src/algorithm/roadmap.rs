// roadmap.rs - Orquestador del roadmap por semestres
//
// Por cada semestre:
//   1) filtrar candidatos (prerequisitos aprobados + semestre mínimo)
//   2) si no hay candidatos: avanzar el puntero sin emitir semestre
//   3) puntuar/ordenar y empaquetar con tope de créditos y electivos
//   4) si hay candidatos pero nada cabe: detener y devolver lo armado
//   5) emitir semestre, marcar aprobados y avanzar
//
// Los pesos de dependencia se calculan una sola vez por corrida.

use std::collections::HashSet;

use crate::algorithm::filters::filter_candidates;
use crate::algorithm::packer::{pack_semester, SemesterLoad};
use crate::algorithm::scoring::{rank_candidates, Strategy};
use crate::algorithm::weight::DependencyWeights;
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::models::{Catalog, Course, RoadmapEntry};
use crate::{log_changes, log_debug};

/// Peso a partir del cual un ramo se considera crítico en la explicación.
const CRITICAL_WEIGHT: u32 = 2;

/// Estado del recorrido sobre el puntero de semestre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildState {
    Building,
    Stalled,
    Unplaceable,
    Done,
}

/// Cómo terminó la corrida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Todos los ramos pendientes quedaron ubicados.
    Completed,
    /// Se superó el último semestre con ramos aún pendientes.
    SemesterCeiling,
    /// Había candidatos pero ninguno cupo en el semestre; se detuvo el armado.
    Unplaceable,
}

#[derive(Debug, Clone)]
pub struct Roadmap {
    pub entries: Vec<RoadmapEntry>,
    pub outcome: PlanOutcome,
    /// Ramos que quedaron sin ubicar, en orden de catálogo.
    pub unplaced: Vec<String>,
}

pub struct RoadmapBuilder<'a> {
    catalog: &'a Catalog,
    strategy: Strategy,
    config: &'a PlannerConfig,
}

impl<'a> RoadmapBuilder<'a> {
    pub fn new(catalog: &'a Catalog, strategy: Strategy, config: &'a PlannerConfig) -> Self {
        RoadmapBuilder { catalog, strategy, config }
    }

    /// Arma el roadmap desde `start_semester` con el conjunto `passed` inicial.
    /// `passed` es local a la corrida; nunca se persiste.
    pub fn build(&self, mut passed: HashSet<String>, start_semester: u32) -> Result<Roadmap, PlannerError> {
        let verbosity = self.config.verbosity;
        let weights = DependencyWeights::compute(self.catalog)?;
        log_debug!(verbosity, "   pesos de dependencia calculados para {} códigos", weights.len());

        let mut remaining: Vec<&Course> = self
            .catalog
            .courses
            .iter()
            .filter(|c| !passed.contains(&c.id))
            .collect();
        let mut entries: Vec<RoadmapEntry> = Vec::new();
        let mut semester = start_semester.max(1);
        let mut state = BuildState::Building;

        log_changes!(
            verbosity,
            "🧭 [roadmap] estrategia={} semestre_inicial={} pendientes={}",
            self.strategy,
            semester,
            remaining.len()
        );

        loop {
            if remaining.is_empty() || semester > self.config.max_semester {
                state = BuildState::Done;
                break;
            }

            let candidates = filter_candidates(self.catalog, &remaining, &passed, semester, self.config);
            if candidates.is_empty() {
                if state != BuildState::Stalled {
                    log_changes!(verbosity, "   semestre {}: sin candidatos, se avanza", semester);
                }
                state = BuildState::Stalled;
                semester += 1;
                continue;
            }
            if state == BuildState::Stalled {
                log_changes!(verbosity, "   se retoma en el semestre {}", semester);
            }
            state = BuildState::Building;

            let ranked = rank_candidates(candidates, &weights, self.strategy, semester);
            for (c, score) in ranked.iter() {
                log_debug!(verbosity, "   {} peso={} puntaje={}", c.id, weights.weight(&c.id), score);
            }
            let load = pack_semester(
                ranked.iter().map(|(c, _)| *c),
                self.strategy.credit_cap(),
                self.config.max_electives,
            );

            if load.is_empty() {
                log_changes!(
                    verbosity,
                    "⚠️  semestre {}: {} candidatos pero ninguno cabe; se detiene el roadmap",
                    semester,
                    ranked.len()
                );
                state = BuildState::Unplaceable;
                break;
            }

            let reason = self.explain(semester, &load, &weights);
            log_changes!(
                verbosity,
                "   ✓ semestre {}: {} ramos, {} créditos",
                semester,
                load.courses.len(),
                load.credits
            );

            let selected_ids: HashSet<&str> = load.courses.iter().map(|c| c.id.as_str()).collect();
            for c in load.courses.iter() {
                passed.insert(c.id.clone());
            }
            entries.push(RoadmapEntry {
                semester,
                courses: load.courses.iter().map(|c| (*c).clone()).collect(),
                total_credits: load.credits,
                reason,
            });
            remaining.retain(|c| !selected_ids.contains(c.id.as_str()));
            semester += 1;
        }

        let outcome = if state == BuildState::Unplaceable {
            PlanOutcome::Unplaceable
        } else if remaining.is_empty() {
            PlanOutcome::Completed
        } else {
            PlanOutcome::SemesterCeiling
        };
        let unplaced = remaining.iter().map(|c| c.id.clone()).collect();

        Ok(Roadmap { entries, outcome, unplaced })
    }

    /// Texto explicativo del semestre. No influye en la selección.
    fn explain(&self, semester: u32, load: &SemesterLoad<'_>, weights: &DependencyWeights) -> String {
        let mut explanation: Vec<String> = Vec::new();
        if semester <= 2 {
            explanation.push("Focusing on foundational courses.".to_string());
        }

        let critical = load
            .courses
            .iter()
            .map(|c| (c, weights.weight(&c.id)))
            .filter(|(_, w)| *w >= CRITICAL_WEIGHT)
            .max_by(|(a, wa), (b, wb)| wa.cmp(wb).then_with(|| b.id.cmp(&a.id)));
        if let Some((c, w)) = critical {
            explanation.push(format!(
                "Prioritizing {} because it unlocks a chain of {} later courses.",
                c.id, w
            ));
        }

        match self.strategy {
            Strategy::Balanced if semester >= 7 => {
                explanation.push("Scheduling demanding courses while the remaining load is lighter.".to_string())
            }
            Strategy::Relaxed => explanation.push(format!(
                "Relaxed plan: load capped at {} credits.",
                self.strategy.credit_cap()
            )),
            _ => {}
        }

        explanation.join(" ")
    }
}
