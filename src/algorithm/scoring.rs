// Puntaje de candidatos según estrategia.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithm::weight::DependencyWeights;
use crate::models::Course;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Aggressive,
    #[default]
    Balanced,
    Relaxed,
}

impl Strategy {
    /// Cualquier valor desconocido o ausente se trata como `Balanced`.
    pub fn parse_or_default(raw: Option<&str>) -> Strategy {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("aggressive") => Strategy::Aggressive,
            Some("relaxed") => Strategy::Relaxed,
            _ => Strategy::Balanced,
        }
    }

    /// Tope de créditos por semestre.
    pub fn credit_cap(self) -> u32 {
        match self {
            Strategy::Relaxed => 14,
            Strategy::Aggressive | Strategy::Balanced => 18,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::Aggressive => "aggressive",
            Strategy::Balanced => "balanced",
            Strategy::Relaxed => "relaxed",
        };
        write!(f, "{}", s)
    }
}

pub fn score_course(course: &Course, weight: u32, strategy: Strategy, semester: u32) -> i64 {
    let diff = course.difficulty as i64;
    let mut score = weight as i64 * 15;
    match strategy {
        Strategy::Aggressive => score += diff * 5,
        Strategy::Relaxed => score -= diff * 20,
        Strategy::Balanced => {
            if semester <= 2 {
                score -= diff * 10;
            } else if semester >= 7 {
                score += diff * 5;
            }
        }
    }
    score
}

/// Ordena candidatos por puntaje descendente; empates por código ascendente.
pub fn rank_candidates<'a>(
    candidates: Vec<&'a Course>,
    weights: &DependencyWeights,
    strategy: Strategy,
    semester: u32,
) -> Vec<(&'a Course, i64)> {
    let mut scored: Vec<(&Course, i64)> = candidates
        .into_iter()
        .map(|c| (c, score_course(c, weights.weight(&c.id), strategy, semester)))
        .collect();
    scored.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| a.id.cmp(&b.id)));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_fallback() {
        assert_eq!(Strategy::parse_or_default(Some("aggressive")), Strategy::Aggressive);
        assert_eq!(Strategy::parse_or_default(Some(" Relaxed ")), Strategy::Relaxed);
        assert_eq!(Strategy::parse_or_default(Some("turbo")), Strategy::Balanced);
        assert_eq!(Strategy::parse_or_default(None), Strategy::Balanced);
    }

    #[test]
    fn test_credit_caps() {
        assert_eq!(Strategy::Aggressive.credit_cap(), 18);
        assert_eq!(Strategy::Balanced.credit_cap(), 18);
        assert_eq!(Strategy::Relaxed.credit_cap(), 14);
    }

    #[test]
    fn test_score_formula() {
        let c = Course::new("CMPC-5205", "Data Structures", 4, Some(5), Some(3));
        assert_eq!(score_course(&c, 2, Strategy::Aggressive, 3), 30 + 25);
        assert_eq!(score_course(&c, 2, Strategy::Relaxed, 3), 30 - 100);
        assert_eq!(score_course(&c, 2, Strategy::Balanced, 1), 30 - 50);
        assert_eq!(score_course(&c, 2, Strategy::Balanced, 4), 30);
        assert_eq!(score_course(&c, 2, Strategy::Balanced, 7), 30 + 25);
    }

    #[test]
    fn test_rank_ties_by_code() {
        let b = Course::new("B", "B", 3, Some(3), None);
        let a = Course::new("A", "A", 3, Some(3), None);
        let ranked = rank_candidates(vec![&b, &a], &DependencyWeights::default(), Strategy::Balanced, 4);
        let ids: Vec<&str> = ranked.iter().map(|(c, _)| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }
}
