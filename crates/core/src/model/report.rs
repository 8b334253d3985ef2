use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::bank::QuestionBank;
use crate::model::ids::QuestionId;
use crate::model::response::LikertScore;
use crate::model::saboteur::Saboteur;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while reducing responses to a score report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    /// A recorded response references a question id the bank does not
    /// contain. The reduction aborts; silently skipping the entry would
    /// produce an under-counted, misleading report.
    #[error("response references unknown question id {id}")]
    UnknownQuestion { id: QuestionId },
}

//
// ─── SCORE REPORT ─────────────────────────────────────────────────────────────
//

/// Per-saboteur aggregate scores for a completed assessment.
///
/// Scores are raw sums of the 1-5 responses for each saboteur's questions.
/// No averaging or normalization: a saboteur with more questions can score
/// higher, and that is intended. Saboteurs with no answered question are
/// absent from the report, which callers must read as "no data", not 0.
///
/// Immutable once produced. Reducing the same responses always yields the
/// same report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    scores: BTreeMap<Saboteur, u32>,
}

/// One `(saboteur, score)` pair, ordered as extracted.
///
/// This is the input contract for the narrative collaborator and for any
/// ranked presentation of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaboteurScore {
    pub saboteur: Saboteur,
    pub score: u32,
}

impl ScoreReport {
    /// Reduce recorded responses to per-saboteur sums.
    ///
    /// Pure and deterministic: no state beyond the arguments is consulted.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::UnknownQuestion` if a response references an id
    /// missing from the bank. The partial sums are discarded.
    pub fn from_responses(
        bank: &QuestionBank,
        responses: &BTreeMap<QuestionId, LikertScore>,
    ) -> Result<Self, ScoreError> {
        let mut scores: BTreeMap<Saboteur, u32> = BTreeMap::new();
        for (&id, &score) in responses {
            let question = bank
                .find_by_id(id)
                .ok_or(ScoreError::UnknownQuestion { id })?;
            *scores.entry(question.saboteur()).or_insert(0) += u32::from(score.value());
        }
        Ok(Self { scores })
    }

    /// Aggregate score for one saboteur, or `None` if no question of that
    /// saboteur was answered.
    #[must_use]
    pub fn score(&self, saboteur: Saboteur) -> Option<u32> {
        self.scores.get(&saboteur).copied()
    }

    /// Sum of every recorded response score.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.scores.values().sum()
    }

    /// Number of saboteurs with at least one answered question.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate scores in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Saboteur, u32)> + '_ {
        self.scores.iter().map(|(&saboteur, &score)| (saboteur, score))
    }

    /// The `n` highest-scoring saboteurs, descending by score.
    ///
    /// Ties are broken by catalog order so the extraction is deterministic:
    /// of two saboteurs with equal scores, the one whose questions appear
    /// first in the catalog ranks first. Every presentation and narrative
    /// consumer goes through this method rather than re-sorting ad hoc.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<SaboteurScore> {
        let mut ranked: Vec<SaboteurScore> = self
            .iter()
            .map(|(saboteur, score)| SaboteurScore { saboteur, score })
            .collect();
        // Stable sort over catalog-ordered input keeps catalog order on ties.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(n);
        ranked
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::tests::one_question_per_saboteur;

    fn respond(entries: &[(u32, u8)]) -> BTreeMap<QuestionId, LikertScore> {
        entries
            .iter()
            .map(|&(id, raw)| (QuestionId::new(id), LikertScore::from_u8(raw).unwrap()))
            .collect()
    }

    #[test]
    fn reduction_sums_per_saboteur() {
        let bank = one_question_per_saboteur();
        // Question ids 1..=9 map to Saboteur::ALL in order.
        let responses = respond(&[(1, 4), (2, 5)]);
        let report = ScoreReport::from_responses(&bank, &responses).unwrap();

        assert_eq!(report.score(Saboteur::Judge), Some(4));
        assert_eq!(report.score(Saboteur::Stickler), Some(5));
        assert_eq!(report.score(Saboteur::Pleaser), None);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn reduction_is_deterministic_and_idempotent() {
        let bank = one_question_per_saboteur();
        let responses = respond(&[(1, 2), (3, 5), (7, 1), (9, 4)]);

        let first = ScoreReport::from_responses(&bank, &responses).unwrap();
        let second = ScoreReport::from_responses(&bank, &responses).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn total_equals_sum_of_responses() {
        let bank = one_question_per_saboteur();
        let responses = respond(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
        let report = ScoreReport::from_responses(&bank, &responses).unwrap();
        assert_eq!(report.total(), 15);
    }

    #[test]
    fn unknown_question_aborts_reduction() {
        let bank = one_question_per_saboteur();
        let responses = respond(&[(1, 4), (99, 5)]);

        let err = ScoreReport::from_responses(&bank, &responses).unwrap_err();
        assert_eq!(
            err,
            ScoreError::UnknownQuestion {
                id: QuestionId::new(99)
            }
        );
    }

    #[test]
    fn top_n_orders_by_score_descending() {
        let bank = one_question_per_saboteur();
        let responses = respond(&[(1, 2), (2, 5), (3, 4)]);
        let report = ScoreReport::from_responses(&bank, &responses).unwrap();

        let top = report.top_n(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].saboteur, Saboteur::Stickler);
        assert_eq!(top[0].score, 5);
        assert_eq!(top[1].saboteur, Saboteur::Pleaser);
        assert_eq!(top[1].score, 4);
    }

    #[test]
    fn top_n_breaks_ties_by_catalog_order() {
        let bank = one_question_per_saboteur();
        // Judge and Pleaser tie at 5; Judge precedes Pleaser in the catalog.
        let responses = respond(&[(1, 5), (2, 2), (3, 5), (4, 1)]);
        let report = ScoreReport::from_responses(&bank, &responses).unwrap();

        let top = report.top_n(2);
        assert_eq!(top[0].saboteur, Saboteur::Judge);
        assert_eq!(top[1].saboteur, Saboteur::Pleaser);
    }

    #[test]
    fn top_n_larger_than_report_returns_everything() {
        let bank = one_question_per_saboteur();
        let responses = respond(&[(1, 3), (2, 3)]);
        let report = ScoreReport::from_responses(&bank, &responses).unwrap();
        assert_eq!(report.top_n(10).len(), 2);
    }
}
