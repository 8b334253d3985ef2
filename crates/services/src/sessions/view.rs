use serde::Serialize;

use saboteur_core::model::{QuestionId, SaboteurScore, ScoreReport};

use super::progress::SessionProgress;
use super::service::AssessmentSession;

/// Presentation-agnostic snapshot of a session after a state change.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no styling or animation concerns
///
/// The UI decides how to render the question card, the progress bar, and
/// the completion transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// The question to present, absent once the session is complete.
    pub question: Option<QuestionView>,
    pub progress: SessionProgress,
    pub is_complete: bool,
}

/// The current question as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    /// 1-based position in presentation order ("Question 7 of 18").
    pub number: usize,
    pub text: String,
}

impl SessionSnapshot {
    #[must_use]
    pub fn capture(session: &AssessmentSession) -> Self {
        let question = session.current_question().map(|q| QuestionView {
            id: q.id(),
            number: session.current_index() + 1,
            text: q.text().to_string(),
        });

        Self {
            question,
            progress: session.progress(),
            is_complete: session.is_complete(),
        }
    }
}

/// Scores of a finished session, shaped for result presentation.
///
/// `scores` lists every scored saboteur in catalog order; `top` is the
/// ranked extract consumed by both the result highlight and the narrative
/// request, produced by the single [`ScoreReport::top_n`] utility so
/// tie-breaking is identical everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub scores: Vec<SaboteurScore>,
    pub top: Vec<SaboteurScore>,
}

impl ResultView {
    #[must_use]
    pub fn from_report(report: &ScoreReport, top_n: usize) -> Self {
        Self {
            scores: report
                .iter()
                .map(|(saboteur, score)| SaboteurScore { saboteur, score })
                .collect(),
            top: report.top_n(top_n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use saboteur_core::model::LikertScore;
    use saboteur_core::reference_bank;
    use saboteur_core::time::fixed_now;

    #[test]
    fn snapshot_reflects_the_current_question() {
        let bank = Arc::new(reference_bank());
        let mut session = AssessmentSession::new(bank, fixed_now());
        session.answer(LikertScore::Agree, fixed_now()).unwrap();

        let snapshot = SessionSnapshot::capture(&session);
        let question = snapshot.question.unwrap();
        assert_eq!(question.number, 2);
        assert_eq!(question.id, QuestionId::new(2));
        assert!(!snapshot.is_complete);
        assert_eq!(snapshot.progress.answered, 1);
    }

    #[test]
    fn snapshot_of_a_complete_session_has_no_question() {
        let bank = Arc::new(reference_bank());
        let mut session = AssessmentSession::new(Arc::clone(&bank), fixed_now());
        for _ in 0..bank.len() {
            session.answer(LikertScore::Neutral, fixed_now()).unwrap();
        }

        let snapshot = SessionSnapshot::capture(&session);
        assert!(snapshot.question.is_none());
        assert!(snapshot.is_complete);
    }

    #[test]
    fn result_view_serializes_with_labels() {
        let bank = Arc::new(reference_bank());
        let mut session = AssessmentSession::new(Arc::clone(&bank), fixed_now());
        for _ in 0..bank.len() {
            session.answer(LikertScore::StronglyAgree, fixed_now()).unwrap();
        }

        let view = ResultView::from_report(session.report().unwrap(), 3);
        assert_eq!(view.scores.len(), 9);
        assert_eq!(view.top.len(), 3);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["top"][0]["saboteur"], "Judge");
        assert_eq!(json["top"][0]["score"], 10);
    }
}
