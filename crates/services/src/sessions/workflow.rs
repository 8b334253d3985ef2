use std::sync::Arc;

use saboteur_core::model::{LikertScore, QuestionId, ScoreReport};
use saboteur_core::{Clock, QuestionBank, reference_bank};

use super::service::AssessmentSession;
use crate::error::SessionError;

/// Result of answering a single question in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswerResult {
    pub question_id: QuestionId,
    pub is_complete: bool,
    /// The reduced report, present exactly when `is_complete` is true.
    pub report: Option<ScoreReport>,
}

/// Orchestrates session start and answering.
///
/// Owns the time source and the shared question bank so callers never
/// handle timestamps themselves.
#[derive(Clone)]
pub struct AssessmentLoopService {
    clock: Clock,
    bank: Arc<QuestionBank>,
}

impl AssessmentLoopService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>) -> Self {
        Self { clock, bank }
    }

    /// Convenience constructor using the reference catalog.
    #[must_use]
    pub fn with_reference_catalog(clock: Clock) -> Self {
        Self::new(clock, Arc::new(reference_bank()))
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    /// Start a new session over the service's bank.
    #[must_use]
    pub fn start_session(&self) -> AssessmentSession {
        AssessmentSession::new(Arc::clone(&self.bank), self.clock.now())
    }

    /// Answer the current question, stamping the time from the clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already
    /// finished, or `SessionError::Score` on a reduction integrity
    /// failure.
    pub fn answer_current(
        &self,
        session: &mut AssessmentSession,
        score: LikertScore,
    ) -> Result<SessionAnswerResult, SessionError> {
        let recorded = session.answer(score, self.clock.now())?;

        Ok(SessionAnswerResult {
            question_id: recorded.question_id,
            is_complete: session.is_complete(),
            report: session.report().cloned(),
        })
    }

    /// Step the session back one question. No-op at the first question.
    pub fn go_back(&self, session: &mut AssessmentSession) {
        session.go_back();
    }
}
