use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use saboteur_core::QuestionBank;
use saboteur_core::model::{LikertScore, Question, QuestionId, ScoreReport};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── DIRECTION ────────────────────────────────────────────────────────────────
//

/// Transient navigation hint for the presentation layer.
///
/// Has no bearing on scoring; it only tells the UI which way the last
/// transition moved so it can animate accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

//
// ─── RECORDED ANSWER ──────────────────────────────────────────────────────────
//

/// Captures a single answer recorded within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedAnswer {
    pub question_id: QuestionId,
    pub score: LikertScore,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// In-memory assessment session over a question bank.
///
/// Steps through the bank question by question, recording one response per
/// question id. Backward navigation is one step at a time; re-answering a
/// revisited question overwrites its single entry and leaves every other
/// recorded response intact. Answering the last question completes the
/// session and reduces the responses to a [`ScoreReport`] synchronously.
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    current: usize,
    responses: BTreeMap<QuestionId, LikertScore>,
    direction: Direction,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    report: Option<ScoreReport>,
}

impl AssessmentSession {
    /// Create a fresh session positioned at the first question.
    ///
    /// A bank is never empty (construction enforces it), so there is always
    /// a current question to present.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, started_at: DateTime<Utc>) -> Self {
        Self {
            bank,
            current: 0,
            responses: BTreeMap::new(),
            direction: Direction::Forward,
            started_at,
            completed_at: None,
            report: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cursor position into the bank's presentation order.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Responses recorded so far, keyed by question id.
    #[must_use]
    pub fn responses(&self) -> &BTreeMap<QuestionId, LikertScore> {
        &self.responses
    }

    /// The reduced score report, present once the session is complete.
    #[must_use]
    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// Number of questions with a recorded response.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// Number of questions without a recorded response.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bank.len().saturating_sub(self.responses.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            fraction: self.current as f64 / self.bank.len() as f64,
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            None
        } else {
            self.bank.question_at(self.current)
        }
    }

    /// Record a response for the current question and advance.
    ///
    /// Re-answering a revisited question overwrites its previous entry.
    /// On the last question the session completes and the responses are
    /// reduced to a score report; no further mutation is possible after
    /// that.
    ///
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already
    /// finished. Propagates a reduction integrity failure as
    /// `SessionError::Score`.
    pub fn answer(
        &mut self,
        score: LikertScore,
        answered_at: DateTime<Utc>,
    ) -> Result<RecordedAnswer, SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::Completed);
        };
        let question_id = question.id();

        self.responses.insert(question_id, score);

        if self.current + 1 >= self.bank.len() {
            let report = ScoreReport::from_responses(&self.bank, &self.responses)?;
            self.report = Some(report);
            self.completed_at = Some(answered_at);
        } else {
            self.current += 1;
            self.direction = Direction::Forward;
        }

        Ok(RecordedAnswer { question_id, score })
    }

    /// Step back one question.
    ///
    /// A no-op at the first question and on a completed session. The
    /// response recorded for the question stepped back to is preserved for
    /// re-display; only a subsequent [`answer`](Self::answer) overwrites
    /// it.
    pub fn go_back(&mut self) {
        if self.is_complete() || self.current == 0 {
            return;
        }
        self.current -= 1;
        self.direction = Direction::Backward;
    }
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("bank_len", &self.bank.len())
            .field("current", &self.current)
            .field("responses_len", &self.responses.len())
            .field("direction", &self.direction)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
