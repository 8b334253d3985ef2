use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Question, QuestionId, Saboteur};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while constructing a question bank.
///
/// All of these are load-time failures: a bank that fails validation must
/// never reach a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank contains no questions")]
    Empty,

    #[error("question ids must be positive")]
    ZeroId,

    #[error("duplicate question id {id}")]
    DuplicateId { id: QuestionId },

    #[error("no question covers saboteur {saboteur}")]
    UncoveredSaboteur { saboteur: Saboteur },
}

//
// ─── QUESTION BANK ────────────────────────────────────────────────────────────
//

/// Fixed, ordered catalog of assessment questions.
///
/// Entirely immutable after construction. Question order is presentation
/// order; ids are the keys responses are recorded under.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    index_by_id: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    /// Build a bank from an ordered question list, validating its
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` if `questions` is empty,
    /// `BankError::ZeroId` for a non-positive id, `BankError::DuplicateId`
    /// for a repeated id, and `BankError::UncoveredSaboteur` if any
    /// saboteur has no question.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut index_by_id = HashMap::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            if question.id().value() == 0 {
                return Err(BankError::ZeroId);
            }
            if index_by_id.insert(question.id(), index).is_some() {
                return Err(BankError::DuplicateId { id: question.id() });
            }
        }

        for saboteur in Saboteur::ALL {
            if !questions.iter().any(|q| q.saboteur() == saboteur) {
                return Err(BankError::UncoveredSaboteur { saboteur });
            }
        }

        Ok(Self {
            questions,
            index_by_id,
        })
    }

    /// The question at `index` in presentation order.
    #[must_use]
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look a question up by id.
    #[must_use]
    pub fn find_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.index_by_id
            .get(&id)
            .map(|&index| &self.questions[index])
    }

    /// Total question count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions in presentation order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
