use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when recording a response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("invalid likert score value: {0}")]
    InvalidScore(u8),
}

//
// ─── LIKERT SCORE ─────────────────────────────────────────────────────────────
//

/// Five-level agreement rating for assessment questions.
///
/// Scores map to the classic 1-5 Likert scale:
/// - `StronglyDisagree`: 1
/// - `Disagree`: 2
/// - `Neutral`: 3
/// - `Agree`: 4
/// - `StronglyAgree`: 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikertScore {
    StronglyDisagree,
    Disagree,
    Neutral,
    Agree,
    StronglyAgree,
}

impl LikertScore {
    /// Converts a numeric score (1-5) to a `LikertScore`.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::InvalidScore` if the value is not in the
    /// range 1-5.
    pub fn from_u8(value: u8) -> Result<Self, ResponseError> {
        match value {
            1 => Ok(Self::StronglyDisagree),
            2 => Ok(Self::Disagree),
            3 => Ok(Self::Neutral),
            4 => Ok(Self::Agree),
            5 => Ok(Self::StronglyAgree),
            _ => Err(ResponseError::InvalidScore(value)),
        }
    }

    /// Numeric weight added to the category sum during reduction.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            LikertScore::StronglyDisagree => 1,
            LikertScore::Disagree => 2,
            LikertScore::Neutral => 3,
            LikertScore::Agree => 4,
            LikertScore::StronglyAgree => 5,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
