#![forbid(unsafe_code)]

pub mod error;
pub mod narrative;
pub mod sessions;

pub use saboteur_core::Clock;

pub use error::{NarrativeError, SessionError};
pub use narrative::{FALLBACK_ANALYSIS, NarrativeConfig, NarrativeService};

pub use sessions::{
    AssessmentLoopService, AssessmentSession, Direction, QuestionView, RecordedAnswer, ResultView,
    SessionAnswerResult, SessionProgress, SessionSnapshot,
};
