mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{AssessmentSession, Direction, RecordedAnswer};
pub use view::{QuestionView, ResultView, SessionSnapshot};
pub use workflow::{AssessmentLoopService, SessionAnswerResult};
