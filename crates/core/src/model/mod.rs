mod ids;
mod question;
pub mod report;
pub mod response;
mod saboteur;

pub use ids::{ParseIdError, QuestionId};
pub use question::Question;
pub use report::{SaboteurScore, ScoreError, ScoreReport};
pub use response::{LikertScore, ResponseError};
pub use saboteur::{Saboteur, SaboteurProfile};
