use thiserror::Error;

use crate::bank::BankError;
use crate::model::report::ScoreError;
use crate::model::response::ResponseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}
