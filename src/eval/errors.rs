use thiserror::Error;

use crate::domain::card::CardError;

/// Ошибки классификации руки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Рука должна содержать ровно {expected} карт, получено {actual}")]
    InvalidHandSize { expected: usize, actual: usize },

    #[error(transparent)]
    InvalidCard(#[from] CardError),
}
