use thiserror::Error;

use crate::domain::deck::DeckError;
use crate::eval::EvalError;

/// Ошибки анализатора (пакет рук, колода, конфиг, ввод/вывод).
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Строка {line}: {source}")]
    InvalidHand {
        line: usize,
        #[source]
        source: EvalError,
    },

    #[error("Карта {card} встречается в наборе больше одного раза")]
    DuplicateCard { card: String },

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    #[error("Ошибка чтения: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка JSON: {0}")]
    Json(#[from] serde_json::Error),
}
