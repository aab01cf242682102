//! Оценка силы 5-карточных покерных рук.
//!
//! Основные функции:
//!   `classify(cards) -> Classification` – категория, ключевые карты, кикеры;
//!   `compare_hands(a, b) -> Ordering` – чистое сравнение по `RankingKey`.

pub mod category;
pub mod classifier;
pub mod errors;
pub mod lookup_tables;
pub mod ranking;

pub use category::{HandCategory, SuitScoring, SCORING_POLICY};
pub use classifier::{classify, Classification, HAND_SIZE};
pub use errors::EvalError;
pub use ranking::{compare_hands, score_card, sort_strongest_first, RankingKey, ScoredCard, SUIT_SCALE};
