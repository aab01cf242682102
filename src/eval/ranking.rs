use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Hand;

use super::category::{HandCategory, SuitScoring};

/// Множитель, отделяющий (база + ранг) от веса масти в очках карты.
///
/// Масть (1..=4) всегда меньше шага ранга, поэтому никогда не перевешивает ранг.
pub const SUIT_SCALE: u32 = 10;

/// Карта вместе с её очками в контексте конкретной руки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ScoredCard {
    pub card: Card,
    pub score: u32,
}

/// Очки карты: `(база категории + вес ранга) * SUIT_SCALE + вес масти`.
///
/// Для OnePair/TwoPair вес масти не учитывается (см. `SCORING_POLICY`).
pub fn score_card(card: Card, category: HandCategory) -> u32 {
    let suit_part = match category.suit_scoring() {
        SuitScoring::WithSuit => u32::from(card.suit_weight()),
        SuitScoring::RankOnly => 0,
    };
    (category.base_value() + u32::from(card.rank_weight())) * SUIT_SCALE + suit_part
}

/// Ключ ранжирования руки. Считается один раз при создании `Hand`.
///
/// Поля сравниваются лексикографически в порядке объявления:
///   1. база категории;
///   2. очки ключевых карт (по убыванию);
///   3. очки кикеров (по убыванию, стрит A2345 уже повёрнут);
///   4. веса мастей карт в каноническом порядке – последний тай-брейк
///      для любой категории (для пар это единственное место, где масть влияет).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankingKey {
    pub category_value: u32,
    pub key_scores: Vec<u32>,
    pub kicker_scores: Vec<u32>,
    pub suit_tiebreak: Vec<u8>,
}

impl RankingKey {
    pub fn new(category: HandCategory, key_cards: &[ScoredCard], kickers: &[ScoredCard]) -> Self {
        Self {
            category_value: category.base_value(),
            key_scores: key_cards.iter().map(|c| c.score).collect(),
            kicker_scores: kickers.iter().map(|c| c.score).collect(),
            suit_tiebreak: key_cards
                .iter()
                .chain(kickers.iter())
                .map(|c| c.card.suit_weight())
                .collect(),
        }
    }
}

/// Сравнить две руки. Чистая функция: ничего не пересчитывает и не мутирует.
///
/// `Greater` – первая рука сильнее.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.ranking_key().cmp(b.ranking_key())
}

/// Отсортировать руки от сильнейшей к слабейшей.
pub fn sort_strongest_first(hands: &mut [Hand]) {
    hands.sort_by(|a, b| compare_hands(b, a));
}
