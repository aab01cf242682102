use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Hand;

/// DTO одной руки в итоговом порядке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedHandDto {
    /// Место в итоговом порядке, 1 = сильнейшая рука.
    pub position: usize,
    /// Карты в порядке раздачи.
    pub cards: Vec<String>,
    /// Каноническая рука: ключевые карты, затем кикеры.
    pub canonical: Vec<String>,
    pub category: String,
    pub category_value: u32,
}

impl RankedHandDto {
    pub fn from_hand(position: usize, hand: &Hand) -> Self {
        Self {
            position,
            cards: cards_to_strings(hand.dealt_cards()),
            canonical: hand.cards().iter().map(|c| c.card.to_string()).collect(),
            category: hand.label().to_string(),
            category_value: hand.category().base_value(),
        }
    }
}

/// DTO всего анализа (для `--json`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisReportDto {
    /// "random" или путь к тестовой колоде.
    pub source: String,
    pub seed: Option<u64>,
    /// Руки от сильнейшей к слабейшей.
    pub hands: Vec<RankedHandDto>,
    /// Остаток колоды (пусто для тестовой колоды).
    pub remaining_deck: Vec<String>,
}

impl AnalysisReportDto {
    pub fn new(source: impl Into<String>, seed: Option<u64>, ranked: &[Hand], remaining: &[Card]) -> Self {
        Self {
            source: source.into(),
            seed,
            hands: ranked
                .iter()
                .enumerate()
                .map(|(i, h)| RankedHandDto::from_hand(i + 1, h))
                .collect(),
            remaining_deck: cards_to_strings(remaining),
        }
    }
}

fn cards_to_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}
