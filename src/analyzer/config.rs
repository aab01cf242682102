use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::AnalyzerError;
use crate::eval::HAND_SIZE;

/// Настройки анализатора.
///
/// Все поля необязательны в JSON – отсутствующие берутся из `Default`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Сколько рук раздавать из случайной колоды.
    pub hands_per_deal: usize,
    /// Размер руки. Движок умеет только 5.
    pub cards_per_hand: usize,
    /// Сколько строк (рук) читать из файла тестовой колоды.
    pub max_hands: usize,
    /// Сколько карт печатать в одной строке колоды.
    pub deck_row_width: usize,
    /// Seed для воспроизводимой раздачи. `None` – системный RNG.
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            hands_per_deal: 6,
            cards_per_hand: HAND_SIZE,
            max_hands: 6,
            deck_row_width: 13,
            seed: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AnalyzerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.cards_per_hand != HAND_SIZE {
            return Err(AnalyzerError::InvalidConfig(format!(
                "cards_per_hand = {}, поддерживается только {HAND_SIZE}",
                self.cards_per_hand
            )));
        }
        if self.hands_per_deal == 0 {
            return Err(AnalyzerError::InvalidConfig("hands_per_deal = 0".into()));
        }
        let needed = self.hands_per_deal.checked_mul(self.cards_per_hand);
        if needed.map_or(true, |n| n > 52) {
            return Err(AnalyzerError::InvalidConfig(format!(
                "{} рук по {} карт не помещаются в колоду из 52",
                self.hands_per_deal, self.cards_per_hand
            )));
        }
        if self.max_hands == 0 {
            return Err(AnalyzerError::InvalidConfig("max_hands = 0".into()));
        }
        if self.deck_row_width == 0 {
            return Err(AnalyzerError::InvalidConfig("deck_row_width = 0".into()));
        }
        Ok(())
    }
}
