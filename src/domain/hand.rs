use core::fmt;
use std::cmp::Ordering;

use crate::domain::card::Card;
use crate::eval::{classify, EvalError, HandCategory, RankingKey, ScoredCard};

/// Классифицированная 5-карточная рука.
///
/// Классификация и ключ ранжирования вычисляются один раз в [`Hand::new`],
/// после этого рука не меняется. Рука владеет копиями своих карт.
#[derive(Clone, Debug)]
pub struct Hand {
    /// Карты в порядке раздачи (для вывода).
    dealt: Vec<Card>,
    category: HandCategory,
    /// Каноническая рука: ключевые карты ++ кикеры.
    cards: Vec<ScoredCard>,
    key_cards: Vec<ScoredCard>,
    kickers: Vec<ScoredCard>,
    ranking_key: RankingKey,
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, EvalError> {
        let classification = classify(cards)?;
        let ranking_key = RankingKey::new(
            classification.category,
            &classification.key_cards,
            &classification.kickers,
        );

        Ok(Self {
            dealt: cards.to_vec(),
            category: classification.category,
            cards: classification.cards,
            key_cards: classification.key_cards,
            kickers: classification.kickers,
            ranking_key,
        })
    }

    /// Собрать руку из токенов вида "10D", "AS".
    pub fn parse(tokens: &[&str]) -> Result<Self, EvalError> {
        let cards = tokens
            .iter()
            .map(|t| t.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Название категории ("Royal Flush", "One Pair", ...).
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn dealt_cards(&self) -> &[Card] {
        &self.dealt
    }

    pub fn cards(&self) -> &[ScoredCard] {
        &self.cards
    }

    pub fn key_cards(&self) -> &[ScoredCard] {
        &self.key_cards
    }

    pub fn kickers(&self) -> &[ScoredCard] {
        &self.kickers
    }

    pub fn ranking_key(&self) -> &RankingKey {
        &self.ranking_key
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.ranking_key == other.ranking_key
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranking_key.cmp(&other.ranking_key)
    }
}

impl fmt::Display for Hand {
    /// Карты в порядке раздачи, каждая в колонке шириной 3.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<String> = self.dealt.iter().map(|c| format!("{c:>3}")).collect();
        write!(f, "{}", columns.join(" "))
    }
}
