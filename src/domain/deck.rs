use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::Hand;
use crate::eval::EvalError;
use crate::infra::RandomSource;

/// Ошибки работы с колодой.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("В колоде осталось {available} карт, а нужно {requested}")]
    NotEnoughCards { requested: usize, available: usize },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Колода карт. В домене — просто упорядоченный список карт, верх колоды – начало списка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Diamonds 2..A, Clubs 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять n карт сверху. Если карт не хватает – колода не меняется.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Раздать `count` рук по `size` карт, сверху колоды, рука за рукой.
    pub fn deal_hands(&mut self, count: usize, size: usize) -> Result<Vec<Hand>, DeckError> {
        // Переполнение произведения – заведомо больше любой колоды.
        let needed = count.checked_mul(size).unwrap_or(usize::MAX);
        if needed > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: needed,
                available: self.cards.len(),
            });
        }

        let mut hands = Vec::with_capacity(count.min(self.cards.len()));
        for _ in 0..count {
            let cards = self.draw_n(size)?;
            hands.push(Hand::new(&cards)?);
        }

        info!(hands = count, remaining = self.cards.len(), "hands dealt");
        Ok(hands)
    }
}
