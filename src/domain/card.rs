use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки модели карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Неизвестная карта {token:?}: {reason}")]
    InvalidCard { token: String, reason: &'static str },
}

impl CardError {
    fn invalid(token: &str, reason: &'static str) -> Self {
        CardError::InvalidCard {
            token: token.to_string(),
            reason,
        }
    }
}

/// Масть карты.
///
/// Порядок вариантов совпадает с порядком весов в [`SUIT_WEIGHTS`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Diamonds, // ♦
    Clubs,    // ♣
    Hearts,   // ♥
    Spades,   // ♠
}

/// Вес масти – только для детерминированного разрешения ничьих.
///
/// В настоящем покере масти не ранжируются, порядок здесь произвольный,
/// но фиксированный: Diamonds < Clubs < Hearts < Spades.
pub const SUIT_WEIGHTS: [(Suit, u8); 4] = [
    (Suit::Diamonds, 1),
    (Suit::Clubs, 2),
    (Suit::Hearts, 3),
    (Suit::Spades, 4),
];

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Вес масти из таблицы [`SUIT_WEIGHTS`].
    pub fn weight(self) -> u8 {
        SUIT_WEIGHTS[self as usize].1
    }

    /// Однобуквенный код масти: `D`, `C`, `H`, `S`.
    pub fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        match symbol {
            "D" | "d" => Ok(Suit::Diamonds),
            "C" | "c" => Ok(Suit::Clubs),
            "H" | "h" => Ok(Suit::Hearts),
            "S" | "s" => Ok(Suit::Spades),
            _ => Err(CardError::invalid(symbol, "неизвестная масть")),
        }
    }
}

/// Ранг карты. Дискриминант = вес ранга (2..14, туз старший).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Вес ранга: 2 → 2, ..., A → 14.
    pub fn weight(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        let rank = match symbol {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(CardError::invalid(symbol, "неизвестный ранг")),
        };
        Ok(rank)
    }

    /// Обратное к [`Rank::weight`].
    pub fn from_weight(weight: u8) -> Option<Self> {
        Rank::ALL.iter().copied().find(|r| r.weight() == weight)
    }
}

/// Вес ранга по символу (`"10"`, `"J"`, ...). Неизвестный символ – ошибка, а не 0.
pub fn rank_weight_of(symbol: &str) -> Result<u8, CardError> {
    Rank::from_symbol(symbol).map(Rank::weight)
}

/// Вес масти по символу (`"D"`, `"C"`, `"H"`, `"S"`).
pub fn suit_weight_of(symbol: &str) -> Result<u8, CardError> {
    Suit::from_symbol(symbol).map(Suit::weight)
}

/// Обычная карта 52-карточной колоды. Неизменяемая пара (ранг, масть).
///
/// Очки карты зависят от контекста руки и живут отдельно,
/// см. `eval::ranking::ScoredCard`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank_weight(&self) -> u8 {
        self.rank.weight()
    }

    pub fn suit_weight(&self) -> u8 {
        self.suit.weight()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    /// Формат вида `AS`, `10D`, `7C`. `{:>3}` выравнивает как колонку.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}{}", self.rank, self.suit))
    }
}

/// Парсинг строки вида "AS", "10D", "7c".
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(2..=3).contains(&s.len()) || !s.is_ascii() {
            return Err(CardError::invalid(s, "карта должна состоять из 2–3 символов"));
        }
        // Масть – всегда последний символ, всё до неё – ранг.
        let (rank_part, suit_part) = s.split_at(s.len() - 1);

        let suit = Suit::from_symbol(suit_part).map_err(|_| CardError::invalid(s, "неизвестная масть"))?;
        let rank = Rank::from_symbol(rank_part).map_err(|_| CardError::invalid(s, "неизвестный ранг"))?;

        Ok(Card { rank, suit })
    }
}
