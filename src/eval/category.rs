use core::fmt;

use serde::{Deserialize, Serialize};

/// Категория покерной руки по силе (от слабой к сильной).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

/// Входит ли вес масти в очки карты для данной категории.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuitScoring {
    /// Очки = база + ранг + масть.
    WithSuit,
    /// Очки = база + ранг (пары сравниваются только по рангу).
    RankOnly,
}

/// Политика подсчёта очков по категориям.
///
/// Пары (OnePair, TwoPair) считаются без масти, все остальные – с мастью.
/// Новая категория обязана попасть в эту таблицу.
pub const SCORING_POLICY: [(HandCategory, SuitScoring); 10] = [
    (HandCategory::HighCard, SuitScoring::WithSuit),
    (HandCategory::OnePair, SuitScoring::RankOnly),
    (HandCategory::TwoPair, SuitScoring::RankOnly),
    (HandCategory::ThreeOfAKind, SuitScoring::WithSuit),
    (HandCategory::Straight, SuitScoring::WithSuit),
    (HandCategory::Flush, SuitScoring::WithSuit),
    (HandCategory::FullHouse, SuitScoring::WithSuit),
    (HandCategory::FourOfAKind, SuitScoring::WithSuit),
    (HandCategory::StraightFlush, SuitScoring::WithSuit),
    (HandCategory::RoyalFlush, SuitScoring::WithSuit),
];

impl HandCategory {
    /// Все категории по возрастанию силы.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Базовое значение категории: HighCard = 100 ... RoyalFlush = 1000.
    pub fn base_value(self) -> u32 {
        (self as u32) * 100
    }

    pub fn suit_scoring(self) -> SuitScoring {
        // Порядок строк SCORING_POLICY совпадает с дискриминантами (1..=10).
        SCORING_POLICY[self as usize - 1].1
    }

    /// Человеческое название категории.
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Обратное к [`HandCategory::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        HandCategory::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
