use std::cmp::Reverse;

use tracing::debug;

use crate::domain::card::{Card, Rank};

use super::category::HandCategory;
use super::errors::EvalError;
use super::lookup_tables::{is_straight_mask, mask_of_cards};
use super::ranking::{score_card, ScoredCard};

/// Размер руки, который умеет классифицировать движок.
pub const HAND_SIZE: usize = 5;

/// Результат классификации 5 карт.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub category: HandCategory,
    /// Каноническая рука: ключевые карты, затем кикеры.
    pub cards: Vec<ScoredCard>,
    pub key_cards: Vec<ScoredCard>,
    pub kickers: Vec<ScoredCard>,
}

/// Количество карт каждого ранга, индекс = вес ранга (2..=14).
type RankCounts = [u8; 15];

fn count_ranks(cards: &[Card]) -> RankCounts {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank_weight() as usize] += 1;
    }
    counts
}

fn has_count(counts: &RankCounts, n: u8) -> bool {
    counts.iter().any(|&c| c == n)
}

fn pairs_count(counts: &RankCounts) -> usize {
    counts.iter().filter(|&&c| c == 2).count()
}

fn is_flush(cards: &[Card]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

/// Категория по строгому приоритету: первая совпавшая побеждает.
fn determine_category(counts: &RankCounts, flush: bool, straight: bool) -> HandCategory {
    let ace = counts[Rank::Ace.weight() as usize] > 0;
    let king = counts[Rank::King.weight() as usize] > 0;

    if flush && straight {
        if ace && king {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        }
    } else if has_count(counts, 4) {
        HandCategory::FourOfAKind
    } else if has_count(counts, 3) && has_count(counts, 2) {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if has_count(counts, 3) {
        HandCategory::ThreeOfAKind
    } else if pairs_count(counts) == 2 {
        HandCategory::TwoPair
    } else if has_count(counts, 2) {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    }
}

fn sort_descending(cards: &mut [ScoredCard]) {
    // Очки пар не содержат масти – масть остаётся явным тай-брейком сортировки.
    cards.sort_by_key(|c| Reverse((c.score, c.card.rank_weight(), c.card.suit_weight())));
}

/// Классифицировать ровно 5 карт.
pub fn classify(cards: &[Card]) -> Result<Classification, EvalError> {
    if cards.len() != HAND_SIZE {
        return Err(EvalError::InvalidHandSize {
            expected: HAND_SIZE,
            actual: cards.len(),
        });
    }

    let counts = count_ranks(cards);
    let flush = is_flush(cards);
    let straight = is_straight_mask(mask_of_cards(cards));
    let category = determine_category(&counts, flush, straight);

    let (mut key_cards, mut kickers): (Vec<ScoredCard>, Vec<ScoredCard>) = cards
        .iter()
        .map(|&card| ScoredCard {
            card,
            score: score_card(card, category),
        })
        .partition(|sc| counts[sc.card.rank_weight() as usize] > 1);

    sort_descending(&mut key_cards);
    sort_descending(&mut kickers);

    // A2345: туз отсортирован первым, но играет как единица – уводим его в конец.
    if straight {
        let first_is_ace = kickers.first().map(|c| c.card.rank) == Some(Rank::Ace);
        let last_is_two = kickers.last().map(|c| c.card.rank) == Some(Rank::Two);
        if first_is_ace && last_is_two {
            kickers.rotate_left(1);
        }
    }

    let canonical: Vec<ScoredCard> = key_cards.iter().chain(kickers.iter()).copied().collect();

    debug!(
        category = %category,
        cards = %canonical.iter().map(|c| c.card.to_string()).collect::<Vec<_>>().join(" "),
        "hand classified"
    );

    Ok(Classification {
        category,
        cards: canonical,
        key_cards,
        kickers,
    })
}
