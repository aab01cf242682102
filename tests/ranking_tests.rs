//! Тесты ранжирования рук: "кто сильнее".
//!
//! - сравнение категорий;
//! - кикеры и стрит от туза;
//! - тай-брейк по мастям;
//! - симметрия, транзитивность и чистота компаратора на случайных раздачах.

use std::cmp::Ordering;

use poker_hand_analyzer::domain::{Deck, Hand};
use poker_hand_analyzer::eval::{compare_hands, sort_strongest_first, HandCategory};
use poker_hand_analyzer::infra::DeterministicRng;

fn hand(s: &str) -> Hand {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    Hand::parse(&tokens).expect("valid hand")
}

fn sample_hands(seed: u64, deals: usize) -> Vec<Hand> {
    let mut rng = DeterministicRng::from_seed(seed);
    let mut out = Vec::new();
    for _ in 0..deals {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut rng);
        out.extend(deck.deal_hands(10, 5).unwrap());
    }
    out
}

//
// ============= категории ============
//

#[test]
fn full_house_beats_flush() {
    let full_house = hand("3D 3C 3H 7D 7C");
    let flush = hand("2D 5D 8D JD KD");

    assert_eq!(compare_hands(&full_house, &flush), Ordering::Greater);
    assert_eq!(compare_hands(&flush, &full_house), Ordering::Less);
}

#[test]
fn royal_flush_beats_king_high_straight_flush() {
    let royal = hand("10S JS QS KS AS");
    let king_high = hand("9H 10H JH QH KH");
    let wheel_flush = hand("AD 2D 3D 4D 5D");

    assert_eq!(royal.category(), HandCategory::RoyalFlush);
    assert!(royal > king_high);
    assert!(royal > wheel_flush);
    assert!(king_high > wheel_flush);
}

#[test]
fn ace_low_straight_ranks_below_other_straights() {
    let wheel = hand("AD 2C 3H 4S 5D");
    let six_high = hand("2S 3S 4H 5C 6D");
    let ten_high = hand("6C 7D 8H 9S 10C");

    assert_eq!(wheel.category(), HandCategory::Straight);
    assert_eq!(compare_hands(&wheel, &ten_high), Ordering::Less);
    assert_eq!(compare_hands(&wheel, &six_high), Ordering::Less);
    assert!(six_high < ten_high);
}

//
// ============= кикеры ============
//

#[test]
fn one_pair_higher_kicker_wins() {
    let king_kicker = hand("8C 8D KH 5S 2C");
    let queen_kicker = hand("8H 8S QH 5D 3C");

    assert_eq!(compare_hands(&king_kicker, &queen_kicker), Ordering::Greater);
}

#[test]
fn higher_pair_beats_better_kickers() {
    let nines = hand("9C 9D 2H 3S 4C");
    let eights = hand("8C 8D AH KS QC");

    assert!(nines > eights);
}

#[test]
fn flush_compares_top_card_then_suit() {
    let ace_flush = hand("2C 5C 8C JC AC");
    let king_flush_d = hand("2D 5D 8D JD KD");
    let king_flush_h = hand("3H 5H 8H JH KH");

    assert!(ace_flush > king_flush_h);
    // Одинаковые ранги старшей карты: масть входит в очки карты.
    assert!(king_flush_h > king_flush_d);
}

//
// ============= тай-брейк по мастям ============
//

#[test]
fn identical_pair_ranks_fall_back_to_suit_tiebreak() {
    let a = hand("8C 8D KH 5S 2C");
    let b = hand("8H 8S KD 5C 2D");

    // Очки пар без масти совпадают позиция в позицию.
    let scores_a: Vec<u32> = a.cards().iter().map(|c| c.score).collect();
    let scores_b: Vec<u32> = b.cards().iter().map(|c| c.score).collect();
    assert_eq!(scores_a, scores_b);

    // Решает первая масть канонического порядка: 8S (Spades) против 8C (Clubs).
    assert_eq!(compare_hands(&b, &a), Ordering::Greater);
    assert_eq!(compare_hands(&a, &b), Ordering::Less);
}

#[test]
fn identical_two_pair_ranks_fall_back_to_suit_tiebreak() {
    let a = hand("JC JD 4H 4S AC");
    let b = hand("JH JS 4D 4C AD");

    assert_eq!(compare_hands(&b, &a), Ordering::Greater);
}

#[test]
fn same_cards_compare_equal_regardless_of_dealt_order() {
    let a = hand("8C 8D KH 5S 2C");
    let b = hand("2C KH 8D 5S 8C");

    assert_eq!(compare_hands(&a, &b), Ordering::Equal);
    assert_eq!(a, b);
}

//
// ============= свойства компаратора ============
//

#[test]
fn comparator_is_antisymmetric() {
    let hands = sample_hands(11, 30);
    for a in &hands {
        for b in &hands {
            assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse(), "{a} vs {b}");
        }
    }
}

#[test]
fn comparator_is_transitive() {
    let hands = sample_hands(12, 6);
    for a in &hands {
        for b in &hands {
            if compare_hands(a, b) != Ordering::Greater {
                continue;
            }
            for c in &hands {
                if compare_hands(b, c) == Ordering::Greater {
                    assert_eq!(compare_hands(a, c), Ordering::Greater, "{a} > {b} > {c}");
                }
            }
        }
    }
}

#[test]
fn comparator_is_pure() {
    let hands = sample_hands(13, 10);
    let keys_before: Vec<_> = hands.iter().map(|h| h.ranking_key().clone()).collect();

    let first: Vec<Ordering> = hands.windows(2).map(|w| compare_hands(&w[0], &w[1])).collect();
    let second: Vec<Ordering> = hands.windows(2).map(|w| compare_hands(&w[0], &w[1])).collect();
    assert_eq!(first, second);

    let mut sorted = hands.clone();
    sort_strongest_first(&mut sorted);

    let keys_after: Vec<_> = hands.iter().map(|h| h.ranking_key().clone()).collect();
    assert_eq!(keys_before, keys_after);
}

#[test]
fn higher_category_always_wins() {
    let hands = sample_hands(14, 20);
    for a in &hands {
        for b in &hands {
            if a.category() > b.category() {
                assert_eq!(compare_hands(a, b), Ordering::Greater, "{a} vs {b}");
            }
        }
    }
}

#[test]
fn hands_from_one_deck_never_tie() {
    let mut rng = DeterministicRng::from_seed(15);
    for _ in 0..200 {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut rng);
        let hands = deck.deal_hands(10, 5).unwrap();
        for (i, a) in hands.iter().enumerate() {
            for b in &hands[i + 1..] {
                assert_ne!(compare_hands(a, b), Ordering::Equal, "{a} vs {b}");
            }
        }
    }
}

#[test]
fn sort_strongest_first_is_non_increasing() {
    let mut hands = sample_hands(16, 10);
    sort_strongest_first(&mut hands);

    for pair in hands.windows(2) {
        assert_ne!(compare_hands(&pair[0], &pair[1]), Ordering::Less);
        assert!(pair[0] >= pair[1]);
    }
}
