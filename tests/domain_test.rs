//! Интеграционные тесты для доменной модели (crate::domain): карты и колода.

use std::collections::HashSet;

use poker_hand_analyzer::domain::*;
use poker_hand_analyzer::eval::HandCategory;
use poker_hand_analyzer::infra::DeterministicRng;

/// Card/Suit/Rank: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Spades),    // AS
        Card::new(Rank::Ten, Suit::Diamonds),  // 10D
        Card::new(Rank::Two, Suit::Clubs),     // 2C
        Card::new(Rank::Queen, Suit::Hearts),  // QH
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10D");
    // буквы без учёта регистра
    assert_eq!("as".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn card_parse_rejects_unknown_symbols() {
    for bad in ["1Z", "", "A", "10", "11D", "AX", "ZS", "10DD", "1D"] {
        let err = bad.parse::<Card>().unwrap_err();
        assert!(
            matches!(err, CardError::InvalidCard { .. }),
            "{bad:?} должен давать InvalidCard"
        );
    }
}

#[test]
fn rank_weights_cover_two_to_ace() {
    assert_eq!(Rank::Two.weight(), 2);
    assert_eq!(Rank::Ten.weight(), 10);
    assert_eq!(Rank::Ace.weight(), 14);

    for rank in Rank::ALL {
        assert!((2..=14).contains(&rank.weight()));
        assert_eq!(Rank::from_weight(rank.weight()), Some(rank));
    }
    assert_eq!(Rank::from_weight(1), None);
    assert_eq!(Rank::from_weight(15), None);
}

#[test]
fn suit_weights_follow_fixed_table() {
    assert_eq!(Suit::Diamonds.weight(), 1);
    assert_eq!(Suit::Clubs.weight(), 2);
    assert_eq!(Suit::Hearts.weight(), 3);
    assert_eq!(Suit::Spades.weight(), 4);

    let distinct: HashSet<u8> = SUIT_WEIGHTS.iter().map(|(_, w)| *w).collect();
    assert_eq!(distinct.len(), 4);

    for (suit, weight) in SUIT_WEIGHTS {
        assert_eq!(suit.weight(), weight);
    }
}

#[test]
fn weight_lookup_by_symbol_fails_explicitly() {
    assert_eq!(rank_weight_of("10"), Ok(10));
    assert_eq!(rank_weight_of("A"), Ok(14));
    assert_eq!(suit_weight_of("S"), Ok(4));

    assert!(matches!(rank_weight_of("1"), Err(CardError::InvalidCard { .. })));
    assert!(matches!(rank_weight_of("Z"), Err(CardError::InvalidCard { .. })));
    assert!(matches!(suit_weight_of("Z"), Err(CardError::InvalidCard { .. })));
}

#[test]
fn card_pads_to_column_width() {
    assert_eq!(format!("{:>3}", Card::new(Rank::Ace, Suit::Spades)), " AS");
    assert_eq!(format!("{:>3}", Card::new(Rank::Ten, Suit::Hearts)), "10H");
}

//
// ---- Колода ----
//

#[test]
fn standard_deck_is_ordered_and_unique() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    assert_eq!(deck.cards[0], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.cards[12], Card::new(Rank::Ace, Suit::Diamonds));
    assert_eq!(deck.cards[13], Card::new(Rank::Two, Suit::Clubs));
    assert_eq!(deck.cards[51], Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn draw_n_takes_from_top_and_fails_without_side_effects() {
    let mut deck = Deck::standard_52();

    let top = deck.draw_n(3).unwrap();
    assert_eq!(top, vec![
        Card::new(Rank::Two, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Diamonds),
    ]);
    assert_eq!(deck.len(), 49);

    let err = deck.draw_n(50).unwrap_err();
    assert_eq!(err, DeckError::NotEnoughCards { requested: 50, available: 49 });
    assert_eq!(deck.len(), 49);
}

#[test]
fn deal_hands_from_ordered_deck() {
    let mut deck = Deck::standard_52();
    let hands = deck.deal_hands(6, 5).unwrap();

    assert_eq!(hands.len(), 6);
    assert_eq!(deck.len(), 22);

    // 2D..6D и 7D..JD – стрит-флеши, QD KD AD 2C 3C – старшая карта.
    assert_eq!(hands[0].category(), HandCategory::StraightFlush);
    assert_eq!(hands[1].category(), HandCategory::StraightFlush);
    assert_eq!(hands[2].category(), HandCategory::HighCard);

    assert_eq!(hands[0].dealt_cards()[0], Card::new(Rank::Two, Suit::Diamonds));
}

#[test]
fn deal_hands_rejects_oversized_request() {
    let mut deck = Deck::standard_52();
    let err = deck.deal_hands(11, 5).unwrap_err();
    assert_eq!(err, DeckError::NotEnoughCards { requested: 55, available: 52 });
    assert_eq!(deck.len(), 52);
}

#[test]
fn deal_hands_propagates_invalid_hand_size() {
    let mut deck = Deck::standard_52();
    let err = deck.deal_hands(2, 4).unwrap_err();
    assert!(matches!(err, DeckError::Eval(_)));
}

#[test]
fn deal_hands_with_overflowing_request_is_rejected() {
    let mut deck = Deck::standard_52();

    let err = deck.deal_hands(usize::MAX / 2 + 1, 2).unwrap_err();
    assert_eq!(err, DeckError::NotEnoughCards { requested: usize::MAX, available: 52 });
    assert_eq!(deck.len(), 52);

    // Пустые руки: произведение 0, но первая же рука не проходит классификацию.
    let err = deck.deal_hands(usize::MAX, 0).unwrap_err();
    assert!(matches!(err, DeckError::Eval(_)));
    assert_eq!(deck.len(), 52);
}

#[test]
fn deterministic_shuffle_is_reproducible() {
    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();
    let mut c = Deck::standard_52();

    a.shuffle(&mut DeterministicRng::from_seed(123));
    b.shuffle(&mut DeterministicRng::from_seed(123));
    c.shuffle(&mut DeterministicRng::from_seed(456));

    assert_eq!(a, b, "Same seed must produce identical shuffle");
    assert_ne!(a, c, "Different seeds must produce different shuffle");

    let unique: HashSet<Card> = a.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);
}
