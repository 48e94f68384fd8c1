use draw_poker::agents::{choose_dealer_discards, DealerConfig, DealerPolicy};
use draw_poker::cards::{Card, Rank, Suit};
use draw_poker::deck::{Deck, DECK_SIZE};
use draw_poker::evaluator::{classify, classify_cards, compare, Category};
use draw_poker::hand::{Hand, MAX_DISCARDS};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

fn any_hand() -> impl Strategy<Value = Hand> {
    let deck: Vec<Card> = Deck::standard().cards().collect();
    prop::sample::subsequence(deck, 5)
        .prop_shuffle()
        .prop_map(|cards| Hand::from_slice(&cards).expect("five distinct cards"))
}

fn flush_ranks() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("not a straight", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let run = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(run || vals == [2, 3, 4, 5, 14])
        })
        .prop_map(|set| set.into_iter().rev().collect())
}

fn flush_of(values: &[u8], suit: Suit) -> [Card; 5] {
    let rank = |v: u8| Rank::from_value(v).expect("rank value");
    [
        Card::new(rank(values[0]), suit),
        Card::new(rank(values[1]), suit),
        Card::new(rank(values[2]), suit),
        Card::new(rank(values[3]), suit),
        Card::new(rank(values[4]), suit),
    ]
}

proptest! {
    #[test]
    fn classification_ignores_card_order(hand in any_hand()) {
        let mut cards = *hand.cards();
        let expected = classify_cards(&cards);
        cards.reverse();
        prop_assert_eq!(classify_cards(&cards), expected);
        cards.rotate_left(2);
        prop_assert_eq!(classify_cards(&cards), expected);
    }

    #[test]
    fn comparison_is_a_total_order(a in any_hand(), b in any_hand(), c in any_hand()) {
        let (ea, eb, ec) = (classify(&a), classify(&b), classify(&c));

        prop_assert_eq!(compare(&ea, &ea), Ordering::Equal);
        prop_assert_eq!(compare(&ea, &eb), compare(&eb, &ea).reverse());
        if compare(&ea, &eb) != Ordering::Less && compare(&eb, &ec) != Ordering::Less {
            prop_assert_ne!(compare(&ea, &ec), Ordering::Less);
        }
    }

    #[test]
    fn higher_category_always_wins(a in any_hand(), b in any_hand()) {
        let (ea, eb) = (classify(&a), classify(&b));
        if ea.category > eb.category {
            prop_assert_eq!(compare(&ea, &eb), Ordering::Greater);
        }
    }

    #[test]
    fn tie_break_length_matches_category(hand in any_hand()) {
        let e = classify(&hand);
        let expected = match e.category {
            Category::FourOfAKind | Category::FullHouse => 2,
            Category::ThreeOfAKind | Category::TwoPair => 3,
            Category::OnePair => 4,
            _ => 5,
        };
        prop_assert_eq!(e.tiebreak.as_slice().len(), expected);
    }

    #[test]
    fn flushes_compare_by_descending_ranks(a in flush_ranks(), b in flush_ranks()) {
        let ea = classify_cards(&flush_of(&a, Suit::Hearts));
        let eb = classify_cards(&flush_of(&b, Suit::Spades));
        prop_assert_eq!(ea.category, Category::Flush);
        prop_assert_eq!(eb.category, Category::Flush);
        prop_assert_eq!(compare(&ea, &eb), a.cmp(&b));
    }

    #[test]
    fn dealer_discards_are_legal_and_deterministic(hand in any_hand()) {
        let first = choose_dealer_discards(&hand);
        prop_assert!(first.len() <= MAX_DISCARDS);
        prop_assert_eq!(first, choose_dealer_discards(&hand));

        let slots = first.to_vec();
        prop_assert!(slots.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(slots.iter().all(|&s| s < 5));
    }

    #[test]
    fn made_hands_stand_pat(hand in any_hand()) {
        let e = classify(&hand);
        if e.category >= Category::FullHouse {
            prop_assert!(choose_dealer_discards(&hand).is_empty());
        }
        let strict = DealerPolicy::new(DealerConfig::default().with_straight_draws(false));
        if matches!(e.category, Category::OnePair | Category::TwoPair | Category::ThreeOfAKind) {
            prop_assert_eq!(strict.choose_discards(&hand), choose_dealer_discards(&hand));
        }
    }

    #[test]
    fn seeded_shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = Deck::shuffled_seeded(seed);
        prop_assert!(deck.validate().is_ok());
        let unique: HashSet<Card> = deck.cards().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        let again: Vec<Card> = Deck::shuffled_seeded(seed).cards().collect();
        prop_assert_eq!(deck.cards().collect::<Vec<_>>(), again);
    }
}
