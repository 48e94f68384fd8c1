pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_counts;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest. The discriminant is the
/// category weight (1..=9) used as the primary sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn weight(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered tie-break values for hands of the same category.
///
/// Length depends on the category: 5 for straight-flush, flush, straight and
/// high card; 2 for four-of-a-kind and full house; 3 for three-of-a-kind and
/// two pair; 4 for one pair. Compared element-wise, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TieBreak {
    values: [u8; 5],
    len: u8,
}

impl TieBreak {
    pub(crate) fn from_values(values: &[u8]) -> Self {
        debug_assert!(values.len() <= 5);
        let mut buf = [0u8; 5];
        let len = values.len().min(5);
        buf[..len].copy_from_slice(&values[..len]);
        Self { values: buf, len: len as u8 }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    /// First (most significant) tie-break value.
    pub fn primary(&self) -> u8 {
        self.values[0]
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classification of a five-card hand. Ordering is by category weight, then
/// by tie-break key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandEvaluation {
    pub category: Category,
    pub tiebreak: TieBreak,
}

impl HandEvaluation {
    pub fn new(category: Category, tiebreak: &[u8]) -> Self {
        Self { category, tiebreak: TieBreak::from_values(tiebreak) }
    }

    /// Human readable summary, e.g. "Full house, nines over twos".
    pub fn describe(&self) -> String {
        let v = self.tiebreak.as_slice();
        let plural = |i: usize| v.get(i).copied().and_then(Rank::from_value).map_or("?", Rank::plural);
        let name = |i: usize| v.get(i).copied().and_then(Rank::from_value).map_or("?", Rank::name);
        match self.category {
            Category::StraightFlush | Category::Straight | Category::Flush => {
                format!("{}, {}-high", self.category, name(0))
            }
            Category::FourOfAKind | Category::ThreeOfAKind | Category::OnePair => {
                format!("{}, {}", self.category, plural(0))
            }
            Category::FullHouse => format!("{}, {} over {}", self.category, plural(0), plural(1)),
            Category::TwoPair => format!("{}, {} and {}", self.category, plural(0), plural(1)),
            Category::HighCard => format!("{}, {}", self.category, name(0)),
        }
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Outcome of comparing the player's final hand against the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Verdict {
    PlayerWins,
    DealerWins,
    Tie,
}

impl Verdict {
    /// `ord` is the player's hand compared to the dealer's.
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::PlayerWins,
            Ordering::Less => Verdict::DealerWins,
            Ordering::Equal => Verdict::Tie,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Verdict::PlayerWins => "Player wins",
            Verdict::DealerWins => "Dealer wins",
            Verdict::Tie => "Tie",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a validated five-card hand.
///
/// ```
/// use draw_poker::evaluator::{classify, Category};
/// use draw_poker::hand::Hand;
///
/// let wheel: Hand = "As 2d 3c 4h 5s".parse().unwrap();
/// let eval = classify(&wheel);
/// assert_eq!(eval.category, Category::Straight);
/// assert_eq!(eval.tiebreak.as_slice(), &[5, 4, 3, 2, 1]);
/// ```
pub fn classify(hand: &Hand) -> HandEvaluation {
    classify_cards(hand.cards())
}

/// Classify any five cards. Total over its input; duplicates are not rejected
/// here, which keeps it usable for exhaustive and property-based checks.
pub fn classify_cards(cards: &[Card; 5]) -> HandEvaluation {
    use hand_analysis::HandAnalysis;

    classify_analysis(&HandAnalysis::new(cards))
}

/// Classify from an analysis already built, for callers that also need the
/// rank and suit tables.
pub(crate) fn classify_analysis(analysis: &hand_analysis::HandAnalysis) -> HandEvaluation {
    // HighCard always matches, so the search never falls off the end
    detector::DETECTORS
        .iter()
        .find_map(|d| d.evaluate(analysis))
        .unwrap_or_else(|| HandEvaluation::new(Category::HighCard, &analysis.values_desc()))
}

/// Three-way comparison: category weight first, then tie-break key.
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.category.cmp(&b.category).then_with(|| a.tiebreak.cmp(&b.tiebreak))
}

/// Verdict for a player hand against a dealer hand.
///
/// ```
/// use draw_poker::evaluator::{judge, Verdict};
/// use draw_poker::hand::Hand;
///
/// let player: Hand = "9s 9d 9c 2h 2s".parse().unwrap();
/// let dealer: Hand = "Ks Qd Jc 10h 9h".parse().unwrap();
/// assert_eq!(judge(&player, &dealer), Verdict::PlayerWins);
/// ```
pub fn judge(player: &Hand, dealer: &Hand) -> Verdict {
    Verdict::from_ordering(compare(&classify(player), &classify(dealer)))
}
