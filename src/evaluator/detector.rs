use super::hand_analysis::{values, HandAnalysis};
use crate::evaluator::{Category, HandEvaluation};

/// One hand category. `evaluate` returns `None` when the hand does not
/// qualify, so detectors are tried strongest first and the first hit wins.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<HandEvaluation>;
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        if !(a.suit_info.is_flush && a.straight_info.is_straight) {
            return None;
        }
        Some(a.evaluation(self.category(), &a.straight_info.key(&a.ranks)))
    }
}

/// Key: (quad rank, kicker).
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        let quad = a.rank_counts.quad()?;
        let kicker = *a.rank_counts.kickers().first()?;
        Some(a.evaluation(self.category(), &[quad.value(), kicker.value()]))
    }
}

/// Key: (trip rank, pair rank).
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        if !a.rank_counts.has_full_house() {
            return None;
        }
        let trips = a.rank_counts.trips()?;
        let pair = *a.rank_counts.pairs().first()?;
        Some(a.evaluation(self.category(), &[trips.value(), pair.value()]))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        a.suit_info.is_flush.then(|| a.evaluation(self.category(), &a.values_desc()))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        a.straight_info
            .is_straight
            .then(|| a.evaluation(self.category(), &a.straight_info.key(&a.ranks)))
    }
}

/// Key: (trip rank, higher kicker, lower kicker).
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        let trips = a.rank_counts.trips()?;
        let kickers = a.rank_counts.kickers();
        if kickers.len() != 2 {
            return None;
        }
        let mut key = vec![trips.value()];
        key.extend(values(&kickers));
        Some(a.evaluation(self.category(), &key))
    }
}

/// Key: (high pair, low pair, kicker).
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        let pairs = a.rank_counts.pairs();
        if pairs.len() != 2 {
            return None;
        }
        let mut key = values(&pairs);
        key.extend(values(&a.rank_counts.kickers()));
        Some(a.evaluation(self.category(), &key))
    }
}

/// Key: (pair rank, three kickers high to low).
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        let pairs = a.rank_counts.pairs();
        if pairs.len() != 1 || a.rank_counts.trips().is_some() {
            return None;
        }
        let mut key = values(&pairs);
        key.extend(values(&a.rank_counts.kickers()));
        Some(a.evaluation(self.category(), &key))
    }
}

/// Always matches.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn evaluate(&self, a: &HandAnalysis) -> Option<HandEvaluation> {
        Some(a.evaluation(self.category(), &a.values_desc()))
    }
}

/// Strongest first.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn analyse(s: &str) -> HandAnalysis {
        let hand: Hand = s.parse().expect("valid hand");
        HandAnalysis::new(hand.cards())
    }

    #[test]
    fn detectors_are_listed_strongest_first() {
        let weights: Vec<u8> = DETECTORS.iter().map(|d| d.category().weight()).collect();
        assert_eq!(weights, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn straight_flush_also_matches_weaker_detectors() {
        let a = analyse("9h 8h 7h 6h 5h");
        assert!(StraightFlushDetector.evaluate(&a).is_some());
        assert!(FlushDetector.evaluate(&a).is_some());
        assert!(StraightDetector.evaluate(&a).is_some());
        assert!(OnePairDetector.evaluate(&a).is_none());
    }

    #[test]
    fn full_house_is_not_trips_or_pair() {
        let a = analyse("Ks Kh Kd Qc Qs");
        let fh = FullHouseDetector.evaluate(&a).expect("full house");
        assert_eq!(fh.tiebreak.as_slice(), &[13, 12]);
        assert!(ThreeOfAKindDetector.evaluate(&a).is_none());
        assert!(OnePairDetector.evaluate(&a).is_none());
    }

    #[test]
    fn quads_do_not_read_as_trips() {
        let a = analyse("As Ah Ad Ac Ks");
        assert!(ThreeOfAKindDetector.evaluate(&a).is_none());
        let quads = FourOfAKindDetector.evaluate(&a).expect("quads");
        assert_eq!(quads.tiebreak.as_slice(), &[14, 13]);
    }

    #[test]
    fn two_pair_key() {
        let a = analyse("As Ah Kd Kc Qs");
        let eval = TwoPairDetector.evaluate(&a).expect("two pair");
        assert_eq!(eval.tiebreak.as_slice(), &[14, 13, 12]);
    }

    #[test]
    fn one_pair_key() {
        let a = analyse("Js Jh 9d 7c 3s");
        let eval = OnePairDetector.evaluate(&a).expect("pair");
        assert_eq!(eval.category, Category::OnePair);
        assert_eq!(eval.tiebreak.as_slice(), &[11, 9, 7, 3]);
    }

    #[test]
    fn high_card_always_matches() {
        let a = analyse("As Kh Jd 9c 7s");
        let eval = HighCardDetector.evaluate(&a).expect("fallback");
        assert_eq!(eval.tiebreak.as_slice(), &[14, 13, 11, 9, 7]);
    }
}
