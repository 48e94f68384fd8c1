use super::rank_counts::RankCounts;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, HandEvaluation};

/// Pre-computed analysis of a five-card hand, shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks sorted high to low.
    pub ranks: [Rank; 5],
    pub rank_counts: RankCounts,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks = cards.map(Card::rank);
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let rank_counts = RankCounts::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_counts, suit_info, straight_info }
    }

    /// All five values high to low, ace = 14.
    pub fn values_desc(&self) -> [u8; 5] {
        self.ranks.map(Rank::value)
    }

    pub fn evaluation(&self, category: Category, tiebreak: &[u8]) -> HandEvaluation {
        HandEvaluation::new(category, tiebreak)
    }
}

pub(crate) fn values(ranks: &[Rank]) -> Vec<u8> {
    ranks.iter().map(|r| r.value()).collect()
}
