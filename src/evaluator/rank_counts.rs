use crate::cards::Rank;

/// Rank multiplicities of a hand in a fixed 13-slot table (index = value - 2),
/// plus the non-empty groups sorted by (count desc, rank desc).
///
/// Example: K K K 5 2 groups as [(King, 3), (Five, 1), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCounts {
    counts: [u8; 13],
    groups: Vec<(Rank, u8)>,
}

impl RankCounts {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 13];
        for r in ranks {
            counts[Self::index(*r)] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|r| {
                let c = counts[Self::index(r)];
                (c > 0).then_some((r, c))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { counts, groups }
    }

    const fn index(rank: Rank) -> usize {
        rank.value() as usize - 2
    }

    /// How many cards of `rank` the hand holds.
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[Self::index(rank)]
    }

    pub fn quad(&self) -> Option<Rank> {
        self.rank_with_count(4)
    }

    pub fn trips(&self) -> Option<Rank> {
        self.rank_with_count(3)
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.ranks_with_count(2)
    }

    /// Singleton ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.ranks_with_count(1)
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }

    fn rank_with_count(&self, n: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, c)| *c == n).map(|(r, _)| *r)
    }

    fn ranks_with_count(&self, n: u8) -> Vec<Rank> {
        self.groups.iter().filter(|(_, c)| *c == n).map(|(r, _)| *r).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
