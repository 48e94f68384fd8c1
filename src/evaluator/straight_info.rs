use crate::cards::Rank;

/// Whether five ranks form a straight, and its comparison key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub is_wheel: bool,
}

impl StraightInfo {
    /// Accepts five consecutive ace-high values, or exactly A-2-3-4-5.
    /// Wrap-arounds such as K-A-2-3-4 are not straights.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut values = ranks.map(Rank::value);
        values.sort_unstable_by(|a, b| b.cmp(a));

        let is_consecutive = values.windows(2).all(|w| w[0] == w[1] + 1);
        if is_consecutive {
            return StraightInfo { is_straight: true, is_wheel: false };
        }

        if values == [14, 5, 4, 3, 2] {
            return StraightInfo { is_straight: true, is_wheel: true };
        }

        StraightInfo { is_straight: false, is_wheel: false }
    }

    /// Five-value descending key; the wheel's ace counts as 1.
    pub fn key(&self, ranks: &[Rank; 5]) -> [u8; 5] {
        let mut values =
            if self.is_wheel { ranks.map(Rank::low_value) } else { ranks.map(Rank::value) };
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }
}
