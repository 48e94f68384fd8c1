use crate::cards::{Card, Suit};

/// Suit distribution of a five-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    /// The suit held by the most cards, with its count. Ties go to the
    /// earlier suit in [`Suit::ALL`].
    pub dominant: (Suit, u8),
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 4];
        for c in cards {
            counts[suit_index(c.suit())] += 1;
        }
        let mut dominant = (Suit::ALL[0], counts[0]);
        for (i, &n) in counts.iter().enumerate().skip(1) {
            if n > dominant.1 {
                dominant = (Suit::ALL[i], n);
            }
        }
        SuitInfo { is_flush: dominant.1 == 5, dominant }
    }

    /// The suit shared by exactly four cards, if any.
    pub fn four_flush(&self) -> Option<Suit> {
        (self.dominant.1 == 4).then_some(self.dominant.0)
    }
}

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Hearts => 0,
        Suit::Diamonds => 1,
        Suit::Clubs => 2,
        Suit::Spades => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn info(s: &str) -> SuitInfo {
        let hand: Hand = s.parse().expect("valid hand");
        SuitInfo::detect(hand.cards())
    }

    #[test]
    fn flush() {
        let i = info("As Ks Qs Js 9s");
        assert!(i.is_flush);
        assert_eq!(i.dominant, (Suit::Spades, 5));
        assert_eq!(i.four_flush(), None);
    }

    #[test]
    fn four_flush() {
        let i = info("Ah Kh 7h 2h 9c");
        assert!(!i.is_flush);
        assert_eq!(i.four_flush(), Some(Suit::Hearts));
    }

    #[test]
    fn scattered_suits() {
        let i = info("Ah Kd 7c 2s 9c");
        assert!(!i.is_flush);
        assert_eq!(i.dominant, (Suit::Clubs, 2));
        assert_eq!(i.four_flush(), None);
    }
}
