use core::fmt;

use crate::cards::{Card, Rank, Suit};
use crate::evaluator::hand_analysis::HandAnalysis;
use crate::evaluator::rank_counts::RankCounts;
use crate::evaluator::{classify_analysis, Category};
use crate::hand::{DiscardSet, Hand, HAND_SIZE};

/// Tunable knobs of the dealer's draw table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct DealerConfig {
    /// A flush stands pat when its highest card value is strictly above this.
    pub flush_stand_pat: u8,
    /// A straight stands pat when its top value is strictly above this.
    pub straight_stand_pat: u8,
    /// Draw to four-card straights from a high-card hand.
    pub straight_draws: bool,
}

impl DealerConfig {
    pub const DEFAULT_FLUSH_STAND_PAT: u8 = 9;
    pub const DEFAULT_STRAIGHT_STAND_PAT: u8 = 5;

    pub fn with_flush_stand_pat(mut self, value: u8) -> Self {
        self.flush_stand_pat = value;
        self
    }

    pub fn with_straight_stand_pat(mut self, value: u8) -> Self {
        self.straight_stand_pat = value;
        self
    }

    pub fn with_straight_draws(mut self, enabled: bool) -> Self {
        self.straight_draws = enabled;
        self
    }
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            flush_stand_pat: Self::DEFAULT_FLUSH_STAND_PAT,
            straight_stand_pat: Self::DEFAULT_STRAIGHT_STAND_PAT,
            straight_draws: true,
        }
    }
}

/// Which row of the draw table produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrawReason {
    /// Straight flush, quads, full house, or a strong enough flush/straight.
    StandPat(Category),
    KeepTrips,
    KeepTwoPair,
    KeepPair,
    FourFlush(Suit),
    /// Four cards inside a five-value window topped by this value.
    StraightDraw(u8),
    KeepTopTwo,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::StandPat(cat) => write!(f, "stands pat on {}", cat.label().to_lowercase()),
            DrawReason::KeepTrips => f.write_str("keeps three of a kind"),
            DrawReason::KeepTwoPair => f.write_str("keeps two pair"),
            DrawReason::KeepPair => f.write_str("keeps the pair"),
            DrawReason::FourFlush(suit) => write!(f, "draws to a {} flush", suit.glyph()),
            DrawReason::StraightDraw(top) => {
                let name = Rank::from_value(*top).map_or("?", Rank::name);
                write!(f, "draws to a {name}-high straight")
            }
            DrawReason::KeepTopTwo => f.write_str("keeps the two highest cards"),
        }
    }
}

/// Deterministic discard chooser for the dealer.
///
/// Same hand and config in, same discard set out. The policy never sees the
/// deck and never draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerPolicy {
    config: DealerConfig,
}

impl DealerPolicy {
    pub fn new(config: DealerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DealerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DealerConfig) {
        self.config = config;
    }

    pub fn choose_discards(&self, hand: &Hand) -> DiscardSet {
        self.decide(hand).0
    }

    /// Discards plus the reason, for hosts that narrate the dealer's draw.
    pub fn decide(&self, hand: &Hand) -> (DiscardSet, DrawReason) {
        let cards = hand.cards();
        let analysis = HandAnalysis::new(cards);
        let eval = classify_analysis(&analysis);
        let counts = &analysis.rank_counts;
        let unmatched = |c: &Card| counts.count(c.rank()) == 1;
        let (discards, reason) = match eval.category {
            Category::StraightFlush | Category::FourOfAKind | Category::FullHouse => {
                (DiscardSet::empty(), DrawReason::StandPat(eval.category))
            }
            Category::Flush if eval.tiebreak.primary() > self.config.flush_stand_pat => {
                (DiscardSet::empty(), DrawReason::StandPat(eval.category))
            }
            Category::Straight if eval.tiebreak.primary() > self.config.straight_stand_pat => {
                (DiscardSet::empty(), DrawReason::StandPat(eval.category))
            }
            Category::ThreeOfAKind => (slots_where(cards, unmatched), DrawReason::KeepTrips),
            Category::TwoPair => (slots_where(cards, unmatched), DrawReason::KeepTwoPair),
            Category::OnePair => (pair_kickers(cards, counts), DrawReason::KeepPair),
            _ => self.high_card(cards, &analysis),
        };
        log::debug!("dealer {hand}: {} -> discard {:?} ({reason})", eval, discards.to_vec());
        (discards, reason)
    }

    fn high_card(
        &self,
        cards: &[Card; HAND_SIZE],
        analysis: &HandAnalysis,
    ) -> (DiscardSet, DrawReason) {
        if let Some(suit) = analysis.suit_info.four_flush() {
            return (slots_where(cards, |c| c.suit() != suit), DrawReason::FourFlush(suit));
        }
        if self.config.straight_draws {
            if let Some((slot, top)) = straight_draw(cards) {
                return (slots_where_idx(|i| i == slot), DrawReason::StraightDraw(top));
            }
        }
        (keep_top_two(cards), DrawReason::KeepTopTwo)
    }
}

/// Default-config shortcut.
pub fn choose_dealer_discards(hand: &Hand) -> DiscardSet {
    DealerPolicy::default().choose_discards(hand)
}

fn slots_where(cards: &[Card; HAND_SIZE], pred: impl Fn(&Card) -> bool) -> DiscardSet {
    slots_where_idx(|i| pred(&cards[i]))
}

fn slots_where_idx(pred: impl Fn(usize) -> bool) -> DiscardSet {
    let mut set = DiscardSet::empty();
    for slot in (0..HAND_SIZE).filter(|&i| pred(i)) {
        set.toggle(slot);
    }
    set
}

/// The two lowest kickers; equal values fall back to slot order.
fn pair_kickers(cards: &[Card; HAND_SIZE], counts: &RankCounts) -> DiscardSet {
    let mut kickers: Vec<usize> =
        (0..HAND_SIZE).filter(|&i| counts.count(cards[i].rank()) == 1).collect();
    kickers.sort_by_key(|&i| (cards[i].value(), i));
    kickers.truncate(2);
    slots_where_idx(|i| kickers.contains(&i))
}

/// Discard everything but the two highest cards; equal values keep the earlier slot.
fn keep_top_two(cards: &[Card; HAND_SIZE]) -> DiscardSet {
    let mut order: Vec<usize> = (0..HAND_SIZE).collect();
    order.sort_by_key(|&i| (core::cmp::Reverse(cards[i].value()), i));
    let keep = [order[0], order[1]];
    slots_where_idx(|i| !keep.contains(&i))
}

/// Finds the single card whose removal leaves four distinct values inside one
/// five-value window. Highest window top wins, then the lowest slot. The
/// ace plays high in every window except 1..=5.
fn straight_draw(cards: &[Card; HAND_SIZE]) -> Option<(usize, u8)> {
    for top in (5..=14u8).rev() {
        let bottom = top - 4;
        let value_of = |c: &Card| if top == 5 { c.rank().low_value() } else { c.value() };
        for slot in 0..HAND_SIZE {
            let mut rest: Vec<u8> = (0..HAND_SIZE)
                .filter(|&i| i != slot)
                .map(|i| value_of(&cards[i]))
                .collect();
            rest.sort_unstable();
            rest.dedup();
            if rest.len() == 4 && rest.iter().all(|v| (bottom..=top).contains(v)) {
                return Some((slot, top));
            }
        }
    }
    None
}
