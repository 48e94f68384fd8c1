use crate::cards::{parse_cards, Card};
use crate::deck::{Deck, DeckError};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a draw-poker hand.
pub const HAND_SIZE: usize = 5;
/// Most slots a single replacement may touch.
pub const MAX_DISCARDS: usize = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
    #[error(transparent)]
    Discard(#[from] DiscardError),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiscardError {
    #[error("slot {0} is outside 0..=4")]
    SlotOutOfRange(usize),
    #[error("slot {0} listed more than once")]
    DuplicateSlot(usize),
    #[error("at most 3 cards may be replaced, got {0}")]
    TooManyDiscards(usize),
}

/// Five distinct cards. Slot order (0..=4) is kept for replacement.
///
/// ```
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "As Kd Qc Jh 9s".parse().unwrap();
/// assert_eq!(hand.slot(4).map(|c| c.to_string()).as_deref(), Some("9s"));
/// assert!(hand.slot(5).is_none());
/// assert!("As As Qc Jh 9s".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        for (i, c) in cards.iter().enumerate() {
            if cards[..i].contains(c) {
                return Err(HandError::DuplicateCard(*c));
            }
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// Card at `slot`, or `None` past the fifth slot.
    pub fn slot(&self, slot: usize) -> Option<Card> {
        self.0.get(slot).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }

    /// Overwrite each slot in `discards` (ascending) with the next card from `deck`.
    ///
    /// The new hand is built from the top of the deck and checked before
    /// anything is taken, so on error neither hand nor deck changes. A deck
    /// card already held in a kept slot is rejected as a duplicate.
    pub fn replace(&mut self, discards: &DiscardSet, deck: &mut Deck) -> Result<(), HandError> {
        let mut next = self.0;
        for (slot, card) in discards.iter().zip(deck.peek_n(discards.len())?) {
            next[slot] = card;
        }
        let next = Self::try_new(next)?;
        deck.draw_n(discards.len())?;
        *self = next;
        Ok(())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// A validated set of slots (0..=4) to replace, at most three of them.
///
/// Stored as a 5-bit mask so iteration is always in ascending slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiscardSet(u8);

impl DiscardSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn try_from_slots(slots: &[usize]) -> Result<Self, DiscardError> {
        let mut mask = 0u8;
        for &slot in slots {
            if slot >= HAND_SIZE {
                return Err(DiscardError::SlotOutOfRange(slot));
            }
            let bit = 1u8 << slot;
            if mask & bit != 0 {
                return Err(DiscardError::DuplicateSlot(slot));
            }
            mask |= bit;
        }
        if slots.len() > MAX_DISCARDS {
            return Err(DiscardError::TooManyDiscards(slots.len()));
        }
        Ok(Self(mask))
    }

    /// Add `slot` if absent, remove it if present. Refuses to grow past
    /// [`MAX_DISCARDS`]; returns whether the set changed.
    pub fn toggle(&mut self, slot: usize) -> bool {
        if slot >= HAND_SIZE {
            return false;
        }
        let bit = 1u8 << slot;
        if self.0 & bit != 0 {
            self.0 &= !bit;
            return true;
        }
        if self.len() >= MAX_DISCARDS {
            return false;
        }
        self.0 |= bit;
        true
    }

    pub fn contains(&self, slot: usize) -> bool {
        slot < HAND_SIZE && self.0 & (1u8 << slot) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let mask = self.0;
        (0..HAND_SIZE).filter(move |s| mask & (1u8 << *s) != 0)
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl TryFrom<&[usize]> for DiscardSet {
    type Error = DiscardError;
    fn try_from(slots: &[usize]) -> Result<Self, Self::Error> {
        Self::try_from_slots(slots)
    }
}
