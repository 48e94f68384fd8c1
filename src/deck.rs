use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashSet, VecDeque};

/// Number of cards in a full French deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck is exhausted")]
    Exhausted,
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards { requested: usize, remaining: usize },
    #[error("deck must hold 52 cards, found {0}")]
    WrongSize(usize),
    #[error("duplicate card in deck: {0}")]
    Duplicate(Card),
}

/// A single-use 52-card deck. Cards are dealt from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// The canonical unshuffled deck, suit by suit.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert!(deck.validate().is_ok());
    /// ```
    pub fn standard() -> Self {
        let cards: VecDeque<Card> = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        let deck = Self { cards };
        debug_assert!(deck.validate().is_ok());
        deck
    }

    /// A freshly shuffled deck drawn from `rng`.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(rng);
        deck
    }

    /// A shuffled deck that is reproducible from `seed`.
    pub fn shuffled_seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new_shuffled(&mut rng)
    }

    /// A deck in exactly the given order, top first. Used to replay or stack
    /// a deal; the full-deck invariant still applies.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, DeckError> {
        let deck = Self { cards: cards.into_iter().collect() };
        deck.validate()?;
        Ok(deck)
    }

    /// Check the full-deck invariant: exactly 52 distinct cards.
    /// Only meaningful before any card has been drawn.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(self.cards.len()));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for &c in &self.cards {
            if !seen.insert(c) {
                return Err(DeckError::Duplicate(c));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Uniform Fisher-Yates shuffle, last index down to 1.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Remove and return the top card.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Exhausted)
    }

    /// The top `n` cards without removing them.
    pub fn peek_n(&self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards { requested: n, remaining: self.cards.len() });
        }
        Ok(self.cards.iter().take(n).copied().collect())
    }

    /// Draw `n` cards from the top, or none at all if fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards { requested: n, remaining: self.cards.len() });
        }
        Ok(self.cards.drain(..n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_is_valid() {
        let d = Deck::standard();
        assert_eq!(d.len(), DECK_SIZE);
        assert!(d.validate().is_ok());
        assert_eq!(d.cards().next(), Some(Card::new(Rank::Two, Suit::Hearts)));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::shuffled_seeded(42);
        let d2 = Deck::shuffled_seeded(42);
        assert_eq!(d1.cards().collect::<Vec<_>>(), d2.cards().collect::<Vec<_>>());
        let d3 = Deck::shuffled_seeded(43);
        assert_ne!(d1.cards().collect::<Vec<_>>(), d3.cards().collect::<Vec<_>>());
    }

    #[test]
    fn draw_takes_from_the_front() {
        let mut d = Deck::shuffled_seeded(7);
        let top: Vec<Card> = d.cards().take(3).collect();
        assert_eq!(d.draw_one().unwrap(), top[0]);
        assert_eq!(d.draw_n(2).unwrap(), vec![top[1], top[2]]);
        assert_eq!(d.len(), 49);
    }

    #[test]
    fn empty_deck_is_exhausted() {
        let mut d = Deck::standard();
        for _ in 0..DECK_SIZE {
            assert!(d.draw_one().is_ok());
        }
        assert!(d.is_empty());
        assert_eq!(d.draw_one(), Err(DeckError::Exhausted));
        assert_eq!(d.peek_n(0), Ok(Vec::new()));
    }

    #[test]
    fn peek_leaves_the_deck_alone() {
        let d = Deck::standard();
        let top = d.peek_n(3).unwrap();
        assert_eq!(top, d.cards().take(3).collect::<Vec<_>>());
        assert_eq!(d.len(), DECK_SIZE);
        assert!(matches!(d.peek_n(53), Err(DeckError::NotEnoughCards { requested: 53, .. })));
    }

    #[test]
    fn draw_n_is_all_or_nothing() {
        let mut d = Deck::standard();
        d.draw_n(50).unwrap();
        let err = d.draw_n(3).unwrap_err();
        assert_eq!(err, DeckError::NotEnoughCards { requested: 3, remaining: 2 });
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn validate_catches_duplicates_and_size() {
        let mut d = Deck::standard();
        let first = d.cards[0];
        d.cards[1] = first;
        assert_eq!(d.validate(), Err(DeckError::Duplicate(first)));
        d.cards.pop_back();
        assert_eq!(d.validate(), Err(DeckError::WrongSize(51)));
    }

    #[test]
    fn from_cards_keeps_order_and_checks_invariant() {
        let mut cards: Vec<Card> = Deck::standard().cards().collect();
        cards.reverse();
        let d = Deck::from_cards(cards.clone()).expect("full deck");
        assert_eq!(d.cards().next(), Some(Card::new(Rank::Ace, Suit::Spades)));
        cards.pop();
        assert_eq!(Deck::from_cards(cards).unwrap_err(), DeckError::WrongSize(51));
    }
}
