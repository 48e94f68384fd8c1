// Host-facing engine API. These free functions are everything a front end
// needs to run five-card draw by hand: shuffle, deal, replace, classify, let
// the dealer choose, and compare. `game::Round` strings them together with
// phase checks; a host that wants full control can call them directly.

use rand::Rng;

use crate::deck::Deck;
use crate::evaluator::{HandEvaluation, Verdict};
use crate::hand::{DiscardSet, Hand, HandError, HAND_SIZE};

/// A standard deck shuffled with `rng`.
pub fn new_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    Deck::new_shuffled(rng)
}

/// Take ten cards from the front of `deck`: five for the player, then five
/// for the dealer. Returns `(player, dealer, remainder)`.
///
/// ```
/// use draw_poker::deck::Deck;
/// use draw_poker::engine;
///
/// let (player, dealer, rest) = engine::deal(Deck::shuffled_seeded(1)).unwrap();
/// assert_eq!(rest.len(), 42);
/// assert!(player.iter().all(|c| !dealer.iter().any(|d| d == c)));
/// ```
pub fn deal(mut deck: Deck) -> Result<(Hand, Hand, Deck), HandError> {
    let cards = deck.draw_n(2 * HAND_SIZE)?;
    let player = Hand::from_slice(&cards[..HAND_SIZE])?;
    let dealer = Hand::from_slice(&cards[HAND_SIZE..])?;
    Ok((player, dealer, deck))
}

/// Overwrite the chosen slots with cards from the front of `deck`.
pub fn apply_replacements(
    mut hand: Hand,
    discards: &DiscardSet,
    mut deck: Deck,
) -> Result<(Hand, Deck), HandError> {
    hand.replace(discards, &mut deck)?;
    Ok((hand, deck))
}

pub fn classify(hand: &Hand) -> HandEvaluation {
    crate::evaluator::classify(hand)
}

/// The dealer's discards under the default policy.
pub fn choose_dealer_discards(hand: &Hand) -> DiscardSet {
    crate::agents::choose_dealer_discards(hand)
}

/// `a` is the player's evaluation, `b` the dealer's.
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Verdict {
    Verdict::from_ordering(crate::evaluator::compare(a, b))
}
