use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::agents::{DealerAgent, DealerConfig, DrawAgent, DrawReason};
use crate::deck::Deck;
use crate::engine;
use crate::evaluator::{classify, compare, HandEvaluation, Verdict};
use crate::hand::{DiscardSet, Hand, HandError};

/// Where a round stands. Each phase names the last step completed; the
/// order is fixed and never runs backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Phase {
    /// Ten cards dealt, five to each side.
    Dealt,
    /// The player's replacement has been applied.
    PlayerReplacing,
    /// The dealer's replacement has been applied.
    DealerReplacing,
    /// Both hands frozen and classified.
    Evaluated,
    /// Verdict emitted. Terminal.
    Compared,
}

impl Phase {
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Dealt => "dealt",
            Phase::PlayerReplacing => "player replacing",
            Phase::DealerReplacing => "dealer replacing",
            Phase::Evaluated => "evaluated",
            Phase::Compared => "compared",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("round is {actual}, expected {expected}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Final result of a compared round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundOutcome {
    pub verdict: Verdict,
    pub player: HandEvaluation,
    pub dealer: HandEvaluation,
    pub player_replaced: usize,
    pub dealer_replaced: usize,
}

/// One deal of five-card draw, from a fresh deck to a verdict.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    player_discards: DiscardSet,
    dealer_discards: DiscardSet,
    evaluations: Option<(HandEvaluation, HandEvaluation)>,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Deal ten cards from the front of `deck`: the first five to the player,
    /// the next five to the dealer.
    pub fn deal(deck: Deck) -> Result<Self, RoundError> {
        let (player, dealer, deck) = engine::deal(deck)?;
        log::debug!("dealt player [{player}] dealer [{dealer}], {} left", deck.len());
        Ok(Self {
            deck,
            player,
            dealer,
            phase: Phase::Dealt,
            player_discards: DiscardSet::empty(),
            dealer_discards: DiscardSet::empty(),
            evaluations: None,
            outcome: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Cards still in the deck.
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn player_discards(&self) -> DiscardSet {
        self.player_discards
    }

    pub fn dealer_discards(&self) -> DiscardSet {
        self.dealer_discards
    }

    /// `(player, dealer)` once evaluated.
    pub fn evaluations(&self) -> Option<(HandEvaluation, HandEvaluation)> {
        self.evaluations
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Compared
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), RoundError> {
        if self.phase != expected {
            return Err(RoundError::WrongPhase { expected, actual: self.phase });
        }
        Ok(())
    }

    /// Replace the player's chosen slots. An empty set stands pat.
    pub fn replace_player(&mut self, discards: DiscardSet) -> Result<(), RoundError> {
        self.expect_phase(Phase::Dealt)?;
        self.player.replace(&discards, &mut self.deck)?;
        log::debug!("player replaced {:?} -> [{}]", discards.to_vec(), self.player);
        self.player_discards = discards;
        self.phase = Phase::PlayerReplacing;
        Ok(())
    }

    /// Ask `agent` for the dealer's discards and apply them.
    pub fn replace_dealer(&mut self, agent: &mut dyn DrawAgent) -> Result<(), RoundError> {
        self.expect_phase(Phase::PlayerReplacing)?;
        let discards = agent.choose_discards(&self.dealer);
        self.dealer.replace(&discards, &mut self.deck)?;
        log::debug!("dealer replaced {:?} -> [{}]", discards.to_vec(), self.dealer);
        self.dealer_discards = discards;
        self.phase = Phase::DealerReplacing;
        Ok(())
    }

    /// Freeze and classify both hands, returning `(player, dealer)`.
    pub fn evaluate(&mut self) -> Result<(HandEvaluation, HandEvaluation), RoundError> {
        self.expect_phase(Phase::DealerReplacing)?;
        let evals = (classify(&self.player), classify(&self.dealer));
        self.evaluations = Some(evals);
        self.phase = Phase::Evaluated;
        Ok(evals)
    }

    pub fn compare(&mut self) -> Result<RoundOutcome, RoundError> {
        self.expect_phase(Phase::Evaluated)?;
        let Some((player, dealer)) = self.evaluations else {
            return Err(RoundError::WrongPhase { expected: Phase::Evaluated, actual: self.phase });
        };
        let outcome = RoundOutcome {
            verdict: Verdict::from_ordering(compare(&player, &dealer)),
            player,
            dealer,
            player_replaced: self.player_discards.len(),
            dealer_replaced: self.dealer_discards.len(),
        };
        self.outcome = Some(outcome);
        self.phase = Phase::Compared;
        Ok(outcome)
    }

    /// Run every remaining phase from `Dealt` to `Compared`.
    pub fn play_out(
        &mut self,
        player_discards: DiscardSet,
        dealer: &mut dyn DrawAgent,
    ) -> Result<RoundOutcome, RoundError> {
        self.replace_player(player_discards)?;
        self.replace_dealer(dealer)?;
        self.evaluate()?;
        self.compare()
    }
}

/// Running tallies across rounds, kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub total: u64,
    pub player_wins: u64,
    pub dealer_wins: u64,
    pub ties: u64,
}

impl GameStats {
    pub fn record(&mut self, verdict: Verdict) {
        self.total += 1;
        match verdict {
            Verdict::PlayerWins => self.player_wins += 1,
            Verdict::DealerWins => self.dealer_wins += 1,
            Verdict::Tie => self.ties += 1,
        }
    }

    /// Player win percentage, 0.0 before any round.
    pub fn win_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.player_wins as f64 * 100.0 / self.total as f64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// Fixed seed for reproducible sessions; entropy when `None`.
    pub seed: Option<u64>,
    pub dealer: DealerConfig,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dealer(mut self, dealer: DealerConfig) -> Self {
        self.dealer = dealer;
        self
    }
}

/// A session against the dealer: one round at a time plus running stats.
#[derive(Debug)]
pub struct Game {
    rng: ChaCha8Rng,
    dealer: DealerAgent,
    stats: GameStats,
    round: Round,
    round_no: u64,
}

impl Game {
    /// Start a session with its first round already dealt.
    pub fn new(config: GameConfig) -> Result<Self, RoundError> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let round = Round::deal(Deck::new_shuffled(&mut rng))?;
        Ok(Self {
            rng,
            dealer: DealerAgent::new(config.dealer),
            stats: GameStats::default(),
            round,
            round_no: 1,
        })
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// 1-based number of the current round.
    pub fn round_no(&self) -> u64 {
        self.round_no
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn dealer_config(&self) -> &DealerConfig {
        self.dealer.policy().config()
    }

    /// Takes effect from the dealer's next draw.
    pub fn set_dealer_config(&mut self, config: DealerConfig) {
        log::info!("dealer config changed: {config:?}");
        self.dealer.set_config(config);
    }

    /// Why the dealer drew what it did in the latest round.
    pub fn last_dealer_reason(&self) -> Option<DrawReason> {
        self.dealer.last_reason()
    }

    /// Abandon the current round and deal a new one from a brand-new deck.
    pub fn new_round(&mut self) -> Result<&Round, RoundError> {
        self.round = Round::deal(Deck::new_shuffled(&mut self.rng))?;
        self.round_no += 1;
        Ok(&self.round)
    }

    /// Apply the player's discards, let the dealer draw, compare, and record.
    pub fn finish_round(&mut self, player_discards: DiscardSet) -> Result<RoundOutcome, RoundError> {
        let outcome = self.round.play_out(player_discards, &mut self.dealer)?;
        self.stats.record(outcome.verdict);
        log::info!(
            "round {}: {} ({} vs {})",
            self.round_no,
            outcome.verdict,
            outcome.player,
            outcome.dealer
        );
        Ok(outcome)
    }

    /// Clear the tallies and start over with a fresh round.
    pub fn reset_stats(&mut self) -> Result<(), RoundError> {
        self.stats.reset();
        self.round_no = 0;
        self.new_round()?;
        Ok(())
    }
}
