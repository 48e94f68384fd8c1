//! Agents: who decides which cards to replace.
//!
//! A round asks a [`DrawAgent`] for a discard set. The human side is fed by the
//! front end through [`DrawAgent::receive`]; the dealer side runs the fixed
//! [`DealerPolicy`] table. Agents only pick slots; the round does the drawing.

use crate::hand::{DiscardSet, Hand};

mod dealer;

pub use dealer::{choose_dealer_discards, DealerConfig, DealerPolicy, DrawReason};

/// Kinds of agents that can sit on either side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Dealer,
}

/// Chooses discard slots for a hand.
pub trait DrawAgent {
    fn choose_discards(&mut self, hand: &Hand) -> DiscardSet;
    /// The kind of this agent (human, dealer).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive a selection from the host; default is to ignore it.
    fn receive(&mut self, _discards: DiscardSet) -> bool {
        false
    }
}

/// Replays whatever selection the host last handed over, then forgets it.
/// With nothing pending the human stands pat.
#[derive(Debug, Default)]
pub struct HumanAgent {
    pending: Option<DiscardSet>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<DiscardSet> {
        self.pending
    }
}

impl DrawAgent for HumanAgent {
    fn choose_discards(&mut self, _hand: &Hand) -> DiscardSet {
        self.pending.take().unwrap_or_default()
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn receive(&mut self, discards: DiscardSet) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(discards);
        true
    }
}

/// The dealer: a [`DealerPolicy`] plus the reason behind its latest draw.
#[derive(Debug, Clone, Default)]
pub struct DealerAgent {
    policy: DealerPolicy,
    last_reason: Option<DrawReason>,
}

impl DealerAgent {
    pub fn new(config: DealerConfig) -> Self {
        Self { policy: DealerPolicy::new(config), last_reason: None }
    }

    pub fn policy(&self) -> &DealerPolicy {
        &self.policy
    }

    pub fn set_config(&mut self, config: DealerConfig) {
        self.policy.set_config(config);
    }

    pub fn last_reason(&self) -> Option<DrawReason> {
        self.last_reason
    }
}

impl DrawAgent for DealerAgent {
    fn choose_discards(&mut self, hand: &Hand) -> DiscardSet {
        let (discards, reason) = self.policy.decide(hand);
        self.last_reason = Some(reason);
        discards
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Dealer
    }
}
