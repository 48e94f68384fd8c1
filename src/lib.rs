//! draw-poker: five-card draw against a rule-based dealer
//!
//! Goals:
//! - Exact hand classification with full tie-breaks, wheel straight included
//! - A deterministic, configurable dealer draw policy
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: judge two hands
//! ```
//! use draw_poker::evaluator::{classify, judge, Category, Verdict};
//! use draw_poker::hand::Hand;
//!
//! let player: Hand = "9s 9d 9c 2h 2s".parse().unwrap();
//! let dealer: Hand = "Ks Qd Jc 10h 9h".parse().unwrap();
//!
//! assert_eq!(classify(&player).category, Category::FullHouse);
//! assert_eq!(judge(&player, &dealer), Verdict::PlayerWins);
//! ```
//!
//! ## Quick start: play a round
//! ```
//! use draw_poker::game::{Game, GameConfig};
//! use draw_poker::hand::DiscardSet;
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7)).unwrap();
//! let discards = DiscardSet::try_from_slots(&[3, 4]).unwrap();
//! let outcome = game.finish_round(discards).unwrap();
//! assert_eq!(outcome.player_replaced, 2);
//! assert_eq!(game.stats().total, 1);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin draw-poker
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
