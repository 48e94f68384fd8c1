use draw_poker::agents::{DealerAgent, DrawAgent, HumanAgent};
use draw_poker::cards::parse_cards;
use draw_poker::deck::{Deck, DECK_SIZE};
use draw_poker::evaluator::{Category, Verdict};
use draw_poker::game::{Game, GameConfig, Phase, Round, RoundError};
use draw_poker::hand::{DiscardSet, Hand};

/// A full deck with `top` on top, the rest in standard order.
fn stacked(top: &str) -> Deck {
    let top = parse_cards(top).expect("cards");
    let rest = Deck::standard().cards().filter(|c| !top.contains(c)).collect::<Vec<_>>();
    Deck::from_cards(top.into_iter().chain(rest)).expect("full deck")
}

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

// player: trip kings; dealer: the wheel; then the replacement cards
const DEAL: &str = "Ks Kd Kc 5h 2s As 2d 3c 4h 5s Kh 9c 6d";

#[test]
fn deal_is_block_assigned() {
    let round = Round::deal(stacked(DEAL)).expect("deal");
    assert_eq!(round.phase(), Phase::Dealt);
    assert_eq!(round.player_hand(), &hand("Ks Kd Kc 5h 2s"));
    assert_eq!(round.dealer_hand(), &hand("As 2d 3c 4h 5s"));
    assert_eq!(round.deck_remaining(), DECK_SIZE - 10);
}

#[test]
fn phases_advance_in_order() {
    let mut round = Round::deal(stacked(DEAL)).expect("deal");
    let mut dealer = DealerAgent::default();

    round.replace_player(DiscardSet::try_from_slots(&[3, 4]).expect("slots")).expect("player");
    assert_eq!(round.phase(), Phase::PlayerReplacing);
    assert_eq!(round.player_hand(), &hand("Ks Kd Kc Kh 9c"));

    round.replace_dealer(&mut dealer).expect("dealer");
    assert_eq!(round.phase(), Phase::DealerReplacing);
    assert_eq!(round.dealer_discards().to_vec(), vec![0]);
    assert_eq!(round.dealer_hand(), &hand("6d 2d 3c 4h 5s"));

    let (player, dealer_eval) = round.evaluate().expect("evaluate");
    assert_eq!(round.phase(), Phase::Evaluated);
    assert_eq!(player.category, Category::FourOfAKind);
    assert_eq!(dealer_eval.category, Category::Straight);

    let outcome = round.compare().expect("compare");
    assert!(round.is_complete());
    assert_eq!(outcome.verdict, Verdict::PlayerWins);
    assert_eq!((outcome.player_replaced, outcome.dealer_replaced), (2, 1));
    assert_eq!(round.deck_remaining(), DECK_SIZE - 13);
    assert_eq!(round.outcome(), Some(outcome));
}

#[test]
fn out_of_order_steps_are_rejected() {
    let mut round = Round::deal(stacked(DEAL)).expect("deal");
    let mut dealer = DealerAgent::default();

    assert_eq!(
        round.evaluate().err(),
        Some(RoundError::WrongPhase { expected: Phase::DealerReplacing, actual: Phase::Dealt })
    );
    assert!(matches!(
        round.replace_dealer(&mut dealer),
        Err(RoundError::WrongPhase { expected: Phase::PlayerReplacing, .. })
    ));

    round.replace_player(DiscardSet::empty()).expect("stand pat");
    assert!(matches!(
        round.replace_player(DiscardSet::empty()),
        Err(RoundError::WrongPhase { expected: Phase::Dealt, actual: Phase::PlayerReplacing })
    ));

    finish(&mut round, &mut dealer);
    assert!(matches!(
        round.compare(),
        Err(RoundError::WrongPhase { expected: Phase::Evaluated, actual: Phase::Compared })
    ));
}

fn finish(round: &mut Round, dealer: &mut dyn DrawAgent) {
    round.replace_dealer(dealer).expect("dealer");
    round.evaluate().expect("evaluate");
    round.compare().expect("compare");
}

#[test]
fn human_agent_can_drive_the_dealer_seat() {
    let mut round = Round::deal(stacked(DEAL)).expect("deal");
    let mut human = HumanAgent::new();
    assert!(human.receive(DiscardSet::empty()));
    let outcome = round.play_out(DiscardSet::empty(), &mut human).expect("round");
    assert!(round.dealer_discards().is_empty());
    assert_eq!(outcome.dealer.category, Category::Straight);
    assert_eq!(outcome.verdict, Verdict::DealerWins);
}

#[test]
fn a_round_uses_at_most_sixteen_cards() {
    let mut game = Game::new(GameConfig::default().with_seed(99)).expect("game");
    for _ in 0..50 {
        let all = DiscardSet::try_from_slots(&[0, 1, 2]).expect("slots");
        game.finish_round(all).expect("round");
        assert!(game.round().deck_remaining() >= DECK_SIZE - 16);
        game.new_round().expect("next");
    }
}

#[test]
fn seeded_games_replay_identically() {
    let mut a = Game::new(GameConfig::default().with_seed(2024)).expect("game");
    let mut b = Game::new(GameConfig::default().with_seed(2024)).expect("game");
    for _ in 0..10 {
        assert_eq!(a.round().player_hand(), b.round().player_hand());
        assert_eq!(a.round().dealer_hand(), b.round().dealer_hand());
        let pick = DiscardSet::try_from_slots(&[1]).expect("slots");
        assert_eq!(a.finish_round(pick).expect("a"), b.finish_round(pick).expect("b"));
        a.new_round().expect("a next");
        b.new_round().expect("b next");
    }
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn stats_track_every_finished_round() {
    let mut game = Game::new(GameConfig::default().with_seed(3)).expect("game");
    assert_eq!(game.round_no(), 1);
    for _ in 0..20 {
        game.finish_round(DiscardSet::empty()).expect("round");
        game.new_round().expect("next");
    }
    let stats = *game.stats();
    assert_eq!(stats.total, 20);
    assert_eq!(stats.player_wins + stats.dealer_wins + stats.ties, 20);
    assert_eq!(game.round_no(), 21);

    game.reset_stats().expect("reset");
    assert_eq!(game.stats().total, 0);
    assert_eq!(game.round_no(), 1);
    assert_eq!(game.round().phase(), Phase::Dealt);
}

#[test]
fn finished_round_cannot_be_drawn_again() {
    let mut game = Game::new(GameConfig::default().with_seed(8)).expect("game");
    game.finish_round(DiscardSet::empty()).expect("round");
    assert!(matches!(
        game.finish_round(DiscardSet::empty()),
        Err(RoundError::WrongPhase { expected: Phase::Dealt, actual: Phase::Compared })
    ));
    assert_eq!(game.stats().total, 1);
    assert!(game.last_dealer_reason().is_some());
}
