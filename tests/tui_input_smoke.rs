use crossterm::event::KeyCode;
use draw_poker::game::{GameConfig, Phase};
use draw_poker::tui::app::{AppState, InputAction, Scene};
use draw_poker::tui::controller::handle_key;

fn app() -> AppState {
    AppState::new(GameConfig::default().with_seed(21)).expect("app")
}

fn press(app: &mut AppState, keys: &[KeyCode]) {
    for &key in keys {
        assert!(!handle_key(app, key), "{key:?} should not quit");
    }
}

#[test]
fn select_draw_and_next_round() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('3')]);
    assert_eq!(app.selection.to_vec(), vec![0, 2]);
    press(&mut app, &[KeyCode::Char('3')]);
    assert_eq!(app.selection.to_vec(), vec![0]);

    press(&mut app, &[KeyCode::Enter]);
    assert!(app.dealer_revealed());
    assert_eq!(app.last_outcome().map(|o| o.player_replaced), Some(1));
    assert_eq!(app.game.stats().total, 1);
    assert!(app.notice().is_some_and(|n| n.starts_with("Dealer")));

    press(&mut app, &[KeyCode::Char(' ')]);
    assert_eq!(app.game.round_no(), 2);
    assert_eq!(app.game.round().phase(), Phase::Dealt);
    assert!(app.selection.is_empty());
    assert!(app.last_outcome().is_none());
}

#[test]
fn next_round_waits_for_the_showdown() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char(' ')]);
    assert_eq!(app.game.round_no(), 1);
    assert!(!app.handle_input(InputAction::NextRound));
}

#[test]
fn menu_edits_apply_only_on_enter() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('m')]);
    assert_eq!(app.scene, Scene::Menu);
    assert_eq!(app.menu_items_display().len(), 3);

    press(&mut app, &[KeyCode::Down, KeyCode::Char('+'), KeyCode::Esc]);
    assert_eq!(app.scene, Scene::Table);
    assert_eq!(app.game.dealer_config().straight_stand_pat, 5);

    press(&mut app, &[KeyCode::Char('m'), KeyCode::Down, KeyCode::Char('+')]);
    press(&mut app, &[KeyCode::Down, KeyCode::Right, KeyCode::Enter]);
    assert_eq!(app.scene, Scene::Table);
    assert_eq!(app.game.dealer_config().straight_stand_pat, 6);
    assert!(!app.game.dealer_config().straight_draws);
    assert_eq!(app.game.dealer_config().flush_stand_pat, 9);
}

#[test]
fn menu_values_are_clamped() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('m')]);
    for _ in 0..10 {
        press(&mut app, &[KeyCode::Char('+')]);
    }
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.game.dealer_config().flush_stand_pat, 14);
    assert!(app.menu_items_display()[0].ends_with("never stand"));
}

#[test]
fn table_keys_are_ignored_in_menu_and_help() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('m'), KeyCode::Char('1')]);
    assert!(app.selection.is_empty());
    press(&mut app, &[KeyCode::Esc, KeyCode::Char('?')]);
    assert!(app.help_open());
    press(&mut app, &[KeyCode::Char('2'), KeyCode::Enter]);
    assert!(app.selection.is_empty());
    assert_eq!(app.game.round().phase(), Phase::Dealt);
    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.help_open());
}

#[test]
fn reset_clears_stats_and_redeals() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter, KeyCode::Char(' '), KeyCode::Enter]);
    assert_eq!(app.game.stats().total, 2);
    press(&mut app, &[KeyCode::Char('r')]);
    assert_eq!(app.game.stats().total, 0);
    assert_eq!(app.game.round_no(), 1);
    assert!(app.can_draw());
}

#[test]
fn q_quits_from_any_scene() {
    let mut app = app();
    assert!(handle_key(&mut app, KeyCode::Char('q')));
    press(&mut app, &[KeyCode::Char('m')]);
    assert!(handle_key(&mut app, KeyCode::Char('Q')));
}
