use crate::game::{Game, GameConfig, Phase, RoundError, RoundOutcome};
use crate::hand::{DiscardSet, HAND_SIZE, MAX_DISCARDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Table,
    Menu,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    ToggleSlot(usize),
    Draw,
    NextRound,
    ResetStats,
    ToggleMenu,
    ToggleHelp,
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    /// Slots the player has marked for replacement this round.
    pub selection: DiscardSet,
    // Dealer config being edited in the menu
    pub menu_index: usize,
    pub cfg_flush_stand_pat: u8,
    pub cfg_straight_stand_pat: u8,
    pub cfg_straight_draws: bool,
    help_open: bool,
    last_outcome: Option<RoundOutcome>,
    notice: Option<String>,
    error: Option<String>,
}

impl AppState {
    pub fn new(config: GameConfig) -> Result<Self, RoundError> {
        let game = Game::new(config)?;
        Ok(Self {
            scene: Scene::Table,
            game,
            selection: DiscardSet::empty(),
            menu_index: 0,
            cfg_flush_stand_pat: config.dealer.flush_stand_pat,
            cfg_straight_stand_pat: config.dealer.straight_stand_pat,
            cfg_straight_draws: config.dealer.straight_draws,
            help_open: false,
            last_outcome: None,
            notice: None,
            error: None,
        })
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    /// Outcome of the round on the table, once it has been compared.
    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The player may still pick cards and draw.
    pub fn can_draw(&self) -> bool {
        self.scene == Scene::Table && self.game.round().phase() == Phase::Dealt
    }

    /// Dealer cards are face down until the verdict.
    pub fn dealer_revealed(&self) -> bool {
        self.game.round().is_complete()
    }

    fn report(&mut self, result: Result<(), RoundError>) -> bool {
        match result {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                log::warn!("{err}");
                self.error = Some(err.to_string());
                false
            }
        }
    }

    fn toggle_slot(&mut self, slot: usize) -> bool {
        if !self.can_draw() || slot >= HAND_SIZE {
            return false;
        }
        if self.selection.toggle(slot) {
            self.notice = None;
            return true;
        }
        self.notice = Some(format!("At most {MAX_DISCARDS} cards can be replaced"));
        false
    }

    fn draw(&mut self) -> bool {
        if !self.can_draw() {
            return false;
        }
        let result = self.game.finish_round(self.selection).map(|outcome| {
            self.last_outcome = Some(outcome);
            self.notice = self.game.last_dealer_reason().map(|r| {
                let n = outcome.dealer_replaced;
                format!("Dealer {r} ({n} card{})", if n == 1 { "" } else { "s" })
            });
        });
        self.report(result)
    }

    fn next_round(&mut self) -> bool {
        if self.scene != Scene::Table || !self.game.round().is_complete() {
            return false;
        }
        let result = self.game.new_round().map(|_| ());
        self.selection = DiscardSet::empty();
        self.last_outcome = None;
        self.notice = None;
        self.report(result)
    }

    fn reset_stats(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        let result = self.game.reset_stats();
        self.selection = DiscardSet::empty();
        self.last_outcome = None;
        self.notice = Some("Statistics reset".to_string());
        self.report(result)
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::ToggleSlot(slot) => self.toggle_slot(slot),
            InputAction::Draw => self.draw(),
            InputAction::NextRound => self.next_round(),
            InputAction::ResetStats => self.reset_stats(),
        }
    }
}
