use crate::agents::DealerConfig;

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    FlushStandPat,
    StraightStandPat,
    StraightDraws,
}

const MENU_ITEMS: [MenuItem; 3] =
    [MenuItem::FlushStandPat, MenuItem::StraightStandPat, MenuItem::StraightDraws];

// Below the lowest possible top card every flush or straight stands pat;
// at the ace nothing does.
const FLUSH_RANGE: (u8, u8) = (6, 14);
const STRAIGHT_RANGE: (u8, u8) = (4, 14);

fn threshold_label(value: u8, min: u8) -> String {
    if value < min + 1 {
        "always stand".to_string()
    } else if value >= 14 {
        "never stand".to_string()
    } else {
        format!("stand above {value}")
    }
}

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::FlushStandPat => format!(
                "Dealer flush: {}",
                threshold_label(app.cfg_flush_stand_pat, FLUSH_RANGE.0)
            ),
            MenuItem::StraightStandPat => format!(
                "Dealer straight: {}",
                threshold_label(app.cfg_straight_stand_pat, STRAIGHT_RANGE.0)
            ),
            MenuItem::StraightDraws => format!(
                "Dealer straight draws: {}",
                if app.cfg_straight_draws { "on" } else { "off" }
            ),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::FlushStandPat => {
                app.cfg_flush_stand_pat = (app.cfg_flush_stand_pat + 1).min(FLUSH_RANGE.1);
            }
            MenuItem::StraightStandPat => {
                app.cfg_straight_stand_pat =
                    (app.cfg_straight_stand_pat + 1).min(STRAIGHT_RANGE.1);
            }
            MenuItem::StraightDraws => app.cfg_straight_draws = !app.cfg_straight_draws,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::FlushStandPat => {
                app.cfg_flush_stand_pat =
                    app.cfg_flush_stand_pat.saturating_sub(1).max(FLUSH_RANGE.0);
            }
            MenuItem::StraightStandPat => {
                app.cfg_straight_stand_pat =
                    app.cfg_straight_stand_pat.saturating_sub(1).max(STRAIGHT_RANGE.0);
            }
            MenuItem::StraightDraws => app.cfg_straight_draws = !app.cfg_straight_draws,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        let current = *self.game.dealer_config();
        self.cfg_flush_stand_pat = current.flush_stand_pat;
        self.cfg_straight_stand_pat = current.straight_stand_pat;
        self.cfg_straight_draws = current.straight_draws;
        self.scene = Scene::Menu;
    }

    /// Push the edited dealer config into the game. The round in progress
    /// keeps its cards; the new table applies from the dealer's next draw.
    pub fn apply_menu(&mut self) {
        let config = DealerConfig::default()
            .with_flush_stand_pat(self.cfg_flush_stand_pat)
            .with_straight_stand_pat(self.cfg_straight_stand_pat)
            .with_straight_draws(self.cfg_straight_draws);
        self.game.set_dealer_config(config);
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
