use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(app, key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Map a key to an [`InputAction`]. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    if app.scene == Scene::Table && matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => Some(InputAction::MenuPrev),
            KeyCode::Down => Some(InputAction::MenuNext),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Some(InputAction::MenuInc),
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => Some(InputAction::MenuDec),
            KeyCode::Enter => Some(InputAction::MenuApply),
            KeyCode::Esc => Some(InputAction::MenuCancel),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(InputAction::ToggleMenu),
            _ => None,
        },
        Scene::Table => match code {
            KeyCode::Char(c @ '1'..='5') => Some(InputAction::ToggleSlot((c as u8 - b'1') as usize)),
            KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputAction::Draw),
            KeyCode::Char(' ') => Some(InputAction::NextRound),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::ResetStats),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(InputAction::ToggleMenu),
            _ => None,
        },
    };
    if let Some(action) = action {
        let _ = app.handle_input(action);
    }
    false
}
