use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_box, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_box(52, 11, f.area());
    let block = Block::default().title("Dealer settings").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(it, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Applies from the dealer's next draw",
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, inner(area));
}
