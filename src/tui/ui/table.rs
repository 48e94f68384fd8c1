use crate::cards::Card;
use crate::evaluator::{classify, Verdict};
use crate::hand::Hand;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_slots, centered_box, inner};

const CARD_WIDTH: u16 = 9;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let status_height: u16 = 2 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Min(12),               // table + stats
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let round = app.game.round();
    let header = Paragraph::new(Line::from(format!(
        "Round {}  •  {}  •  {} cards in deck",
        app.game.round_no(),
        round.phase(),
        round.deck_remaining()
    )))
    .block(Block::default().title("draw-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(26)])
        .split(chunks[1]);
    let hands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(6), Constraint::Min(3)])
        .split(body[0]);

    draw_dealer(f, hands[0], app);
    draw_player(f, hands[1], app);
    draw_result(f, hands[2], app);
    draw_stats(f, body[1], app);
    draw_status(f, chunks[2], app);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_dealer(f: &mut Frame, area: Rect, app: &AppState) {
    let round = app.game.round();
    let revealed = app.dealer_revealed();
    let title = if revealed {
        format!("Dealer: {}", classify(round.dealer_hand()))
    } else {
        "Dealer".to_string()
    };
    f.render_widget(Block::default().title(title).borders(Borders::ALL), area);
    let replaced = round.dealer_discards();
    for (slot, rect) in card_slots(inner(area), CARD_WIDTH).into_iter().enumerate() {
        let card = round.dealer_hand().slot(slot).filter(|_| revealed);
        let border = (revealed && replaced.contains(slot)).then_some(Color::DarkGray);
        render_card_widget(f, rect, card, border, None);
    }
}

fn draw_player(f: &mut Frame, area: Rect, app: &AppState) {
    let round = app.game.round();
    let hand: &Hand = round.player_hand();
    let title = format!("You: {}", classify(hand));
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if app.can_draw() {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, area);
    let marked = if app.can_draw() { app.selection } else { round.player_discards() };
    for (slot, rect) in card_slots(inner(area), CARD_WIDTH).into_iter().enumerate() {
        let border = if !marked.contains(slot) {
            None
        } else if app.can_draw() {
            Some(Color::Yellow)
        } else {
            Some(Color::DarkGray)
        };
        let label = format!("{}", slot + 1);
        render_card_widget(f, rect, hand.slot(slot), border, Some(&label));
    }
}

fn draw_result(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Result").borders(Borders::ALL);
    let lines = match app.last_outcome() {
        Some(outcome) => {
            let color = match outcome.verdict {
                Verdict::PlayerWins => Color::Green,
                Verdict::DealerWins => Color::Red,
                _ => Color::Yellow,
            };
            vec![
                Line::from(Span::styled(
                    outcome.verdict.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("You: {}", outcome.player)),
                Line::from(format!("Dealer: {}", outcome.dealer)),
            ]
        }
        None if app.can_draw() => vec![
            Line::from("Pick up to 3 cards with 1-5, then Enter to draw."),
            Line::from(Span::styled(
                "Enter with nothing selected stands pat.",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ],
        None => vec![Line::from("Press Space for the next round.")],
    };
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(para, area);
}

fn draw_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let stats = app.game.stats();
    let dealer = app.game.dealer_config();
    let dim = Style::default().add_modifier(Modifier::DIM);
    let lines = vec![
        Line::from(format!("Games:    {}", stats.total)),
        Line::from(Span::styled(
            format!("Wins:     {}", stats.player_wins),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Losses:   {}", stats.dealer_wins),
            Style::default().fg(Color::Red),
        )),
        Line::from(format!("Ties:     {}", stats.ties)),
        Line::from(format!("Win rate: {:.1}%", stats.win_rate())),
        Line::from(""),
        Line::from(Span::styled("Dealer", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(format!("flush > {}", dealer.flush_stand_pat), dim)),
        Line::from(Span::styled(format!("straight > {}", dealer.straight_stand_pat), dim)),
        Line::from(Span::styled(
            format!("draws: {}", if dealer.straight_draws { "on" } else { "off" }),
            dim,
        )),
    ];
    let para = Paragraph::new(lines).block(Block::default().title("Stats").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left: Vec<Line> = Vec::new();
    if let Some(err) = app.error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(notice) = app.notice() {
        left.push(Line::from(notice.to_string()));
    }
    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    left.push(Line::from(vec![
        Span::styled("1-5 select", action_style(app.can_draw())),
        Span::raw(" • "),
        Span::styled("Enter draw", action_style(app.can_draw())),
        Span::raw(" • "),
        Span::styled("Space next", action_style(app.dealer_revealed())),
    ]));

    let right = vec![Line::from(""), Line::from("R reset • M menu • ? help • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_help(f: &mut Frame) {
    let area = centered_box(48, 18, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- 1-5: mark / unmark a card (max 3)"),
        Line::from("- Enter or D: draw and show down"),
        Line::from("- Space: next round"),
        Line::from("- R: reset statistics"),
        Line::from(""),
        Line::from(Span::styled("Dealer settings:", bold)),
        Line::from("- M: open / close"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply, Esc: cancel"),
        Line::from(""),
        Line::from("Q quits. Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(c: Card) -> Style {
    if c.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<Card>,
    border: Option<Color>,
    label: Option<&str>,
) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    if let Some(label) = label {
        block = block.title(label.to_string());
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.face(), suit_style(c))),
        None => Line::from(Span::styled("▒▒", Style::default().fg(Color::Blue))),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
