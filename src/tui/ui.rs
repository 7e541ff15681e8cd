use super::app::{App, Field};
use activity_board::Activity;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Title field
                Constraint::Length(3), // Description field
                Constraint::Length(3), // Image URL field
                Constraint::Min(1),    // Card list grows
                Constraint::Length(1), // Key help
            ]
            .as_ref(),
        )
        .split(f.area());

    // Entry form
    for field in Field::ALL {
        let focused = app.focus == field && app.notice.is_none();
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            // Invisible cursor on unfocused fields
            Style::default()
        };

        app.fields[field.index()].set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label())
                .border_style(border),
        );
        app.fields[field.index()].set_cursor_style(cursor);
        f.render_widget(&app.fields[field.index()], chunks[field.index()]);
    }

    // Card list
    draw_cards(f, app, chunks[3]);

    // Key help
    let help = Paragraph::new("Enter add · Tab next · ↑/↓ select · Ctrl+D delete · Esc quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);

    // Notification Popup
    if let Some(message) = &app.notice {
        draw_notice(f, message);
    }
}

fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .repository
        .list()
        .iter()
        .map(|activity| ListItem::new(card_text(activity)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Activities ({}) ", app.repository.len())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    state.select(app.selected);

    f.render_stateful_widget(list, area, &mut state);
}

/// One card of the list: a bold title, the image slot, the free-form
/// description, and a blank spacer before the next card.
pub fn card_text(activity: &Activity) -> Text<'_> {
    let title = Line::from(Span::styled(
        activity.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    // Terminals have no inline pictures; show the alt text and the source.
    let image = Line::from(vec![
        Span::styled(
            format!("[{}] ", activity.title),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            activity.image_url.as_str(),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    let description = Line::from(activity.description.as_str());

    Text::from(vec![title, image, description, Line::default()])
}

fn draw_notice(f: &mut Frame, message: &str) {
    let hint = "Enter to dismiss";

    // Center the popup, clamped to the screen
    let width = (message.len().max(hint.len()) as u16 + 4).min(f.area().width);
    let height = 4u16.min(f.area().height);
    let area = Rect::new(
        f.area().width.saturating_sub(width) / 2,
        f.area().height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, area); // Clear underlying text

    let notice = Paragraph::new(vec![
        Line::from(message),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Notice ")
            .border_style(Style::default().fg(Color::Red)),
    );

    f.render_widget(notice, area);
}
