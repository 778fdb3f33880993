//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

pub mod grid;
pub mod palette;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, Screen};
use grid::{render_grid, Card};
use palette::Palette;

pub const TITLE: &str = "Kaomoji Finder";
pub const SUBTITLE: &str = "颜文字检索和发现";
pub const EMPTY_FLIP: &str = "(╯°□°）╯︵ ┻━┻";
pub const EMPTY_TITLE: &str = "No Kaomoji Found!";
pub const EMPTY_HINT: &str = "Try a different search or category.";

const SEARCH_PLACEHOLDER: &str = "Search by kaomoji or tag...";

/// Render the application UI
///
/// `search` is the stateful search box owned by the main loop.
pub fn render(frame: &mut Frame, state: &AppState, search: &TextArea<'_>) {
    let area = frame.area();
    let palette = Palette::for_theme(state.theme, state.config.colors_enabled);

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Status line
        ])
        .split(area);

    render_header(frame, chunks[0], state, &palette);
    match state.screen() {
        Screen::Listing => render_listing(frame, chunks[1], state, search, &palette),
        Screen::Detail => render_detail(frame, chunks[1], state, &palette),
    }
    render_status_bar(frame, chunks[2], state, &palette);

    if state.help_visible {
        render_help_overlay(frame, area, &palette);
    }
}

/// Apply the current palette to the search box
pub fn style_search_box(search: &mut TextArea<'_>, state: &AppState) {
    let palette = Palette::for_theme(state.theme, state.config.colors_enabled);
    search.set_block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );
    search.set_style(palette.base());
    search.set_cursor_line_style(Style::default());
    search.set_placeholder_text(SEARCH_PLACEHOLDER);
    search.set_placeholder_style(palette.muted());
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(area);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(TITLE, palette.accent()),
        Span::raw("  "),
        Span::styled(SUBTITLE, palette.muted()),
    ]))
    .block(block.clone());
    frame.render_widget(title, chunks[0]);

    let indicator = if state.theme.is_dark() {
        "☾ dark (F2)"
    } else {
        "☀ light (F2)"
    };
    let theme = Paragraph::new(Span::styled(indicator, palette.muted()))
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(theme, chunks[1]);
}

fn render_listing(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    search: &TextArea<'_>,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Length(3), // Category bar
            Constraint::Min(3),    // Results
        ])
        .split(area);

    frame.render_widget(search, chunks[0]);
    render_category_bar(frame, chunks[1], state, palette);

    let entries = state.grid_entries();
    let block = Block::default()
        .title(format!(" {} kaomoji ", entries.len()))
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(chunks[2]);
    frame.render_widget(block, chunks[2]);

    if entries.is_empty() {
        render_empty_state(frame, inner, palette);
        return;
    }

    let cards: Vec<Card<'_>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| Card {
            entry,
            selected: index == state.cursor.listing,
            highlighted: false,
            copied: state.is_card_copied(index, entry),
        })
        .collect();
    render_grid(
        frame,
        inner,
        &cards,
        state.grid_columns,
        state.cursor.listing,
        palette,
    );
}

fn render_category_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let names = state.dataset.category_names();
    let selected = names
        .iter()
        .position(|name| *name == state.view.selected_category.name())
        .unwrap_or(0);

    let tabs = Tabs::new(names)
        .select(selected)
        .style(palette.muted())
        .highlight_style(palette.accent().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .title(" Category (Tab / Shift+Tab) ")
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );
    frame.render_widget(tabs, area);
}

fn render_empty_state(frame: &mut Frame, area: Rect, palette: &Palette) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(EMPTY_FLIP, palette.accent())),
        Line::from(Span::styled(
            EMPTY_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(EMPTY_HINT, palette.muted())),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_detail(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let Some(entry) = state.view.open_entry() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Entry card
            Constraint::Min(3),    // More from category
        ])
        .split(area);

    let button = if state.is_detail_copied() {
        Span::styled(
            "[ Copied! ]",
            Style::default()
                .fg(palette.copied)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ Copy to Clipboard ]", palette.accent())
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            entry.symbol.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![button, Span::styled("  (c)", palette.muted())]),
        Line::from(""),
    ];
    if !entry.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags: ", palette.muted()),
            Span::raw(entry.tag_line()),
        ]));
    }

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" ← Back (Esc) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(card, chunks[0]);

    let title = match state.related_category() {
        Some(name) => format!(" More from {} ", name),
        None => " More ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let entries = state.grid_entries();
    let cards: Vec<Card<'_>> = entries
        .iter()
        .enumerate()
        .map(|(index, related)| Card {
            entry: related,
            selected: index == state.cursor.related,
            highlighted: *related == entry,
            copied: state.is_card_copied(index, related),
        })
        .collect();
    render_grid(
        frame,
        inner,
        &cards,
        state.grid_columns,
        state.cursor.related,
        palette,
    );
}

/// Render status line with the current message or key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let text = match (&state.status.message, state.screen()) {
        (Some(message), _) => Span::styled(message.as_str(), palette.accent()),
        (None, Screen::Listing) => Span::styled(
            "Type to search | Tab: category | Arrows: move | Enter: copy & open | F1: help",
            palette.muted(),
        ),
        (None, Screen::Detail) => Span::styled(
            "c: copy | Enter: copy & open | Esc: back | F1: help",
            palette.muted(),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(text)), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+C / Ctrl+Q - Quit"),
        Line::from("  F1              - Toggle help"),
        Line::from("  F2              - Toggle dark/light theme"),
        Line::from("  Tab / Shift+Tab - Next / previous category"),
        Line::from("  Arrows          - Move between cards"),
        Line::from("  Enter           - Copy card, then open it"),
        Line::from(""),
        Line::from("Listing:"),
        Line::from("  Typing          - Search symbols and tags"),
        Line::from("  Esc             - Clear search"),
        Line::from(""),
        Line::from("Detail:"),
        Line::from("  c               - Copy to clipboard"),
        Line::from("  Esc / Backspace - Back to listing"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .style(palette.base())
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
