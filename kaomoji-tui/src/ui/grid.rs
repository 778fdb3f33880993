//! Card grid shared by the listing and the "More from" section

use libkaomoji::Kaomoji;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::palette::Palette;

/// Card width in cells, borders included
pub const CARD_WIDTH: u16 = 24;

/// Card height in cells, borders included
pub const CARD_HEIGHT: u16 = 3;

/// How many cards fit across a terminal `width` cells wide
pub fn columns_for_width(width: u16) -> usize {
    usize::from((width.saturating_sub(2) / CARD_WIDTH).max(1))
}

/// First row to draw so that `cursor_row` stays on screen
pub fn first_visible_row(cursor_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    (cursor_row + 1).saturating_sub(visible_rows)
}

/// One card as the grid should draw it
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub entry: &'a Kaomoji,
    /// Under the cursor
    pub selected: bool,
    /// The entry open in the detail view
    pub highlighted: bool,
    /// Showing copy confirmation
    pub copied: bool,
}

pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    cards: &[Card<'_>],
    columns: usize,
    cursor: usize,
    palette: &Palette,
) {
    let columns = columns.max(1);
    let visible_rows = usize::from(area.height / CARD_HEIGHT);
    if visible_rows == 0 {
        return;
    }
    let first_row = first_visible_row(cursor / columns, visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= cards.len() {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (card, cell) in cards[start..].iter().take(columns).zip(cells.iter()) {
            render_card(frame, *cell, card, palette);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card<'_>, palette: &Palette) {
    let border_style = if card.copied {
        Style::default().fg(palette.copied)
    } else if card.selected {
        Style::default().fg(palette.accent)
    } else {
        palette.border()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if card.selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);
    if card.copied {
        block = block.title_bottom(Line::from(" Copied! ").centered());
    }

    let mut style = palette.base();
    if card.highlighted {
        style = style.bg(palette.highlight);
    }
    if card.selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    let symbol = Paragraph::new(Line::from(card.entry.symbol.as_str()).centered())
        .style(style)
        .block(block);
    frame.render_widget(symbol, area);
}
