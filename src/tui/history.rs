//! Move list and sort-order selector.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use crate::{EntryKind, MoveEntry, SortOrder};

/// Draws the two-option sort selector.
///
/// Returns the clickable area of each option.
pub fn draw_sort_selector(
    frame: &mut Frame,
    area: Rect,
    selected: SortOrder,
    focused: bool,
) -> Vec<(SortOrder, Rect)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Order")
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    let mut options = Vec::new();
    let mut x = inner.x + 1;
    spans.push(Span::raw(" "));
    for order in SortOrder::iter() {
        let (marker, style) = if order == selected {
            ("(•) ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        } else {
            ("( ) ", Style::default())
        };
        let option = Span::styled(format!("{marker}{}", order.label()), style);
        let width = option.width() as u16;
        options.push((order, Rect::new(x, inner.y, width, 1).intersection(inner)));
        x += width + 3;
        spans.push(option);
        spans.push(Span::raw("   "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    options
}

/// Draws the move list in the order given.
///
/// `selected` is the move number under the keyboard highlight, if the list
/// has focus. Without it the list scrolls to keep `current` in view.
/// Returns the area of each visible entry with its move number.
pub fn draw_move_list(
    frame: &mut Frame,
    area: Rect,
    entries: &[MoveEntry],
    selected: Option<usize>,
    current: usize,
    sort_order: SortOrder,
) -> Vec<(usize, Rect)> {
    let title = match sort_order {
        SortOrder::Ascending => "Moves",
        SortOrder::Descending => "Moves (reversed)",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style(selected.is_some()));
    let inner = block.inner(area);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let ordinal = Span::styled(
                format!("{:>2}. ", entry.ordinal()),
                Style::default().fg(Color::DarkGray),
            );
            let label = match entry.kind {
                EntryKind::Button => Span::styled(
                    format!("[ {} ]", entry.label),
                    Style::default().fg(Color::Cyan),
                ),
                EntryKind::Text => Span::styled(
                    entry.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            };
            ListItem::new(Line::from(vec![ordinal, label]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let index_of = |n: usize| entries.iter().position(|e| e.number == n);
    let mut state = ListState::default();
    match selected.and_then(index_of) {
        Some(index) => state.select(Some(index)),
        None => {
            let visible = (inner.height as usize).max(1);
            let index = index_of(current).unwrap_or(0);
            *state.offset_mut() = (index + 1).saturating_sub(visible);
        }
    }
    frame.render_stateful_widget(list, area, &mut state);

    entries
        .iter()
        .enumerate()
        .skip(state.offset())
        .take(inner.height as usize)
        .map(|(i, entry)| {
            let y = inner.y + (i - state.offset()) as u16;
            (entry.number, Rect::new(inner.x, y, inner.width, 1))
        })
        .collect()
}

/// Returns the hit-tested value whose area contains the coordinate.
pub fn hit<T: Copy>(areas: &[(T, Rect)], column: u16, row: u16) -> Option<T> {
    let point = ratatui::layout::Position::new(column, row);
    areas
        .iter()
        .find(|(_, area)| area.contains(point))
        .map(|(value, _)| *value)
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}
