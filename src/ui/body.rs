//! Table body: the four-branch render contract.

use crate::country::Country;
use crate::ui::fetch::FetchState;
use crate::ui::flag::flag_icon;
use crate::ui::table::{Column, DerivedView, ViewState};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub const EMPTY_MESSAGE: &str = "No results found";
pub const LOADING_MESSAGE: &str = "Loading countries...";

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Length(10),
    Constraint::Fill(2),
    Constraint::Length(14),
    Constraint::Fill(1),
];

/// What the body shows. Exactly one branch applies, checked in the order
/// Error, Loading, Empty, Populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyView<'a> {
    /// Fetch failed; overrides any previously loaded rows.
    Error(&'a str),
    /// Fetch still pending; carries the current spinner frame.
    Loading(&'static str),
    /// Fetch succeeded but the current page has no rows.
    Empty,
    Populated(&'a [Country]),
}

impl<'a> BodyView<'a> {
    pub fn resolve(fetch: &'a FetchState, derived: &'a DerivedView) -> Self {
        if let Some(message) = fetch.error_message() {
            BodyView::Error(message)
        } else if fetch.is_pending() {
            BodyView::Loading(fetch.spinner_frame())
        } else if derived.page_of_items.is_empty() {
            BodyView::Empty
        } else {
            BodyView::Populated(&derived.page_of_items)
        }
    }
}

pub fn render_body(
    frame: &mut Frame<'_>,
    area: Rect,
    body: BodyView<'_>,
    view: &ViewState,
    focus: Column,
) {
    let block = Block::default()
        .title(Span::styled(" Countries ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = header_row(view, focus);
    let rows: Vec<Row> = match body {
        BodyView::Populated(countries) => countries.iter().map(country_row).collect(),
        _ => Vec::new(),
    };
    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(2)
        .style(Style::default().fg(HEADER_TEXT));
    frame.render_widget(table, inner);

    // Full-width message row under the header for the non-row branches.
    let message_area = Rect {
        x: inner.x,
        y: inner.y.saturating_add(2),
        width: inner.width,
        height: inner.height.saturating_sub(2).min(1),
    };
    let message = match body {
        BodyView::Error(message) => Some(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        ))),
        BodyView::Loading(frame_symbol) => Some(Line::from(vec![
            Span::styled(frame_symbol, Style::default().fg(ACCENT)),
            Span::raw(" "),
            Span::styled(LOADING_MESSAGE, Style::default().fg(MUTED_TEXT)),
        ])),
        BodyView::Empty => Some(Line::from(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(MUTED_TEXT),
        ))),
        BodyView::Populated(_) => None,
    };
    if let Some(line) = message {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), message_area);
    }
}

fn header_row(view: &ViewState, focus: Column) -> Row<'static> {
    let cells = Column::ALL.into_iter().map(|column| {
        let mut label = column.label().to_string();
        if column.sort_field() == Some(view.sort_field) {
            label.push(' ');
            label.push_str(view.sort_direction.arrow());
        }
        let mut style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        if column.sort_field().is_none() {
            style = style.fg(MUTED_TEXT);
        }
        if column == focus {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::UNDERLINED);
        }
        Cell::from(label).style(style)
    });
    Row::new(cells).bottom_margin(1)
}

fn country_row(country: &Country) -> Row<'static> {
    Row::new(vec![
        Cell::from(country.code.clone()),
        Cell::from(country.name.clone()),
        Cell::from(flag_icon(&country.code)),
        Cell::from(country.continent_name().to_string()),
    ])
}
