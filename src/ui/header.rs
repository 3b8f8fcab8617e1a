use crate::ui::search_box::SearchBox;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const SEARCH_PLACEHOLDER: &str = "Search countries...";

/// Search box across the top of the screen.
pub struct Header<'a> {
    search: &'a SearchBox,
}

impl<'a> Header<'a> {
    pub fn new(search: &'a SearchBox) -> Self {
        Self { search }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = if self.search.is_empty() {
            Line::from(Span::styled(
                SEARCH_PLACEHOLDER,
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(
                self.search.text().to_string(),
                Style::default().fg(HEADER_TEXT),
            ))
        };

        Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(" Search ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    /// Terminal cursor position inside `area`, clamped to the box.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if area.width < 3 || area.height < 3 {
            return None;
        }
        let max_offset = area.width.saturating_sub(3);
        let offset = u16::try_from(self.search.cursor()).unwrap_or(u16::MAX).min(max_offset);
        Some(Position::new(area.x + 1 + offset, area.y + 1))
    }
}
