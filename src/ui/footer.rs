use crate::ui::table::{DerivedView, PageSize, ViewState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Tab: Column │ Enter: Sort │ PgUp/PgDn: Page │ Home/End: First/Last │ Ctrl+S: Rows │ Esc: Clear │ Ctrl+Q: Quit";

/// Pagination bar and key hints.
pub struct Footer<'a> {
    view: &'a ViewState,
    derived: &'a DerivedView,
}

impl<'a> Footer<'a> {
    pub fn new(view: &'a ViewState, derived: &'a DerivedView) -> Self {
        Self { view, derived }
    }

    /// "Page 2 of 13"; "Page 0 of 0" when nothing matches.
    pub fn page_label(&self) -> String {
        let current = if self.derived.page_count == 0 {
            0
        } else {
            self.derived.page_index + 1
        };
        format!("Page {} of {}", current, self.derived.page_count)
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let dim_style = text_style.add_modifier(Modifier::DIM);

        let mut pager = vec![
            Span::styled(format!(" {}", self.page_label()), text_style),
            Span::styled("  │  Rows per page:", dim_style),
        ];
        for size in PageSize::ALL {
            let style = if size == self.view.page_size {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                dim_style
            };
            pager.push(Span::styled(format!(" {}", size), style));
        }
        pager.push(Span::styled(
            format!("  │  {} countries", self.derived.total_item_count),
            dim_style,
        ));

        let version = format!("v{} ", VERSION);
        // Char count, not bytes: the hints contain box-drawing characters.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(version.chars().count());

        let hints = Line::from(vec![
            Span::styled(HINTS, dim_style),
            Span::styled(" ".repeat(padding), dim_style),
            Span::styled(version, dim_style),
        ]);

        Paragraph::new(vec![Line::from(pager), hints])
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
