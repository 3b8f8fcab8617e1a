use ratatui::layout::Rect;

/// Search box: one line of text plus borders.
pub const HEADER_HEIGHT: u16 = 3;
/// Pagination line and key hints plus borders.
pub const FOOTER_HEIGHT: u16 = 4;

/// Splits the screen into (header, body, footer), shrinking from the
/// bottom when the terminal is too small.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 4);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 17);
        assert_eq!(footer.y, 20);
    }

    #[test]
    fn tiny_screen_keeps_header_first() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 4));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }
}
