use crate::ui::app::App;
use crate::ui::body::render_body;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.search_box());
    frame.render_widget(header_widget.widget(), header);
    if let Some(position) = header_widget.cursor_position(header) {
        frame.set_cursor_position(position);
    }

    frame.render_widget(Clear, body);
    render_body(
        frame,
        body,
        app.body_view(),
        app.view_state(),
        app.header_focus(),
    );

    let footer_widget = Footer::new(app.view_state(), app.derived());
    frame.render_widget(footer_widget.widget(footer), footer);
}
