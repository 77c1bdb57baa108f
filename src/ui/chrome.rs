use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().style(Theme::header());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically centered title line inside the orange band.
    let title = Line::from(format!("🍴 {}", state.config.kiosk.title)).alignment(Alignment::Center);
    let y = inner.y + inner.height / 2;
    frame.render_widget(
        Paragraph::new(title).style(Theme::header()),
        Rect::new(inner.x, y, inner.width, 1),
    );
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(Line::from(Span::styled(
        state.config.kiosk.footer.as_str(),
        Theme::footer(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
