mod chrome;
mod dialogs;
mod history;
mod layout;
mod status_bar;
mod theme;
mod wizard;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.flow.history_visible());

    chrome::render_header(frame, app_layout.header, state);
    wizard::render(frame, app_layout.wizard, state);
    history::render(frame, app_layout.history, state);
    chrome::render_footer(frame, app_layout.footer, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Dialogs last so they draw over everything else
    dialogs::render(frame, state);
}
