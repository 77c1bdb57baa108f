use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub wizard: Rect,
    pub history: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_history: bool) -> AppLayout {
    let history_height = if show_history { 7 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Min(8),                 // Current step
            Constraint::Length(history_height), // Previous orders
            Constraint::Length(1),              // Footer
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        wizard: chunks[1],
        history: chunks[2],
        footer: chunks[3],
        status_bar: chunks[4],
    }
}

/// Center a `width` x `height` popup inside `area`, shrinking it to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 60, 20), Rect::new(20, 10, 60, 20));
        let small = Rect::new(0, 0, 30, 10);
        let popup = centered(small, 60, 20);
        assert_eq!(popup.width, 28);
        assert_eq!(popup.height, 8);
        assert_eq!(popup.x, 1);
    }

    #[test]
    fn test_history_row_collapses() {
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(compute_layout(area, false).history.height, 0);
        assert_eq!(compute_layout(area, true).history.height, 7);
    }
}
