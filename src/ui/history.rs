use crate::app::state::*;
use crate::kiosk::order::Order;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const CARD_WIDTH: u16 = 34;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 || !state.flow.history_visible() {
        return;
    }
    let focused = state.focus == FocusPanel::History;
    let orders = state.flow.history();

    let block = Block::default()
        .title(" Vos commandes précédentes ")
        .title_style(Theme::heading())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if orders.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Vous n'avez pas encore passé de commande avec cet email.",
            Style::default().fg(Theme::TEXT_MUTED),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let per_page = visible_cards(inner.width);
    let first = first_visible(state.history_cursor, per_page);
    for (slot, (i, order)) in orders
        .iter()
        .enumerate()
        .skip(first)
        .take(per_page)
        .enumerate()
    {
        let x = inner.x + slot as u16 * (CARD_WIDTH + 1);
        let width = CARD_WIDTH.min(inner.right().saturating_sub(x));
        let card = Rect::new(x, inner.y, width, inner.height);
        render_card(frame, card, order, focused && i == state.history_cursor);
    }
}

/// How many order cards fit side by side.
fn visible_cards(width: u16) -> usize {
    (((width + 1) / (CARD_WIDTH + 1)) as usize).max(1)
}

/// Index of the leftmost card so that `cursor` is on screen.
fn first_visible(cursor: usize, per_page: usize) -> usize {
    (cursor / per_page) * per_page
}

fn render_card(frame: &mut Frame, area: Rect, order: &Order, highlighted: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if highlighted {
            Theme::border_focused()
        } else {
            Style::default().fg(Theme::GREEN)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title_style = if highlighted {
        Theme::card_selected()
    } else {
        Theme::item_name()
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("Commande de {}", order.timestamp),
            title_style,
        )),
        Line::from(Span::styled(format!("Plat: {}", order.plat), Theme::value())),
        Line::from(Span::styled(
            format!("Dessert: {}", order.dessert),
            Theme::value(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_keeps_cursor_visible() {
        assert_eq!(visible_cards(10), 1);
        assert_eq!(visible_cards(70), 2);
        assert_eq!(first_visible(0, 2), 0);
        assert_eq!(first_visible(1, 2), 0);
        assert_eq!(first_visible(2, 2), 2);
        assert_eq!(first_visible(5, 1), 5);
    }
}
