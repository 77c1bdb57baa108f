//! Modal detail dialogs drawn over the kiosk.

use crate::app::state::AppState;
use crate::kiosk::menu::MenuItem;
use crate::kiosk::order::Order;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    if let Some(order) = state.flow.inspected_order() {
        render_order(frame, order);
    } else if let Some(choice) = state.flow.inspected_item() {
        render_item(frame, choice.item());
    }
}

fn popup(frame: &mut Frame, title: String, lines: Vec<Line>, width: u16) {
    let height = lines.len() as u16 + 4;
    let area = centered(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .title_bottom(Line::from(vec![
            Span::styled(" Esc", Theme::hint_key()),
            Span::styled(" Fermer ", Theme::label()),
        ]))
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .padding(Padding::uniform(1))
        .style(Theme::dialog_bg());

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

pub fn order_lines(order: &Order) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (label, value) in [
        ("Date et heure:", order.timestamp.clone()),
        ("Email:", order.email.clone()),
        ("Plat:", order.plat.to_string()),
        ("Dessert:", order.dessert.to_string()),
    ] {
        lines.push(Line::from(Span::styled(label, Theme::label())));
        lines.push(Line::from(Span::styled(value, Theme::value())));
    }
    lines
}

fn render_order(frame: &mut Frame, order: &Order) {
    popup(
        frame,
        "Détails de la commande".to_string(),
        order_lines(order),
        56,
    );
}

/// Description, allergens (omitted when there are none) and composition.
pub fn item_lines(item: &MenuItem) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(item.description, Theme::label())),
        Line::from(""),
    ];

    if item.has_allergens() {
        lines.push(Line::from(Span::styled(
            "Allergènes présents :",
            Theme::item_name(),
        )));
        for allergen in item.allergens {
            lines.push(Line::from(Span::styled(
                format!("  • {}", allergen),
                Theme::value(),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Composition :", Theme::heading())));
    for ingredient in item.composition {
        lines.push(Line::from(Span::styled(
            format!("  • {}", ingredient),
            Theme::value(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Photo : {}", item.image),
        Style::default().fg(Theme::TEXT_MUTED),
    )));
    lines
}

fn render_item(frame: &mut Frame, item: &MenuItem) {
    let mut lines = item_lines(item);
    // Room for the description and photo link to wrap.
    lines.extend([Line::from(""), Line::from(""), Line::from("")]);
    popup(
        frame,
        format!("Informations pour : {}", item.name),
        lines,
        64,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kiosk::menu::{Dessert, Plat};

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_item_without_allergens_omits_section() {
        let lines = text(&item_lines(Plat::PouletRoti.item()));
        assert!(!lines.iter().any(|l| l.contains("Allergènes")));
        assert!(lines.iter().any(|l| l == "Composition :"));
        assert!(lines.iter().any(|l| l == "  • Carottes"));
    }

    #[test]
    fn test_item_with_allergens_lists_them() {
        let lines = text(&item_lines(Dessert::MousseAuChocolat.item()));
        let at = lines
            .iter()
            .position(|l| l == "Allergènes présents :")
            .unwrap();
        assert_eq!(lines[at + 1], "  • Œufs");
        assert_eq!(lines[at + 3], "  • Soja");
    }

    #[test]
    fn test_order_lines() {
        let order = Order {
            id: 7,
            email: "a@lycee-ndduroc.com".into(),
            plat: Plat::GratinDauphinois,
            dessert: Dessert::TarteAuxPommes,
            timestamp: "12:34:56".into(),
        };
        let lines = text(&order_lines(&order));
        assert_eq!(
            lines,
            vec![
                "Date et heure:",
                "12:34:56",
                "Email:",
                "a@lycee-ndduroc.com",
                "Plat:",
                "Gratin Dauphinois Végétarien",
                "Dessert:",
                "Tarte aux Pommes",
            ]
        );
    }
}
