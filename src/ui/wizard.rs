use crate::app::state::*;
use crate::kiosk::flow::Step;
use crate::kiosk::menu::{Dessert, MenuItem, Plat};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const CARD_WIDTH: u16 = 40;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Wizard;
    let step = state.flow.step();

    let block = Block::default()
        .title(format!(" {} ", heading(step)))
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

    if inner.height < 3 {
        return;
    }

    let body = if step == Step::Email {
        inner
    } else {
        let cancel = Line::from(vec![
            Span::styled(" Esc", Theme::hint_key()),
            Span::styled("  Annuler la commande", Theme::label()),
        ]);
        frame.render_widget(
            Paragraph::new(cancel),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
        Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(1),
        )
    };

    match step {
        Step::Email => render_email(frame, body, state, focused),
        Step::Plat => {
            let items: Vec<_> = Plat::ALL.iter().map(|p| p.item()).collect();
            render_cards(frame, body, &items, state.card_cursor, focused);
        }
        Step::Dessert { .. } => {
            let items: Vec<_> = Dessert::ALL.iter().map(|d| d.item()).collect();
            render_cards(frame, body, &items, state.card_cursor, focused);
        }
        Step::Confirmation { plat, dessert } => {
            render_confirmation(frame, body, state.flow.email(), plat, dessert)
        }
    }
}

pub fn heading(step: Step) -> &'static str {
    match step {
        Step::Email => "Entrez votre email",
        Step::Plat => "Choisissez votre plat",
        Step::Dessert { .. } => "Choisissez votre dessert",
        Step::Confirmation { .. } => "Confirmez votre commande",
    }
}

fn render_email(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let form = centered(area, 56, 7);
    if form.height < 3 {
        return;
    }

    let error = state.flow.error();
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(if error.is_some() {
            Theme::error()
        } else if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));
    let input_area = Rect::new(form.x, form.y, form.width, 3);
    let inner = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);

    let text = &state.input.text;
    let field = if text.is_empty() {
        Line::from(Span::styled(
            format!("votre.email{}", state.flow.suffix()),
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(text.as_str(), Theme::value()))
    };
    frame.render_widget(Paragraph::new(field), inner);

    if focused && inner.width > 0 {
        let offset = text[..state.input.cursor].width() as u16;
        frame.set_cursor_position((
            (inner.x + offset).min(inner.right().saturating_sub(1)),
            inner.y,
        ));
    }

    let mut lines = Vec::new();
    if let Some(msg) = error {
        lines.push(Line::from(Span::styled(msg, Theme::error())));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled("Enter", Theme::hint_key()),
            Span::styled("  Commencer la commande", Theme::value()),
        ])
        .alignment(Alignment::Center),
    );
    let below = Rect::new(
        form.x,
        form.y + 3,
        form.width,
        form.height.saturating_sub(3),
    );
    frame.render_widget(Paragraph::new(lines), below);
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    items: &[&'static MenuItem],
    cursor: usize,
    focused: bool,
) {
    if items.is_empty() || area.height < 4 {
        return;
    }

    let count = items.len() as u16;
    let width = CARD_WIDTH.min(area.width / count);
    let total = width * count + count.saturating_sub(1);
    let start_x = area.x + area.width.saturating_sub(total) / 2;

    for (i, item) in items.iter().enumerate() {
        let selected = i == cursor;
        let card = Rect::new(
            start_x + i as u16 * (width + 1),
            area.y,
            width,
            area.height,
        );
        render_card(frame, card, item, selected && focused);
    }
}

fn render_card(frame: &mut Frame, area: Rect, item: &MenuItem, highlighted: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if highlighted {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if highlighted {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name_style = if highlighted {
        Theme::card_selected()
    } else {
        Theme::item_name()
    };
    let allergens = if item.has_allergens() {
        format!("Allergènes : {}", item.allergens.join(", "))
    } else {
        "Sans allergène".to_string()
    };

    let lines = vec![
        Line::from(Span::styled(format!(" {} ", item.name), name_style)),
        Line::from(""),
        Line::from(Span::styled(item.description, Theme::label())),
        Line::from(""),
        Line::from(Span::styled(
            allergens,
            Style::default().fg(Theme::TEXT_MUTED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Theme::hint_key()),
            Span::styled(" Sélectionner  ", Theme::value()),
            Span::styled("i", Theme::hint_key()),
            Span::styled(" Infos", Theme::value()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_confirmation(frame: &mut Frame, area: Rect, email: &str, plat: Plat, dessert: Dessert) {
    let summary = centered(area, 56, 10);
    let field = |label: &'static str, value: String| {
        vec![
            Line::from(Span::styled(label, Theme::label())),
            Line::from(Span::styled(value, Theme::value().add_modifier(Modifier::BOLD))),
        ]
    };

    let mut lines = Vec::new();
    lines.extend(field("Email:", email.to_string()));
    lines.extend(field("Plat choisi:", plat.to_string()));
    lines.extend(field("Dessert choisi:", dessert.to_string()));
    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled("Enter", Theme::hint_key()),
            Span::styled("  Confirmer la commande", Theme::value()),
        ])
        .alignment(Alignment::Center),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), summary);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_follow_step() {
        assert_eq!(heading(Step::Email), "Entrez votre email");
        assert_eq!(heading(Step::Plat), "Choisissez votre plat");
        assert_eq!(
            heading(Step::Dessert {
                plat: Plat::PouletRoti
            }),
            "Choisissez votre dessert"
        );
        assert_eq!(
            heading(Step::Confirmation {
                plat: Plat::PouletRoti,
                dessert: Dessert::TarteAuxPommes
            }),
            "Confirmez votre commande"
        );
    }
}
