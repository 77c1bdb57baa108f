use crate::app::state::*;
use crate::kiosk::flow::Step;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Key hints for the current context, as (key, label) pairs.
pub fn key_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    if state.dialog_open() {
        return vec![("Esc", "Fermer")];
    }
    let mut hints = match (state.focus, state.flow.step()) {
        (FocusPanel::History, _) => vec![("←→", "Parcourir"), ("Enter", "Détails"), ("Esc", "Retour")],
        (_, Step::Email) => vec![("Enter", "Valider")],
        (_, Step::Plat | Step::Dessert { .. }) => vec![
            ("←→", "Choisir"),
            ("Enter", "Sélectionner"),
            ("i", "Infos"),
            ("Esc", "Annuler"),
        ],
        (_, Step::Confirmation { .. }) => vec![("Enter", "Confirmer"), ("Esc", "Annuler")],
    };
    if state.focus == FocusPanel::Wizard && state.history_len() > 0 {
        hints.push(("Tab", "Commandes"));
    }
    hints.push(("Ctrl+C", "Quitter"));
    hints
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bar_bg = Style::default().bg(Color::DarkGray);
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    for (key, label) in key_hints(state) {
        parts.push(Span::styled(
            format!(" {}", key),
            Style::default()
                .fg(Theme::ORANGE)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ));
        parts.push(Span::styled(format!(" {} ", label), Theme::status_bar()));
    }

    // Pad so the clock sits on the right edge
    let clock = format!(" {} ", state.clock);
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.width());
    parts.push(Span::styled(" ".repeat(remaining), bar_bg));
    parts.push(Span::styled(
        clock,
        Style::default().fg(Theme::GREEN).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_hints_follow_context() {
        let mut state = AppState::new(AppConfig::default());
        let keys: Vec<_> = key_hints(&state).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Enter", "Ctrl+C"]);

        state.input.set_text("a@lycee-ndduroc.com");
        state.sync_email();
        state.flow.submit_email().unwrap();
        let keys: Vec<_> = key_hints(&state).into_iter().map(|(k, _)| k).collect();
        assert!(keys.contains(&"i"));
        assert!(keys.contains(&"Esc"));
    }
}
