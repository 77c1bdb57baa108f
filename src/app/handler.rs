use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::kiosk::flow::Step;
use crate::kiosk::menu::MenuChoice;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.refresh_clock();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Dialogs capture all input while open
    if state.dialog_open() {
        return handle_dialog_key(state, key);
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::History => handle_history_key(state, key),
        FocusPanel::Wizard => match state.flow.step() {
            Step::Email => handle_email_key(state, key),
            Step::Plat | Step::Dessert { .. } => handle_menu_key(state, key),
            Step::Confirmation { .. } => handle_confirmation_key(state, key),
        },
    }
}

fn handle_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q')
    ) {
        // The item dialog can only be opened from the wizard, the order
        // dialog only from the history; close whichever is open.
        state.flow.dismiss_item();
        state.flow.dismiss_order();
    }
    vec![]
}

fn handle_email_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            state.sync_email();
            if state.flow.submit_email().is_ok() {
                state.on_step_changed();
            }
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.input.delete_word_back();
            } else {
                state.input.delete_back();
            }
            state.sync_email();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.delete_word_back();
            state.sync_email();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.set_text("");
            state.sync_email();
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            state.sync_email();
        }
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.insert_char(c);
            state.sync_email();
        }
        _ => {}
    }
    vec![]
}

fn handle_menu_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => cancel(state),
        KeyCode::Left | KeyCode::Up => state.move_card(false),
        KeyCode::Right | KeyCode::Down => state.move_card(true),
        KeyCode::Char('i') | KeyCode::Char('I') => {
            if let Some(choice) = state.highlighted_choice() {
                state.flow.inspect_item(choice);
            }
        }
        KeyCode::Enter => {
            let moved = match state.highlighted_choice() {
                Some(MenuChoice::Plat(plat)) => state.flow.select_plat(plat),
                Some(MenuChoice::Dessert(dessert)) => state.flow.select_dessert(dessert),
                None => false,
            };
            if moved {
                state.on_step_changed();
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_confirmation_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => cancel(state),
        KeyCode::Enter => {
            let stamp = state.stamps.stamp();
            if state.flow.confirm(stamp).is_some() {
                state.on_step_changed();
                if state.config.kiosk.bell_on_confirm {
                    return vec![Action::Bell];
                }
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_history_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.focus = FocusPanel::Wizard;
        }
        KeyCode::Left | KeyCode::Up => state.move_history(false),
        KeyCode::Right | KeyCode::Down => state.move_history(true),
        KeyCode::Home => state.history_cursor = 0,
        KeyCode::End => state.history_cursor = state.history_len().saturating_sub(1),
        KeyCode::Enter => {
            state.flow.inspect_order(state.history_cursor);
        }
        _ => {}
    }
    vec![]
}

fn cancel(state: &mut AppState) {
    state.flow.cancel();
    state.on_step_changed();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::kiosk::menu::{Dessert, Plat};

    const GOOD: &str = "a@lycee-ndduroc.com";

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let event = CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        handle_event(state, AppEvent::Terminal(event))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn order_through_keys(state: &mut AppState, email: &str) {
        type_text(state, email);
        press(state, KeyCode::Enter);
        press(state, KeyCode::Enter);
        press(state, KeyCode::Enter);
        press(state, KeyCode::Enter);
    }

    #[test]
    fn test_typed_email_submits() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, GOOD);
        assert_eq!(state.flow.email(), GOOD);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.flow.step(), Step::Plat);
    }

    #[test]
    fn test_bad_email_shows_error() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "bad@gmail.com");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.flow.step(), Step::Email);
        assert_eq!(
            state.flow.error(),
            Some("L'email doit se terminer par @lycee-ndduroc.com")
        );
        assert_eq!(state.input.text, "bad@gmail.com");
    }

    #[test]
    fn test_full_keyboard_order() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, GOOD);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        assert_eq!(
            state.flow.step(),
            Step::Dessert {
                plat: Plat::GratinDauphinois
            }
        );
        assert_eq!(state.card_cursor, 0);
        press(&mut state, KeyCode::Enter);
        assert_eq!(
            state.flow.step(),
            Step::Confirmation {
                plat: Plat::GratinDauphinois,
                dessert: Dessert::TarteAuxPommes
            }
        );
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(state.flow.step(), Step::Email);
        assert_eq!(state.input.text, "");
        assert_eq!(state.flow.orders().len(), 1);
    }

    #[test]
    fn test_bell_on_confirm() {
        let mut cfg = AppConfig::default();
        cfg.kiosk.bell_on_confirm = true;
        let mut state = AppState::new(cfg);
        type_text(&mut state, GOOD);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        assert_eq!(press(&mut state, KeyCode::Enter), vec![Action::Bell]);
    }

    #[test]
    fn test_escape_cancels_without_order() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, GOOD);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.flow.step(), Step::Email);
        assert_eq!(state.input.text, "");
        assert!(state.flow.orders().is_empty());
    }

    #[test]
    fn test_item_dialog_does_not_move_wizard() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, GOOD);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('i'));
        assert_eq!(
            state.flow.inspected_item(),
            Some(MenuChoice::Plat(Plat::PouletRoti))
        );
        // Swallowed while the dialog is open.
        press(&mut state, KeyCode::Right);
        assert_eq!(state.card_cursor, 0);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.flow.inspected_item(), None);
        assert_eq!(state.flow.step(), Step::Plat);
    }

    #[test]
    fn test_history_focus_and_order_detail() {
        let mut state = AppState::new(AppConfig::default());
        order_through_keys(&mut state, GOOD);
        order_through_keys(&mut state, GOOD);
        type_text(&mut state, GOOD);
        assert_eq!(state.history_len(), 2);

        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, FocusPanel::History);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.history_cursor, 1);
        press(&mut state, KeyCode::Enter);
        let oldest = state.flow.orders().iter().last().map(|o| o.id);
        assert_eq!(state.flow.inspected_order().map(|o| o.id), oldest);
        press(&mut state, KeyCode::Enter);
        assert!(state.flow.inspected_order().is_none());

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.focus, FocusPanel::Wizard);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = AppState::new(AppConfig::default());
        let event = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let actions = handle_event(&mut state, AppEvent::Terminal(event));
        assert_eq!(actions, vec![Action::Quit]);
    }
}
