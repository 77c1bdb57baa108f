use crate::config::AppConfig;
use crate::kiosk::flow::{OrderFlow, Step};
use crate::kiosk::menu::{Dessert, MenuChoice, Plat};
use crate::kiosk::order::{format_time, StampClock};
use chrono::Local;

/// Single-line text field with a byte-offset cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Delete back to the previous `.`, `@` or space boundary.
    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let is_sep = |b: u8| matches!(b, b' ' | b'.' | b'@');
        let bytes = self.text.as_bytes();
        let mut pos = self.cursor;
        while pos > 0 && is_sep(bytes[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !is_sep(bytes[pos - 1]) {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Wizard,
    History,
}

pub struct AppState {
    pub config: AppConfig,
    pub flow: OrderFlow,
    pub stamps: StampClock,
    pub input: InputState,
    pub focus: FocusPanel,
    pub card_cursor: usize,
    pub history_cursor: usize,
    pub clock: String,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let flow = OrderFlow::new(config.kiosk.email_suffix.clone());
        let stamps = StampClock::new(config.ui.timestamp_format.clone());
        let clock = format_time(&Local::now(), &config.ui.timestamp_format);
        Self {
            config,
            flow,
            stamps,
            input: InputState::new(),
            focus: FocusPanel::Wizard,
            card_cursor: 0,
            history_cursor: 0,
            clock,
            should_quit: false,
            dirty: true,
            pending_bell: false,
        }
    }

    /// Push the text field into the flow after an edit.
    pub fn sync_email(&mut self) {
        if self.flow.email() != self.input.text {
            self.flow.set_email(self.input.text.clone());
            self.history_cursor = 0;
        }
    }

    /// Pull the flow's email back into the text field after a reset.
    pub fn reload_email(&mut self) {
        if self.flow.email() != self.input.text {
            self.input.set_text(self.flow.email());
        }
    }

    /// Called after every wizard transition.
    pub fn on_step_changed(&mut self) {
        self.card_cursor = 0;
        self.reload_email();
        if !self.flow.history_visible() {
            self.focus = FocusPanel::Wizard;
        }
        self.history_cursor = self
            .history_cursor
            .min(self.history_len().saturating_sub(1));
        self.dirty = true;
    }

    /// Number of menu cards on the current step (0 outside menu steps).
    pub fn menu_len(&self) -> usize {
        match self.flow.step() {
            Step::Plat => Plat::ALL.len(),
            Step::Dessert { .. } => Dessert::ALL.len(),
            _ => 0,
        }
    }

    pub fn highlighted_choice(&self) -> Option<MenuChoice> {
        match self.flow.step() {
            Step::Plat => Plat::ALL.get(self.card_cursor).copied().map(MenuChoice::Plat),
            Step::Dessert { .. } => Dessert::ALL
                .get(self.card_cursor)
                .copied()
                .map(MenuChoice::Dessert),
            _ => None,
        }
    }

    pub fn move_card(&mut self, forward: bool) {
        let len = self.menu_len();
        if len == 0 {
            return;
        }
        self.card_cursor = if forward {
            (self.card_cursor + 1) % len
        } else if self.card_cursor == 0 {
            len - 1
        } else {
            self.card_cursor - 1
        };
    }

    pub fn history_len(&self) -> usize {
        if self.flow.history_visible() {
            self.flow.history().len()
        } else {
            0
        }
    }

    pub fn move_history(&mut self, forward: bool) {
        let len = self.history_len();
        if len == 0 {
            return;
        }
        if forward {
            self.history_cursor = (self.history_cursor + 1).min(len - 1);
        } else {
            self.history_cursor = self.history_cursor.saturating_sub(1);
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Wizard if self.history_len() > 0 => FocusPanel::History,
            _ => FocusPanel::Wizard,
        };
        self.dirty = true;
    }

    /// A detail dialog is on screen and captures input.
    pub fn dialog_open(&self) -> bool {
        self.flow.inspected_order().is_some() || self.flow.inspected_item().is_some()
    }

    pub fn refresh_clock(&mut self) {
        let now = format_time(&Local::now(), &self.config.ui.timestamp_format);
        if now != self.clock {
            self.clock = now;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        let step = match self.flow.step() {
            Step::Email => "1/4 Email",
            Step::Plat => "2/4 Plat",
            Step::Dessert { .. } => "3/4 Dessert",
            Step::Confirmation { .. } => "4/4 Confirmation",
        };
        format!("Étape {} | Commandes: {}", step, self.flow.orders().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "élève@x".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "élèv@x");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "lèv@x");
        input.move_right();
        assert_eq!(input.cursor, 1);
        input.move_end();
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_delete_word_back_stops_at_separators() {
        let mut input = InputState::new();
        input.set_text("jean.dupont@lycee");
        input.delete_word_back();
        assert_eq!(input.text, "jean.dupont@");
        input.delete_word_back();
        assert_eq!(input.text, "jean.");
        input.delete_word_back();
        assert_eq!(input.text, "");
        input.delete_word_back();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_card_cursor_wraps() {
        let mut state = AppState::new(AppConfig::default());
        state.move_card(true);
        assert_eq!(state.card_cursor, 0);

        state.input.set_text("a@lycee-ndduroc.com");
        state.sync_email();
        state.flow.submit_email().unwrap();
        state.on_step_changed();
        state.move_card(false);
        assert_eq!(state.card_cursor, 1);
        state.move_card(true);
        assert_eq!(state.card_cursor, 0);
        assert_eq!(
            state.highlighted_choice(),
            Some(MenuChoice::Plat(Plat::PouletRoti))
        );
    }

    #[test]
    fn test_focus_needs_history() {
        let mut state = AppState::new(AppConfig::default());
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Wizard);
    }
}
