use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ORANGE: Color = Color::Rgb(249, 115, 22);
    pub const GREEN: Color = Color::Rgb(22, 163, 74);
    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const BG_SURFACE: Color = Color::Rgb(28, 28, 32);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ORANGE)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Self::GREEN).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn value() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn item_name() -> Style {
        Style::default().fg(Self::ORANGE).add_modifier(Modifier::BOLD)
    }

    pub fn card_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ORANGE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_key() -> Style {
        Style::default().fg(Self::ORANGE).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::RED)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ORANGE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn dialog_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }
}
