use crate::component::Tone;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(24, 26, 33);
    pub const BG_ELEVATED: Color = Color::Rgb(34, 37, 46);
    pub const BORDER_DIM: Color = Color::Rgb(70, 74, 88);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 228, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 124);
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 205, 196);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(180, 160, 240);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 210, 120);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 100);
    pub const ACCENT_BLUE: Color = Color::Rgb(100, 150, 240);
    pub const ACCENT_YELLOW: Color = Color::Rgb(235, 200, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn value(tone: Tone) -> Style {
        let fg = match tone {
            Tone::Positive => Self::ACCENT_GREEN,
            Tone::Negative => Self::ACCENT_RED,
            Tone::Zero => Self::TEXT_SECONDARY,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn button_decrement() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_increment() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_neutral() -> Style {
        Style::default().fg(Color::White).bg(Self::BORDER_DIM)
    }

    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::DIM)
    }

    pub fn badge_online() -> Style {
        Style::default().fg(Color::Black).bg(Self::ACCENT_GREEN)
    }

    pub fn badge_offline() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn avatar() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_warning() -> Style {
        Style::default().fg(Self::ACCENT_YELLOW).bg(Self::BG_ELEVATED)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Self::ACCENT_RED).bg(Self::BG_ELEVATED)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}
