//! Colors for the dark and light themes

use libkaomoji::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub copied: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme, colors_enabled: bool) -> Self {
        if !colors_enabled {
            return Self::plain();
        }
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(24, 24, 27),
                text: Color::Rgb(228, 228, 231),
                muted: Color::Rgb(161, 161, 170),
                accent: Color::Rgb(244, 114, 182),
                border: Color::Rgb(63, 63, 70),
                highlight: Color::Rgb(80, 7, 36),
                copied: Color::Rgb(74, 222, 128),
            },
            Theme::Light => Self {
                background: Color::Rgb(250, 250, 250),
                text: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(219, 39, 119),
                border: Color::Rgb(212, 212, 216),
                highlight: Color::Rgb(252, 231, 243),
                copied: Color::Rgb(22, 163, 74),
            },
        }
    }

    /// NO_COLOR rendering
    pub fn plain() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Reset,
            muted: Color::Reset,
            accent: Color::Reset,
            border: Color::Reset,
            highlight: Color::Reset,
            copied: Color::Reset,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }
}
