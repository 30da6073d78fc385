//! # Theme Store
//!
//! One boolean of truth — dark mode on or off — plus the palette derived
//! from it. The store is owned by the `App` and handed down explicitly;
//! nothing reads an ambient global. `toggle()` flips the flag, re-derives
//! the palette, and notifies every subscriber synchronously, so a toggle is
//! instantaneous and idempotent per keypress.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::core::data::Revelation;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// The colors every component draws with, derived from the mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    /// Card/panel background.
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    /// Primary accent (badges, selected tab).
    pub accent: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            surface: Color::Rgb(0xF9, 0xF9, 0xF9),
            text: Color::Rgb(0x11, 0x11, 0x11),
            text_muted: Color::Rgb(0x4B, 0x55, 0x63),
            border: Color::Rgb(0xE5, 0xE7, 0xEB),
            accent: Color::Rgb(0x11, 0x11, 0x11),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x0A, 0x0A, 0x0A),
            surface: Color::Rgb(0x1A, 0x1A, 0x1A),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            text_muted: Color::Rgb(0x9C, 0xA3, 0xAF),
            border: Color::Rgb(0x2C, 0x2C, 0x2C),
            accent: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Selected row: inverted, bold.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Revelation-place tag color (same in both modes).
    pub fn revelation_tag(&self, revelation: Revelation) -> Style {
        let color = match revelation {
            Revelation::Meccan => Color::Rgb(0xD9, 0x77, 0x06),
            Revelation::Medinan => Color::Rgb(0x1E, 0x40, 0xAF),
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

type Subscriber = Box<dyn FnMut(ThemeMode, &Palette)>;

/// Owns the dark-mode flag and its derived palette, and broadcasts changes.
pub struct ThemeStore {
    mode: ThemeMode,
    palette: Palette,
    subscribers: Vec<Subscriber>,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            palette: Palette::for_mode(mode),
            subscribers: Vec::new(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Register an observer called synchronously after every toggle.
    pub fn subscribe(&mut self, subscriber: impl FnMut(ThemeMode, &Palette) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Flip the flag, re-derive the palette, notify subscribers.
    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.palette = Palette::for_mode(self.mode);

        let (mode, palette) = (self.mode, self.palette);
        for subscriber in &mut self.subscribers {
            subscriber(mode, &palette);
        }
    }
}
