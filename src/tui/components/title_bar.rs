//! # TitleBar Component
//!
//! Top status bar: greeting, current screen title, transient status text,
//! and a theme marker. Purely presentational — it receives all data as
//! props and holds no state, which keeps it trivial to test.
//!
//! The title text changes based on state:
//!
//! 1. **With status**: `"As-salamu alaykum · Surahs | 114 chapters · 30 sections | ☀ light"`
//! 2. **Without**: `"As-salamu alaykum · Surahs | ☀ light"`

use crate::core::theme::Palette;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

const GREETING: &str = "As-salamu alaykum";

/// Top status bar component.
pub struct TitleBar<'a> {
    pub screen_title: String,
    pub status_message: String,
    pub is_dark: bool,
    pub palette: &'a Palette,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        screen_title: String,
        status_message: String,
        is_dark: bool,
        palette: &'a Palette,
    ) -> Self {
        Self {
            screen_title,
            status_message,
            is_dark,
            palette,
        }
    }

    fn theme_marker(&self) -> &'static str {
        if self.is_dark { "☾ dark" } else { "☀ light" }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!(
                "{GREETING} · {} | {}",
                self.screen_title,
                self.theme_marker()
            )
        } else {
            format!(
                "{GREETING} · {} | {} | {}",
                self.screen_title,
                self.status_message,
                self.theme_marker()
            )
        };

        frame.render_widget(Span::styled(title_text, self.palette.title()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{Palette, ThemeMode};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let palette = Palette::for_mode(ThemeMode::Light);
        let mut title_bar = TitleBar::new(
            "Surahs".to_string(),
            "114 chapters · 30 sections".to_string(),
            false,
            &palette,
        );

        let text = render(&mut title_bar);
        assert!(text.contains("As-salamu alaykum"));
        assert!(text.contains("Surahs"));
        assert!(text.contains("114 chapters"));
        assert!(text.contains("☀ light"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let palette = Palette::for_mode(ThemeMode::Dark);
        let mut title_bar =
            TitleBar::new("Part One".to_string(), String::new(), true, &palette);

        let text = render(&mut title_bar);
        assert!(text.contains("Part One"));
        assert!(text.contains("☾ dark"));
        // No dangling separator for the missing status.
        assert!(!text.contains("|  |"));
    }

    #[test]
    fn test_theme_marker_follows_mode() {
        let palette = Palette::for_mode(ThemeMode::Light);
        let light = TitleBar::new(String::new(), String::new(), false, &palette);
        let dark = TitleBar::new(String::new(), String::new(), true, &palette);
        assert_eq!(light.theme_marker(), "☀ light");
        assert_eq!(dark.theme_marker(), "☾ dark");
    }
}
