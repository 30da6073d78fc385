//! Bottom bar: the Surahs/Juzʾ segmented control plus context-sensitive key
//! help. While a reading page is open the tabs dim and the help switches to
//! the reading keys.

use crate::core::state::Tab;
use crate::core::theme::Palette;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

const BROWSE_HELP: &str = "↑↓ Move  ⏎ Open  Tab Switch  d Theme  q Quit";
const READING_HELP: &str = "↑↓ Scroll  Esc Back  d Theme  q Quit";

pub struct TabBar<'a> {
    pub active: Tab,
    pub reading: bool,
    pub palette: &'a Palette,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Tab, reading: bool, palette: &'a Palette) -> Self {
        Self {
            active,
            reading,
            palette,
        }
    }

    fn segment(&self, tab: Tab) -> Span<'static> {
        let label = format!("  {}  ", tab.label());
        if tab == self.active && !self.reading {
            Span::styled(label, self.palette.highlight())
        } else {
            Span::styled(label, self.palette.muted())
        }
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help = if self.reading {
            READING_HELP
        } else {
            BROWSE_HELP
        };

        let line = Line::from(vec![
            self.segment(Tab::Chapters),
            Span::styled("│", self.palette.border_style()),
            self.segment(Tab::Sections),
            Span::raw("   "),
            Span::styled(help, self.palette.muted()),
        ]);

        frame.render_widget(line, area);
    }
}
