//! Juzʾ tab of the browse screen: the 30 sections as a cursor list.
//! Rows mirror the chapter list's layout — number badge, English name with
//! the opening-words subtitle, Arabic name right-aligned.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::data::Section;
use crate::core::theme::Palette;
use crate::tui::component::Component;
use crate::tui::components::chapter_list::right_align_gap;

#[derive(Default)]
pub struct SectionListState {
    pub list_state: ListState,
}

pub struct SectionList<'a> {
    state: &'a mut SectionListState,
    sections: &'a [Section],
    cursor: usize,
    palette: &'a Palette,
}

impl<'a> SectionList<'a> {
    pub fn new(
        state: &'a mut SectionListState,
        sections: &'a [Section],
        cursor: usize,
        palette: &'a Palette,
    ) -> Self {
        Self {
            state,
            sections,
            cursor,
            palette,
        }
    }
}

impl Component for SectionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.list_state.select(Some(self.cursor));

        let inner_width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let selected = i == self.cursor;
                let number = format!("{:>3}  ", section.number);
                let left = format!("{number}{}", section.english_name);
                let gap = right_align_gap(inner_width, &left, &section.name);

                let row_style = if selected {
                    self.palette.highlight()
                } else {
                    self.palette.text_style()
                };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(number, self.palette.muted()),
                        Span::styled(section.english_name.clone(), row_style),
                        Span::raw(" ".repeat(gap)),
                        Span::styled(section.name.clone(), row_style),
                    ]),
                    Line::from(vec![
                        Span::raw("     "),
                        Span::styled(
                            format!("{} · starts at {}", section.opening, section.start),
                            self.palette.muted(),
                        ),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.palette.border_style())
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(self.palette.highlight());

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{Palette, ThemeMode};
    use crate::test_support::test_library;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn renders_section_rows() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let library = test_library();
        let palette = Palette::for_mode(ThemeMode::Light);
        let mut state = SectionListState::default();

        terminal
            .draw(|f| {
                let mut list = SectionList::new(&mut state, library.sections(), 2, &palette);
                list.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Part One"));
        assert!(text.contains("starts at"));
        assert_eq!(state.list_state.selected(), Some(2));
    }
}
