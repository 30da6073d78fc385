//! # Chapter List Component
//!
//! The Surah tab of the browse screen: all 114 chapters as a cursor list.
//! Each row carries the chapter number, the transliterated and translated
//! names, and the Arabic name right-aligned against the row edge.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChapterListState` lives in `TuiState` (ratatui scroll bookkeeping)
//! - `ChapterList` is created each frame with borrowed state
//!
//! The cursor itself is core state (`App::chapter_cursor`); this component
//! only mirrors it into the `ListState` so ratatui keeps it visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::core::data::Chapter;
use crate::core::theme::Palette;
use crate::tui::component::Component;

/// Persistent widget state for the chapter list.
#[derive(Default)]
pub struct ChapterListState {
    pub list_state: ListState,
}

/// Transient render wrapper for the chapter list.
pub struct ChapterList<'a> {
    state: &'a mut ChapterListState,
    chapters: &'a [Chapter],
    cursor: usize,
    palette: &'a Palette,
    show_translation: bool,
}

impl<'a> ChapterList<'a> {
    pub fn new(
        state: &'a mut ChapterListState,
        chapters: &'a [Chapter],
        cursor: usize,
        palette: &'a Palette,
        show_translation: bool,
    ) -> Self {
        Self {
            state,
            chapters,
            cursor,
            palette,
            show_translation,
        }
    }
}

/// Left-pad `arabic` so it ends at `width` columns after `left`.
///
/// Arabic glyphs are wide and shaped; `unicode-width` gives the column
/// count the terminal will actually use.
pub(crate) fn right_align_gap(width: usize, left: &str, arabic: &str) -> usize {
    width
        .saturating_sub(left.width())
        .saturating_sub(arabic.width())
        .max(1)
}

impl Component for ChapterList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.list_state.select(Some(self.cursor));

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = self
            .chapters
            .iter()
            .enumerate()
            .map(|(i, chapter)| {
                let selected = i == self.cursor;
                let number = format!("{:>3}  ", chapter.number);
                let left = format!("{number}{}", chapter.transliteration);
                let gap = right_align_gap(inner_width, &left, &chapter.name);

                let row_style = if selected {
                    self.palette.highlight()
                } else {
                    self.palette.text_style()
                };

                let mut lines = vec![Line::from(vec![
                    Span::styled(number, self.palette.muted()),
                    Span::styled(chapter.transliteration.clone(), row_style),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(chapter.name.clone(), row_style),
                ])];

                if self.show_translation {
                    lines.push(Line::from(vec![
                        Span::raw("     "),
                        Span::styled(chapter.translation.clone(), self.palette.muted()),
                        Span::styled(" · ", self.palette.muted()),
                        Span::styled(
                            chapter.revelation.label(),
                            self.palette.revelation_tag(chapter.revelation),
                        ),
                        Span::styled(
                            format!(" · {} verses", chapter.verse_count),
                            self.palette.muted(),
                        ),
                    ]));
                }

                ListItem::new(lines)
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
