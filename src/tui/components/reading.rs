//! # Reading Component
//!
//! The verse page. For a chapter target it renders the chapter header
//! (Basmala, Arabic name, transliteration, meta row) above one continuous
//! verse run. For a section target it renders the section header and then
//! one group per chapter the section touches, each with a compact header.
//!
//! Content usually exceeds the viewport, so everything is laid out inside a
//! `ScrollView`: each block is measured with `Paragraph::line_count`, placed
//! at its y offset, and the scroll state lives in `ReadingState` across
//! frames.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::data::Chapter;
use crate::core::library::Library;
use crate::core::state::ReadingTarget;
use crate::core::text::{BASMALA, chapter_shows_basmala, section_groups, verse_run};
use crate::core::theme::Palette;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent scroll state for the reading view. Reset when a new target is
/// opened so every page starts at the top.
#[derive(Default)]
pub struct ReadingState {
    pub scroll_state: ScrollViewState,
}

impl ReadingState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for ReadingState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown | TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.scroll_state.scroll_to_bottom(),
            _ => return None,
        }
        None
    }
}

/// One measured block of the page: a paragraph and its rendered height.
struct RenderedBlock<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> RenderedBlock<'a> {
    fn new(paragraph: Paragraph<'a>, width: u16) -> Self {
        let height = paragraph.line_count(width) as u16;
        Self { paragraph, height }
    }
}

/// Transient render wrapper for the reading view.
pub struct Reading<'a> {
    state: &'a mut ReadingState,
    library: &'a Library,
    target: ReadingTarget,
    palette: &'a Palette,
}

impl<'a> Reading<'a> {
    pub fn new(
        state: &'a mut ReadingState,
        library: &'a Library,
        target: ReadingTarget,
        palette: &'a Palette,
    ) -> Self {
        Self {
            state,
            library,
            target,
            palette,
        }
    }

    fn chapter_header(&self, chapter: &Chapter) -> Paragraph<'static> {
        let mut lines: Vec<Line> = vec![Line::raw("")];
        if chapter_shows_basmala(chapter.number) {
            lines.push(Line::styled(BASMALA, self.palette.muted()).centered());
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(chapter.name.clone(), self.palette.title()).centered());
        lines.push(
            Line::styled(
                format!(
                    "{} · Surah {} · {} · {} Verses",
                    chapter.transliteration,
                    chapter.number,
                    chapter.revelation.label(),
                    chapter.verse_count
                ),
                self.palette.muted(),
            )
            .centered(),
        );
        lines.push(Line::raw(""));
        Paragraph::new(lines)
    }

    fn verse_paragraph(&self, run: String) -> Paragraph<'static> {
        Paragraph::new(run)
            .style(self.palette.text_style())
            .alignment(Alignment::Right)
            .wrap(Wrap { trim: true })
    }

    fn empty_state(&self, what: &str) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                format!("No verse text bundled for this {what}."),
                self.palette.muted(),
            )
            .centered(),
        ])
    }

    /// Assemble the page blocks for the current target.
    fn blocks(&self, width: u16) -> Vec<RenderedBlock<'static>> {
        let mut blocks = Vec::new();
        match self.target {
            ReadingTarget::Chapter(n) => {
                let Some(chapter) = self.library.chapter(n) else {
                    blocks.push(RenderedBlock::new(self.empty_state("chapter"), width));
                    return blocks;
                };
                blocks.push(RenderedBlock::new(self.chapter_header(chapter), width));

                let verses = self.library.chapter_verses(n);
                if verses.is_empty() {
                    blocks.push(RenderedBlock::new(self.empty_state("chapter"), width));
                } else {
                    blocks.push(RenderedBlock::new(
                        self.verse_paragraph(verse_run(verses)),
                        width,
                    ));
                }
            }
            ReadingTarget::Section(n) => {
                let Some(section) = self.library.section(n) else {
                    blocks.push(RenderedBlock::new(self.empty_state("section"), width));
                    return blocks;
                };

                let header = Paragraph::new(vec![
                    Line::raw(""),
                    Line::styled(section.name.clone(), self.palette.title()).centered(),
                    Line::styled(
                        format!(
                            "{} · {} verses",
                            section.english_name,
                            self.library.section_verse_count(n)
                        ),
                        self.palette.muted(),
                    )
                    .centered(),
                    Line::raw(""),
                ]);
                blocks.push(RenderedBlock::new(header, width));

                let groups = section_groups(self.library, n);
                if groups.is_empty() {
                    blocks.push(RenderedBlock::new(self.empty_state("section"), width));
                }
                for group in groups {
                    let mut lines: Vec<Line> = vec![
                        Line::styled(group.chapter.name.clone(), self.palette.title()).centered(),
                        Line::styled(
                            format!(
                                "{} · Surah {} · {}",
                                group.chapter.transliteration,
                                group.chapter.number,
                                group.chapter.revelation.label()
                            ),
                            self.palette.muted(),
                        )
                        .centered(),
                    ];
                    if group.show_basmala {
                        lines.push(Line::raw(""));
                        lines.push(Line::styled(BASMALA, self.palette.muted()).centered());
                    }
                    lines.push(Line::raw(""));
                    blocks.push(RenderedBlock::new(Paragraph::new(lines), width));
                    blocks.push(RenderedBlock::new(
                        self.verse_paragraph(verse_run(group.verses)),
                        width,
                    ));
                }
            }
        }
        blocks
    }
}

impl Component for Reading<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column
        let blocks = self.blocks(content_width);
        let total_height: u16 = blocks.iter().map(|b| b.height).sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for block in &blocks {
            let block_rect = Rect::new(0, y_offset, content_width, block.height);
            scroll_view.render_widget(block.paragraph.clone(), block_rect);
            y_offset += block.height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
