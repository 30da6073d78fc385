use crate::core::state::{App, Screen, Tab};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChapterList, Reading, SectionList, TabBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let palette = *app.theme.palette();

    // Paint the themed background before any component draws.
    frame.render_widget(
        Block::default().style(palette.text_style()),
        frame.area(),
    );

    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, bottom_area] = layout.areas(frame.area());

    TitleBar::new(
        app.screen_title(),
        app.status_message.clone(),
        app.theme.is_dark(),
        &palette,
    )
    .render(frame, title_area);

    match app.screen {
        Screen::Browse => match app.tab {
            Tab::Chapters => ChapterList::new(
                &mut tui.chapter_list,
                app.library.chapters(),
                app.chapter_cursor,
                &palette,
                tui.show_translation,
            )
            .render(frame, main_area),
            Tab::Sections => SectionList::new(
                &mut tui.section_list,
                app.library.sections(),
                app.section_cursor,
                &palette,
            )
            .render(frame, main_area),
        },
        Screen::Reading(target) => {
            Reading::new(&mut tui.reading, &app.library, target, &palette).render(frame, main_area)
        }
    }

    TabBar::new(app.tab, matches!(app.screen, Screen::Reading(_)), &palette)
        .render(frame, bottom_area);
}

/// Full-screen fallback when the bundled data fails to load. No partial UI:
/// this replaces everything.
pub fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(format!(
        "{error_msg}\n\nThe bundled reading data could not be loaded.\nPress any key to exit."
    ))
    .block(Block::bordered().title("ERROR"))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ReadingTarget;
    use crate::test_support::test_app;
    use crate::tui::TuiState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_browse() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(true);
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("As-salamu alaykum"));
        assert!(text.contains("Al-Fatihah"));
        assert!(text.contains("⏎ Open"));
    }

    #[test]
    fn test_draw_ui_section_tab() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.tab = Tab::Sections;
        let mut tui = TuiState::new(true);
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        assert!(buffer_text(&terminal).contains("Part One"));
    }

    #[test]
    fn test_draw_ui_reading() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.screen = Screen::Reading(ReadingTarget::Chapter(1));
        let mut tui = TuiState::new(false);
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Surah 1"));
        assert!(text.contains("Esc Back"));
    }

    #[test]
    fn test_error_view_carries_the_message() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_error_view(f, f.area(), "chapters table is empty"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("ERROR"));
        assert!(text.contains("chapters table is empty"));
    }
}
