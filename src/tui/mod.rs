//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (mobile, web)
//! in the future if needed — the core neither draws nor polls.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after input: it sleeps up to
//! 250ms in `poll`, drains every pending event, applies the resulting
//! actions, and draws one frame. A theme toggle is just another action —
//! the next frame reads the re-derived palette.

mod component;
mod components;
mod event;
mod ui;

use log::{error, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::library::Library;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{ChapterListState, ReadingState, SectionListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub chapter_list: ChapterListState,
    pub section_list: SectionListState,
    pub reading: ReadingState,
    pub show_translation: bool,
}

impl TuiState {
    pub fn new(show_translation: bool) -> Self {
        Self {
            chapter_list: ChapterListState::default(),
            section_list: SectionListState::default(),
            reading: ReadingState::new(),
            show_translation,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> Self {
        // Mouse capture is for wheel scrolling in the reading view; the
        // cursor stays hidden since nothing accepts text input.
        if let Err(e) = execute!(stdout(), EnableMouseCapture, Hide) {
            log::warn!("Could not enable terminal modes: {e}");
        }
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Self
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    let result = run_loop(&mut terminal, &config);
    drop(guard);
    ratatui::restore();
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    config: &ResolvedConfig,
) -> std::io::Result<()> {
    let library = match Library::bundled() {
        Ok(library) => library,
        Err(e) => {
            error!("Bundled data failed to load: {e}");
            return fatal_data_error(terminal, &e.to_string());
        }
    };

    let mut app = App::from_config(library, config);
    app.theme
        .subscribe(|mode, _palette| info!("Theme switched to {}", mode.label()));
    let mut tui = TuiState::new(config.show_translation);

    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_none() {
            continue;
        }
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // While a page is open, motion keys scroll it instead of moving
            // the list cursor underneath.
            let reading = matches!(app.screen, Screen::Reading(_));
            if reading
                && matches!(
                    event,
                    TuiEvent::CursorUp
                        | TuiEvent::CursorDown
                        | TuiEvent::ScrollUp
                        | TuiEvent::ScrollDown
                        | TuiEvent::ScrollPageUp
                        | TuiEvent::ScrollPageDown
                        | TuiEvent::ScrollToTop
                        | TuiEvent::ScrollToBottom
                )
            {
                tui.reading.handle_event(&event);
                continue;
            }

            let action = match event {
                TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
                TuiEvent::Escape => Some(Action::Back),
                TuiEvent::Submit => Some(Action::OpenSelected),
                TuiEvent::CursorUp | TuiEvent::ScrollUp => Some(Action::CursorUp),
                TuiEvent::CursorDown | TuiEvent::ScrollDown => Some(Action::CursorDown),
                TuiEvent::NextTab => Some(Action::CycleTab),
                TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
                _ => None,
            };

            if let Some(action) = action {
                // A freshly opened page starts at the top.
                if action == Action::OpenSelected {
                    tui.reading = ReadingState::new();
                }
                if update(&mut app, action) == Effect::Quit {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            info!("Shutting down");
            return Ok(());
        }
    }
}

/// Full-screen fallback for a broken bundle: show the error, wait for a
/// key, exit nonzero. No partial UI is rendered.
fn fatal_data_error(
    terminal: &mut ratatui::DefaultTerminal,
    message: &str,
) -> std::io::Result<()> {
    terminal.draw(|f| ui::draw_error_view(f, f.area(), message))?;
    loop {
        match crossterm::event::read() {
            Ok(crossterm::event::Event::Key(_)) | Err(_) => break,
            _ => {}
        }
    }
    Err(std::io::Error::other(format!("data load failed: {message}")))
}
