//! # Actions
//!
//! Everything that can happen in mushaf becomes an `Action`.
//! User presses Enter on a list row? That's `Action::OpenSelected`.
//! User hits the theme key? That's `Action::ToggleTheme`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place, returning an `Effect` for anything the
//! caller has to do (today: quit). No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes navigation testable without a terminal: feed actions, assert
//! on the screen enum. And debuggable: log every action, replay the path.

use log::debug;

use crate::core::state::{App, Screen, Tab};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Switch the browse screen to the other tab.
    CycleTab,
    CursorUp,
    CursorDown,
    /// Open the reading view for the row under the cursor.
    OpenSelected,
    /// Pop the reading view back to the lists.
    Back,
    ToggleTheme,
    Quit,
}

/// What the caller must do after an update.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::CycleTab => {
            if app.screen == Screen::Browse {
                app.tab = app.tab.other();
            }
        }
        Action::CursorUp => {
            if app.screen == Screen::Browse {
                match app.tab {
                    Tab::Chapters => {
                        app.chapter_cursor = app.chapter_cursor.saturating_sub(1);
                    }
                    Tab::Sections => {
                        app.section_cursor = app.section_cursor.saturating_sub(1);
                    }
                }
            }
        }
        Action::CursorDown => {
            if app.screen == Screen::Browse {
                let last = app.active_list_len().saturating_sub(1);
                match app.tab {
                    Tab::Chapters => {
                        app.chapter_cursor = (app.chapter_cursor + 1).min(last);
                    }
                    Tab::Sections => {
                        app.section_cursor = (app.section_cursor + 1).min(last);
                    }
                }
            }
        }
        Action::OpenSelected => {
            if app.screen == Screen::Browse {
                app.screen = Screen::Reading(app.selected_target());
                app.status_message = app.screen_title();
            }
        }
        Action::Back => {
            // Cursor is untouched: coming back lands on the row you left.
            if matches!(app.screen, Screen::Reading(_)) {
                app.screen = Screen::Browse;
                app.status_message = app.screen_title();
            }
        }
        Action::ToggleTheme => {
            app.theme.toggle();
            app.status_message = format!("Theme: {}", app.theme.mode().label());
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
