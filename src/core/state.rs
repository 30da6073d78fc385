//! # Application State
//!
//! Core business state for mushaf. This module contains domain state only —
//! no TUI-specific types. Presentation state (scroll offsets, list widget
//! state) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── library: Library        // lookup API over the bundled tables
//! ├── theme: ThemeStore       // dark-mode flag + derived palette
//! ├── screen: Screen          // Browse (lists) or Reading (verses)
//! ├── tab: Tab                // active list on the browse screen
//! ├── chapter_cursor: usize   // selected row, chapter list
//! ├── section_cursor: usize   // selected row, section list
//! └── status_message: String  // status bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::library::Library;
use crate::core::theme::ThemeStore;

/// The two lists on the browse screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tab {
    Chapters,
    Sections,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Chapters => "Surahs",
            Tab::Sections => "Juzʾ",
        }
    }

    pub fn other(&self) -> Tab {
        match self {
            Tab::Chapters => Tab::Sections,
            Tab::Sections => Tab::Chapters,
        }
    }
}

/// What the reading screen is showing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadingTarget {
    Chapter(u16),
    Section(u8),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Browse,
    Reading(ReadingTarget),
}

pub struct App {
    pub library: Library,
    pub theme: ThemeStore,
    pub screen: Screen,
    pub tab: Tab,
    pub chapter_cursor: usize,
    pub section_cursor: usize,
    pub status_message: String,
}

impl App {
    pub fn new(library: Library, theme: ThemeStore, tab: Tab) -> Self {
        let status_message = format!(
            "{} chapters · {} sections",
            library.chapters().len(),
            library.sections().len()
        );
        Self {
            library,
            theme,
            screen: Screen::Browse,
            tab,
            chapter_cursor: 0,
            section_cursor: 0,
            status_message,
        }
    }

    pub fn from_config(library: Library, config: &ResolvedConfig) -> Self {
        Self::new(library, ThemeStore::new(config.theme), config.start_tab)
    }

    /// Length of the list under the active tab.
    pub fn active_list_len(&self) -> usize {
        match self.tab {
            Tab::Chapters => self.library.chapters().len(),
            Tab::Sections => self.library.sections().len(),
        }
    }

    /// Cursor of the list under the active tab.
    pub fn active_cursor(&self) -> usize {
        match self.tab {
            Tab::Chapters => self.chapter_cursor,
            Tab::Sections => self.section_cursor,
        }
    }

    /// The reading target the cursor currently points at.
    pub fn selected_target(&self) -> ReadingTarget {
        match self.tab {
            Tab::Chapters => ReadingTarget::Chapter(self.chapter_cursor as u16 + 1),
            Tab::Sections => ReadingTarget::Section(self.section_cursor as u8 + 1),
        }
    }

    /// Title-bar text for the current screen.
    pub fn screen_title(&self) -> String {
        match self.screen {
            Screen::Browse => self.tab.label().to_string(),
            Screen::Reading(ReadingTarget::Chapter(n)) => match self.library.chapter(n) {
                Some(chapter) => format!("Surah {}", chapter.transliteration),
                None => format!("Surah {n}"),
            },
            Screen::Reading(ReadingTarget::Section(n)) => match self.library.section(n) {
                Some(section) => section.english_name.clone(),
                None => format!("Juzʾ {n}"),
            },
        }
    }
}
