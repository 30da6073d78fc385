//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: greeting, screen title, status, theme marker
//! - `TabBar`: Surahs/Juzʾ segmented control with key help
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Components whose widget state must survive across frames keep a
//! `*State` struct in `TuiState` and are wrapped each frame with borrowed
//! props:
//! - `ChapterList` / `SectionList`: cursor lists over the library tables
//! - `Reading`: the scrollable verse page
//!
//! Each component file contains its state types, rendering logic, event
//! handling, and tests.

mod title_bar;
pub use title_bar::TitleBar;

pub mod chapter_list;
pub mod reading;
pub mod section_list;
pub mod tab_bar;
pub use chapter_list::{ChapterList, ChapterListState};
pub use reading::{Reading, ReadingState};
pub use section_list::{SectionList, SectionListState};
pub use tab_bar::TabBar;
