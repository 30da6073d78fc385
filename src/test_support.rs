//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::ResolvedConfig;
use crate::core::data::{CHAPTER_COUNT, QuranData, SECTION_COUNT};
use crate::core::library::Library;
use crate::core::state::{App, Tab};
use crate::core::theme::ThemeMode;

/// Fixture verse table: chapter 1 with verses 1..=3 in section 1, and a
/// three-chapter section 30 (112, 113, 114). Everything else has no verses.
const FIXTURE_VERSES: &str = r#"[
    { "chapter": 1, "section": 1, "number": 1, "text": "alpha" },
    { "chapter": 1, "section": 1, "number": 2, "text": "beta" },
    { "chapter": 1, "section": 1, "number": 3, "text": "gamma" },
    { "chapter": 112, "section": 30, "number": 1, "text": "delta" },
    { "chapter": 113, "section": 30, "number": 1, "text": "epsilon" },
    { "chapter": 114, "section": 30, "number": 1, "text": "zeta" },
    { "chapter": 114, "section": 30, "number": 2, "text": "eta" }
]"#;

/// A full 114-row chapter table agreeing with [`FIXTURE_VERSES`].
fn fixture_chapters_json() -> String {
    let rows: Vec<String> = (1..=CHAPTER_COUNT)
        .map(|n| {
            let verse_count = match n {
                1 => 3,
                114 => 2,
                _ => 1,
            };
            let (name, transliteration, translation) = match n {
                1 => ("الفاتحة", "Al-Fatihah".to_string(), "The Opening".to_string()),
                _ => ("فصل", format!("Chapter-{n}"), format!("Chapter {n}")),
            };
            format!(
                r#"{{"number": {n}, "name": "{name}", "transliteration": "{transliteration}",
                    "translation": "{translation}", "revelation": "meccan",
                    "verse_count": {verse_count}}}"#
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

fn fixture_sections_json() -> String {
    let rows: Vec<String> = (1..=SECTION_COUNT)
        .map(|n| {
            // Section 1 carries the real data's ordinal spelling ("Part One");
            // the rest stay numeric ("Part 2", …, "Part 30").
            let english_name = if n == 1 {
                "Part One".to_string()
            } else {
                format!("Part {n}")
            };
            format!(
                r#"{{"number": {n}, "name": "جزء", "english_name": "{english_name}",
                    "opening": "Opening {n}", "start": "Al-Fatihah 1"}}"#
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

/// Builds a library over the fixture tables.
pub fn test_library() -> Library {
    let data = QuranData::from_tables(
        &fixture_chapters_json(),
        &fixture_sections_json(),
        FIXTURE_VERSES,
    )
    .expect("fixture tables are valid");
    Library::new(data)
}

/// Creates a test App over the fixture library, light theme, chapter tab.
pub fn test_app() -> App {
    App::from_config(
        test_library(),
        &ResolvedConfig {
            theme: ThemeMode::Light,
            start_tab: Tab::Chapters,
            show_translation: true,
        },
    )
}
