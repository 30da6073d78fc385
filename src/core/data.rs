//! # Reference Data Store
//!
//! The bundled Quran tables: chapters (Surahs), sections (Juzʾ), and the
//! verse table itself. All three ship inside the binary as JSON and are
//! parsed exactly once at startup.
//!
//! Parsing is strict: a table that is missing, empty, or structurally off
//! fails the whole load with a [`DataError`]. There are no partial loads and
//! no fallback datasets — a broken bundle is a broken build.
//!
//! The parse functions take `&str` so tests can feed fixture tables; the
//! shipped assets come in through [`QuranData::bundled`].

use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Number of chapters (Surahs) in the Quran.
pub const CHAPTER_COUNT: u16 = 114;
/// Number of sections (Ajzāʾ) in the Quran.
pub const SECTION_COUNT: u8 = 30;

const CHAPTERS_JSON: &str = include_str!("../../assets/chapters.json");
const SECTIONS_JSON: &str = include_str!("../../assets/sections.json");
const VERSES_JSON: &str = include_str!("../../assets/verses.json");

/// Where a chapter was revealed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Revelation {
    Meccan,
    Medinan,
}

impl Revelation {
    pub fn label(&self) -> &'static str {
        match self {
            Revelation::Meccan => "Meccan",
            Revelation::Medinan => "Medinan",
        }
    }
}

/// One of the 114 Surahs. `verse_count` is the declared length of the
/// chapter; the bundled verse table is validated against it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Chapter {
    pub number: u16,
    /// Arabic name, e.g. "الفاتحة".
    pub name: String,
    /// Transliterated name, e.g. "Al-Fatihah".
    pub transliteration: String,
    /// English translation of the name, e.g. "The Opening".
    pub translation: String,
    pub revelation: Revelation,
    pub verse_count: u16,
}

/// One of the 30 Juzʾ reading divisions. Sections span chapter boundaries,
/// so a section carries a starting reference rather than a chapter number.
/// Its verse count is derived from the index, not declared here.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Section {
    pub number: u8,
    /// Arabic name, e.g. "الجزء الأول".
    pub name: String,
    /// English name, e.g. "Part One".
    pub english_name: String,
    /// Common transliterated opening words, e.g. "Alif Lām Mīm".
    pub opening: String,
    /// Starting reference, e.g. "Al-Fatihah 1".
    pub start: String,
}

/// A single Ayah. Belongs to exactly one chapter and one section.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Verse {
    pub chapter: u16,
    pub section: u8,
    pub number: u16,
    pub text: String,
}

/// A bundled table failed to load. Fatal at startup — the UI shows a
/// full-screen error rather than rendering with partial data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{table} table is not a valid JSON array of records: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{table} table is empty")]
    EmptyTable { table: &'static str },

    #[error("{table} table has {found} records, expected {expected}")]
    TableSize {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{table} table is misnumbered at position {position}: expected {expected}, found {found}")]
    Misnumbered {
        table: &'static str,
        position: usize,
        expected: u32,
        found: u32,
    },

    #[error("verse record {index} references chapter {chapter}, section {section} — out of range")]
    VerseOutOfRange {
        index: usize,
        chapter: u16,
        section: u8,
    },

    #[error("verse {number} of chapter {chapter} has empty text")]
    EmptyVerseText { chapter: u16, number: u16 },

    #[error("chapter {chapter} verses are out of order: expected verse {expected}, found {found}")]
    BrokenVerseRun {
        chapter: u16,
        expected: u16,
        found: u16,
    },

    #[error("chapter {chapter} declares {declared} verses but the bundle carries {found}")]
    VerseCountMismatch {
        chapter: u16,
        declared: u16,
        found: u16,
    },
}

/// The three validated record collections.
#[derive(Clone, Debug)]
pub struct QuranData {
    pub chapters: Vec<Chapter>,
    pub sections: Vec<Section>,
    pub verses: Vec<Verse>,
}

impl QuranData {
    /// Parse and validate the tables embedded in the binary.
    pub fn bundled() -> Result<Self, DataError> {
        let data = Self::from_tables(CHAPTERS_JSON, SECTIONS_JSON, VERSES_JSON)?;
        info!(
            "Bundled data loaded: {} chapters, {} sections, {} verses",
            data.chapters.len(),
            data.sections.len(),
            data.verses.len()
        );
        Ok(data)
    }

    /// Parse and cross-validate three JSON tables.
    pub fn from_tables(
        chapters_json: &str,
        sections_json: &str,
        verses_json: &str,
    ) -> Result<Self, DataError> {
        let chapters = parse_chapters(chapters_json)?;
        let sections = parse_sections(sections_json)?;
        let verses = parse_verses(verses_json)?;

        // Bundled verses must agree with the declared chapter lengths.
        // Chapters with no bundled verses are legal (empty reading view).
        let mut per_chapter: HashMap<u16, u16> = HashMap::new();
        for verse in &verses {
            *per_chapter.entry(verse.chapter).or_insert(0) += 1;
        }
        for chapter in &chapters {
            if let Some(&found) = per_chapter.get(&chapter.number)
                && found != chapter.verse_count
            {
                return Err(DataError::VerseCountMismatch {
                    chapter: chapter.number,
                    declared: chapter.verse_count,
                    found,
                });
            }
        }

        Ok(Self {
            chapters,
            sections,
            verses,
        })
    }
}

/// Parse the chapter table: exactly 114 records numbered 1..=114 in order.
pub fn parse_chapters(json: &str) -> Result<Vec<Chapter>, DataError> {
    const TABLE: &str = "chapters";
    let chapters: Vec<Chapter> =
        serde_json::from_str(json).map_err(|source| DataError::Parse {
            table: TABLE,
            source,
        })?;

    if chapters.is_empty() {
        return Err(DataError::EmptyTable { table: TABLE });
    }
    if chapters.len() != CHAPTER_COUNT as usize {
        return Err(DataError::TableSize {
            table: TABLE,
            expected: CHAPTER_COUNT as usize,
            found: chapters.len(),
        });
    }
    for (i, chapter) in chapters.iter().enumerate() {
        let expected = i as u16 + 1;
        if chapter.number != expected {
            return Err(DataError::Misnumbered {
                table: TABLE,
                position: i,
                expected: expected as u32,
                found: chapter.number as u32,
            });
        }
    }
    Ok(chapters)
}

/// Parse the section table: exactly 30 records numbered 1..=30 in order.
pub fn parse_sections(json: &str) -> Result<Vec<Section>, DataError> {
    const TABLE: &str = "sections";
    let sections: Vec<Section> =
        serde_json::from_str(json).map_err(|source| DataError::Parse {
            table: TABLE,
            source,
        })?;

    if sections.is_empty() {
        return Err(DataError::EmptyTable { table: TABLE });
    }
    if sections.len() != SECTION_COUNT as usize {
        return Err(DataError::TableSize {
            table: TABLE,
            expected: SECTION_COUNT as usize,
            found: sections.len(),
        });
    }
    for (i, section) in sections.iter().enumerate() {
        let expected = i as u8 + 1;
        if section.number != expected {
            return Err(DataError::Misnumbered {
                table: TABLE,
                position: i,
                expected: expected as u32,
                found: section.number as u32,
            });
        }
    }
    Ok(sections)
}

/// Parse the verse table. Every record must reference a valid chapter and
/// section, carry text, and each chapter's verses must run 1, 2, 3… in
/// source order. Source order is what the indexes preserve, so it has to be
/// right here at the boundary.
pub fn parse_verses(json: &str) -> Result<Vec<Verse>, DataError> {
    const TABLE: &str = "verses";
    let verses: Vec<Verse> = serde_json::from_str(json).map_err(|source| DataError::Parse {
        table: TABLE,
        source,
    })?;

    if verses.is_empty() {
        return Err(DataError::EmptyTable { table: TABLE });
    }

    let mut next_in_chapter: HashMap<u16, u16> = HashMap::new();
    for (index, verse) in verses.iter().enumerate() {
        let chapter_ok = (1..=CHAPTER_COUNT).contains(&verse.chapter);
        let section_ok = (1..=SECTION_COUNT).contains(&verse.section);
        if !chapter_ok || !section_ok {
            return Err(DataError::VerseOutOfRange {
                index,
                chapter: verse.chapter,
                section: verse.section,
            });
        }
        if verse.text.trim().is_empty() {
            return Err(DataError::EmptyVerseText {
                chapter: verse.chapter,
                number: verse.number,
            });
        }
        let expected = next_in_chapter.entry(verse.chapter).or_insert(1);
        if verse.number != *expected {
            return Err(DataError::BrokenVerseRun {
                chapter: verse.chapter,
                expected: *expected,
                found: verse.number,
            });
        }
        *expected += 1;
    }
    Ok(verses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tables_load() {
        let data = QuranData::bundled().unwrap();
        assert_eq!(data.chapters.len(), CHAPTER_COUNT as usize);
        assert_eq!(data.sections.len(), SECTION_COUNT as usize);
        assert!(!data.verses.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_verses("{not json").unwrap_err();
        assert!(matches!(err, DataError::Parse { table: "verses", .. }));
    }

    #[test]
    fn non_array_table_is_a_parse_error() {
        let err = parse_chapters(r#"{"number": 1}"#).unwrap_err();
        assert!(matches!(err, DataError::Parse { table: "chapters", .. }));
    }

    #[test]
    fn empty_verse_table_is_rejected() {
        let err = parse_verses("[]").unwrap_err();
        assert!(matches!(err, DataError::EmptyTable { table: "verses" }));
    }

    #[test]
    fn verse_with_bad_chapter_is_rejected() {
        let json = r#"[{"chapter": 115, "section": 1, "number": 1, "text": "x"}]"#;
        let err = parse_verses(json).unwrap_err();
        assert!(matches!(
            err,
            DataError::VerseOutOfRange { chapter: 115, .. }
        ));
    }

    #[test]
    fn verse_with_empty_text_is_rejected() {
        let json = r#"[{"chapter": 1, "section": 1, "number": 1, "text": "  "}]"#;
        let err = parse_verses(json).unwrap_err();
        assert!(matches!(
            err,
            DataError::EmptyVerseText { chapter: 1, number: 1 }
        ));
    }

    #[test]
    fn out_of_order_verses_are_rejected() {
        let json = r#"[
            {"chapter": 1, "section": 1, "number": 1, "text": "a"},
            {"chapter": 1, "section": 1, "number": 3, "text": "b"}
        ]"#;
        let err = parse_verses(json).unwrap_err();
        assert!(matches!(
            err,
            DataError::BrokenVerseRun { chapter: 1, expected: 2, found: 3 }
        ));
    }

    #[test]
    fn interleaved_chapters_keep_independent_runs() {
        // Section boundaries interleave chapters in a flat table; each
        // chapter's own numbering must still be contiguous.
        let json = r#"[
            {"chapter": 1, "section": 1, "number": 1, "text": "a"},
            {"chapter": 2, "section": 1, "number": 1, "text": "b"},
            {"chapter": 1, "section": 1, "number": 2, "text": "c"}
        ]"#;
        let verses = parse_verses(json).unwrap();
        assert_eq!(verses.len(), 3);
    }

    #[test]
    fn declared_count_mismatch_fails_the_load() {
        let chapters = chapters_fixture_json();
        let sections = sections_fixture_json();
        // Chapter 1 declares 7 verses; bundle only one.
        let verses = r#"[{"chapter": 1, "section": 1, "number": 1, "text": "x"}]"#;
        let err = QuranData::from_tables(&chapters, &sections, verses).unwrap_err();
        assert!(matches!(
            err,
            DataError::VerseCountMismatch { chapter: 1, declared: 7, found: 1 }
        ));
    }

    #[test]
    fn misnumbered_chapter_table_is_rejected() {
        let mut chapters = chapters_fixture_json();
        chapters = chapters.replacen(r#""number": 2"#, r#""number": 99"#, 1);
        let err = parse_chapters(&chapters).unwrap_err();
        assert!(matches!(
            err,
            DataError::Misnumbered { table: "chapters", position: 1, expected: 2, found: 99 }
        ));
    }

    /// A full 114-row chapter table where chapter 1 declares 7 verses and
    /// every other chapter declares 1.
    fn chapters_fixture_json() -> String {
        let rows: Vec<String> = (1..=CHAPTER_COUNT)
            .map(|n| {
                let count = if n == 1 { 7 } else { 1 };
                format!(
                    r#"{{"number": {n}, "name": "c{n}", "transliteration": "C{n}",
                        "translation": "Chapter {n}", "revelation": "meccan",
                        "verse_count": {count}}}"#
                )
            })
            .collect();
        format!("[{}]", rows.join(","))
    }

    fn sections_fixture_json() -> String {
        let rows: Vec<String> = (1..=SECTION_COUNT)
            .map(|n| {
                format!(
                    r#"{{"number": {n}, "name": "s{n}", "english_name": "Part {n}",
                        "opening": "O{n}", "start": "C1 1"}}"#
                )
            })
            .collect();
        format!("[{}]", rows.join(","))
    }
}
