//! # Lookup API
//!
//! [`Library`] is the one data interface the presentation layer uses: the
//! validated tables behind read-only accessors, with both verse indexes
//! built at construction. Every accessor is a pure read — out-of-range
//! numbers come back as `None` or an empty slice, never a panic.

use crate::core::data::{Chapter, DataError, QuranData, Section, Verse};
use crate::core::index::{VerseIndex, build_chapter_index, build_section_index};

pub struct Library {
    chapters: Vec<Chapter>,
    sections: Vec<Section>,
    by_chapter: VerseIndex,
    by_section: VerseIndex,
}

impl Library {
    /// Build the library from validated data, deriving both indexes.
    pub fn new(data: QuranData) -> Self {
        let by_chapter = build_chapter_index(&data.verses);
        let by_section = build_section_index(&data.verses);
        Self {
            chapters: data.chapters,
            sections: data.sections,
            by_chapter,
            by_section,
        }
    }

    /// Load the bundled tables and build the library.
    pub fn bundled() -> Result<Self, DataError> {
        Ok(Self::new(QuranData::bundled()?))
    }

    /// Chapter metadata, or `None` outside 1..=114.
    pub fn chapter(&self, number: u16) -> Option<&Chapter> {
        number
            .checked_sub(1)
            .and_then(|i| self.chapters.get(i as usize))
    }

    /// Section metadata, or `None` outside 1..=30.
    pub fn section(&self, number: u8) -> Option<&Section> {
        number
            .checked_sub(1)
            .and_then(|i| self.sections.get(i as usize))
    }

    /// All verses of a chapter in ascending verse order; empty slice for an
    /// unknown chapter or one with no bundled verses.
    pub fn chapter_verses(&self, number: u16) -> &[Verse] {
        self.by_chapter.get(number as u32)
    }

    /// All verses of a section in source order; empty slice for an unknown
    /// section or one with no bundled verses.
    pub fn section_verses(&self, number: u8) -> &[Verse] {
        self.by_section.get(number as u32)
    }

    /// Section length, derived from its bucket.
    pub fn section_verse_count(&self, number: u8) -> usize {
        self.section_verses(number).len()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_library;

    #[test]
    fn chapter_metadata_bounds() {
        let library = test_library();
        assert!(library.chapter(0).is_none());
        assert!(library.chapter(115).is_none());
        assert_eq!(library.chapter(1).unwrap().transliteration, "Al-Fatihah");
        assert_eq!(library.chapter(114).unwrap().number, 114);
    }

    #[test]
    fn section_metadata_bounds() {
        let library = test_library();
        assert!(library.section(0).is_none());
        assert!(library.section(31).is_none());
        assert_eq!(library.section(30).unwrap().number, 30);
    }

    #[test]
    fn chapter_one_fixture_comes_back_in_order() {
        let library = test_library();
        let verses = library.chapter_verses(1);
        assert_eq!(verses.len(), 3);
        assert_eq!(
            verses.iter().map(|v| v.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn unknown_chapter_is_an_empty_slice_not_an_error() {
        let library = test_library();
        assert!(library.chapter_verses(50).is_empty());
        assert!(library.chapter_verses(0).is_empty());
    }

    #[test]
    fn section_counts_are_derived_from_buckets() {
        let library = test_library();
        assert_eq!(
            library.section_verse_count(1),
            library.section_verses(1).len()
        );
        assert_eq!(library.section_verse_count(29), 0);
    }
}
