//! Integration tests over the real bundled tables: the invariants every
//! shipped bundle must hold, checked through the public API only.

use mushaf::core::action::{Action, Effect, update};
use mushaf::core::config::ResolvedConfig;
use mushaf::core::data::{CHAPTER_COUNT, QuranData, SECTION_COUNT};
use mushaf::core::index::{build_chapter_index, build_section_index};
use mushaf::core::library::Library;
use mushaf::core::state::{App, ReadingTarget, Screen, Tab};
use mushaf::core::theme::ThemeMode;

fn bundled_library() -> Library {
    Library::bundled().expect("bundled tables must load")
}

// ============================================================================
// Bundle invariants
// ============================================================================

#[test]
fn bundled_chapter_table_is_complete_and_canonical() {
    let library = bundled_library();
    assert_eq!(library.chapters().len(), CHAPTER_COUNT as usize);
    assert_eq!(library.sections().len(), SECTION_COUNT as usize);

    // The declared lengths of the 114 chapters sum to the canonical total.
    let total: u32 = library
        .chapters()
        .iter()
        .map(|c| c.verse_count as u32)
        .sum();
    assert_eq!(total, 6236);
}

#[test]
fn every_bundled_chapter_matches_its_declared_length() {
    let library = bundled_library();
    for chapter in library.chapters() {
        let verses = library.chapter_verses(chapter.number);
        if verses.is_empty() {
            continue; // not yet bundled: empty state, not an error
        }
        assert_eq!(
            verses.len(),
            chapter.verse_count as usize,
            "chapter {} length",
            chapter.number
        );
        for (i, verse) in verses.iter().enumerate() {
            assert_eq!(verse.number as usize, i + 1, "chapter {}", chapter.number);
            assert_eq!(verse.chapter, chapter.number);
        }
    }
}

#[test]
fn section_buckets_partition_the_verse_table() {
    let data = QuranData::bundled().unwrap();
    let library = Library::new(data.clone());

    let mut seen = 0usize;
    for a in 1..=SECTION_COUNT {
        let verses_a = library.section_verses(a);
        seen += verses_a.len();
        for b in (a + 1)..=SECTION_COUNT {
            for verse in library.section_verses(b) {
                assert!(
                    !verses_a.contains(verse),
                    "verse {}:{} appears in sections {a} and {b}",
                    verse.chapter,
                    verse.number
                );
            }
        }
    }
    // Disjoint + total coverage = partition.
    assert_eq!(seen, data.verses.len());
}

#[test]
fn metadata_lookup_rejects_out_of_range_numbers() {
    let library = bundled_library();
    assert!(library.chapter(0).is_none());
    assert!(library.chapter(115).is_none());
    assert!(library.section(0).is_none());
    assert!(library.section(31).is_none());

    // In-range numbers always resolve, verses or not.
    assert!(library.chapter(57).is_some());
    assert!(library.section(15).is_some());
}

#[test]
fn index_builds_are_idempotent_over_the_bundle() {
    let data = QuranData::bundled().unwrap();
    assert_eq!(
        build_chapter_index(&data.verses),
        build_chapter_index(&data.verses)
    );
    assert_eq!(
        build_section_index(&data.verses),
        build_section_index(&data.verses)
    );
}

#[test]
fn well_known_chapter_rows_are_present() {
    // Sanity anchors on the chapter table.
    let library = bundled_library();
    assert_eq!(library.chapter(1).unwrap().transliteration, "Al-Fatihah");
    assert_eq!(library.chapter(9).unwrap().transliteration, "At-Tawbah");
    assert_eq!(library.chapter(114).unwrap().verse_count, 6);
}

// ============================================================================
// End-to-end navigation over the bundle
// ============================================================================

fn bundled_app() -> App {
    App::from_config(
        bundled_library(),
        &ResolvedConfig {
            theme: ThemeMode::Light,
            start_tab: Tab::Chapters,
            show_translation: true,
        },
    )
}

#[test]
fn open_read_and_return_round_trip() {
    let mut app = bundled_app();

    update(&mut app, Action::CursorDown);
    update(&mut app, Action::CursorDown);
    assert_eq!(update(&mut app, Action::OpenSelected), Effect::None);
    assert_eq!(app.screen, Screen::Reading(ReadingTarget::Chapter(3)));

    update(&mut app, Action::Back);
    assert_eq!(app.screen, Screen::Browse);
    assert_eq!(app.chapter_cursor, 2);

    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

#[test]
fn theme_toggle_round_trips_through_actions() {
    let mut app = bundled_app();
    let original = *app.theme.palette();

    update(&mut app, Action::ToggleTheme);
    assert_ne!(*app.theme.palette(), original);
    update(&mut app, Action::ToggleTheme);
    assert_eq!(*app.theme.palette(), original);
}
