//! Sanitizer behaviour for path segments

use pcloud_fs::file_safe_name;
use rstest::rstest;

#[rstest]
#[case("Song: Title/Test", "Song Title Test")]
#[case("  Padded  ", "Padded")]
#[case("Bach - BWV 1007", "Bach - BWV 1007")]
#[case("Fauré (op. 50)", "Fauré op 50")]
#[case("a\\b*c?d\"e<f>g|h", "a bcdefgh")]
#[case("../../etc", "etc")]
#[case("...", "")]
#[case("Psalms/Hymns", "Psalms Hymns")]
#[case("Чайковский", "Чайковский")]
fn test_file_safe_name(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(file_safe_name(input), expected);
}

#[test]
fn test_file_safe_name_is_idempotent() {
    let once = file_safe_name("Hymn #3: \"Amazing\" Grace!");
    assert_eq!(file_safe_name(&once), once);
}

#[test]
fn test_file_safe_name_drops_tabs_and_newlines() {
    // Only the plain space survives; other whitespace is dropped
    assert_eq!(file_safe_name("a\tb\nc d"), "abc d");
}
