use chrono::{Local, TimeZone};
use prospector::utils::{datetime, text};

#[test]
fn test_sequence_name_format() {
    let at = Local.with_ymd_and_hms(2023, 12, 25, 9, 5, 0).unwrap();
    assert_eq!(datetime::sequence_name(at), "Sequence 2023-12-25 09:05");
}

#[test]
fn test_format_today_shape() {
    let today = datetime::format_today();
    // YYYY-MM-DD
    assert_eq!(today.len(), 10);
    assert_eq!(today.matches('-').count(), 2);
}

#[test]
fn test_truncate_short_strings_pass_through() {
    assert_eq!(text::truncate("hello", 10), "hello");
    assert_eq!(text::truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_ellipsizes() {
    assert_eq!(text::truncate("hello world", 8), "hello w…");
    // Counts characters, not bytes
    assert_eq!(text::truncate("héllo wörld", 8), "héllo w…");
}

#[test]
fn test_count_label_pluralization() {
    assert_eq!(text::count_label(0, "lead"), "0 leads");
    assert_eq!(text::count_label(1, "lead"), "1 lead");
    assert_eq!(text::count_label(5, "lead"), "5 leads");
}
