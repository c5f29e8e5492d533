use std::fmt;

use crate::io::format::{nice_bool, section_marker, write_subtitle, write_title};

struct Titled(&'static str);

impl fmt::Display for Titled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, self.0)?;
        write_subtitle(f, "Operations")
    }
}

#[test]
fn test_format_title() {
    let out = Titled("Space-group generation").to_string();
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("┌──"));
    assert!(lines[1].contains("Space-group generation"));
    assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    assert_eq!(lines[3], "Operations");
    assert_eq!(lines[4], "══════════");
}

#[test]
fn test_format_section_marker() {
    let begin = section_marker('‹', "Begin", "Hall symbol");
    assert!(begin.starts_with("‹‹‹‹‹ [Begin] Hall symbol ‹"));
    let end = section_marker('›', " End ", "Hall symbol");
    assert_eq!(begin.chars().count(), end.chars().count());
}

#[test]
fn test_format_nice_bool() {
    assert_eq!(nice_bool(true), "yes");
    assert_eq!(nice_bool(false), "no");
}
