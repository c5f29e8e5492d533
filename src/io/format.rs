//! Formatting of `xtalsym` report output.

use std::fmt;

const XTALSYM_BANNER_LENGTH: usize = 89;

/// Logs an error to both the default logger and the `xtalsym-output` logger.
macro_rules! xtalsym_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "xtalsym-output", $fmt, $($($arg)*)?);
    }
}

/// Logs a warning to the `xtalsym-output` logger.
macro_rules! xtalsym_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "xtalsym-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `xtalsym-output` logger.
macro_rules! xtalsym_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "xtalsym-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {xtalsym_error, xtalsym_output, xtalsym_warn};

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;

/// Writes a boxed section title.
pub(crate) fn write_title(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let length = title.chars().count().max(XTALSYM_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    writeln!(f, "┌──{bar}──┐")?;
    writeln!(f, "│§ {title:^length$} §│")?;
    writeln!(f, "└──{bar}──┘")?;
    Ok(())
}

struct Title<'a>(&'a str);

impl fmt::Display for Title<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, self.0)
    }
}

/// Logs a boxed section title to the `xtalsym-output` logger.
pub(crate) fn log_title(title: &str) {
    Title(title).to_string().lines().for_each(|line| {
        xtalsym_output!("{line}");
    });
}

/// Writes an underlined subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let bar = "═".repeat(subtitle.chars().count());
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Logs an underlined subtitle to the `xtalsym-output` logger.
pub(crate) fn log_subtitle(subtitle: &str) {
    let bar = "═".repeat(subtitle.chars().count());
    xtalsym_output!("{}", subtitle);
    xtalsym_output!("{}", bar);
}

/// Left-aligns a section title within the banner width, padding it with `marker`.
fn section_marker(marker: char, tag: &str, sectitle: &str) -> String {
    let width = XTALSYM_BANNER_LENGTH - 14;
    let sectitle_space = sectitle.to_string() + " ";
    let lead = marker.to_string().repeat(5);
    let fill = width.saturating_sub(sectitle_space.chars().count());
    format!(
        "{lead} [{tag}] {sectitle_space}{}",
        marker.to_string().repeat(fill)
    )
}

/// Logs the beginning of a major section to the `xtalsym-output` logger.
pub(crate) fn log_macsec_begin(sectitle: &str) {
    xtalsym_output!("{}", section_marker('❬', "Begin", sectitle));
}

/// Logs the end of a major section to the `xtalsym-output` logger.
pub(crate) fn log_macsec_end(sectitle: &str) {
    xtalsym_output!("{}", section_marker('❭', " End ", sectitle));
}

/// Logs the beginning of a minor section to the `xtalsym-output` logger.
pub(crate) fn log_micsec_begin(sectitle: &str) {
    xtalsym_output!("{}", section_marker('‹', "Begin", sectitle));
}

/// Logs the end of a minor section to the `xtalsym-output` logger.
pub(crate) fn log_micsec_end(sectitle: &str) {
    xtalsym_output!("{}", section_marker('›', " End ", sectitle));
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging `xtalsym` outputs line by line.
pub(crate) trait XtalSymOutput: fmt::Debug + fmt::Display {
    /// Logs display output.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            xtalsym_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> XtalSymOutput for T where T: fmt::Debug + fmt::Display {}
