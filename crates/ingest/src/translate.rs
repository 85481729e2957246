//! Raw log line to event description translation
//!
//! Lifecycle lines look like
//! `"<prefix> - <logger-qualified-name>.<event text>"`, e.g.
//!
//! ```text
//! 2024-01-01 10:00:00 - org.foo.USMEventLogger.Starting service
//! ```
//!
//! Translation drops the prefix and the dotted logger name and prefixes the
//! remaining event text with the worker's host identity.

use eventide_core::{Error, Result};

/// Regex pattern the external log tailer applies to select lifecycle-logger
/// lines before handing them to [`translate`]. Published here so the tailer
/// and the translator cannot drift apart; this crate itself never runs it.
pub const LIFECYCLE_LOGGER_PATTERN: &str = ".*USMEventLogger.*";

/// Translate a raw lifecycle log line into an event description.
///
/// Splits on the first `" - "`, discards the prefix, then discards the
/// dotted logger name (everything up to the last `.` before the event text
/// begins). The result is `"[host_name/host_address] - <event text>"`.
///
/// # Errors
///
/// A line without the `" - "` separator is malformed input and fails with
/// [`Error::MalformedLine`]. Downstream completeness guarantees depend on
/// every produced event being semantically valid, so a bad line is never
/// silently turned into an empty or truncated description; the watcher
/// decides whether to drop the single line or halt.
///
/// # Examples
///
/// ```
/// use eventide_ingest::translate;
///
/// let description = translate(
///     "2024-01-01 10:00:00 - org.foo.USMEventLogger.Starting service",
///     "h1",
///     "10.0.0.1",
/// ).unwrap();
/// assert_eq!(description, "[h1/10.0.0.1] - Starting service");
/// ```
pub fn translate(raw_line: &str, host_name: &str, host_address: &str) -> Result<String> {
    let (_, remainder) = raw_line.split_once(" - ").ok_or_else(|| Error::MalformedLine {
        line: raw_line.to_string(),
    })?;

    // The logger name is a dot-separated path with no whitespace; the event
    // text starts after its last dot. Restricting the search to the first
    // whitespace-free token keeps dots inside the event text intact.
    let token_end = remainder
        .find(char::is_whitespace)
        .unwrap_or(remainder.len());
    let text = match remainder[..token_end].rfind('.') {
        Some(dot) => &remainder[dot + 1..],
        None => remainder,
    };

    Ok(format!("[{host_name}/{host_address}] - {text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_logger_name() {
        let description = translate(
            "2024-01-01 10:00:00 - org.foo.USMEventLogger.Starting service",
            "h1",
            "10.0.0.1",
        )
        .unwrap();
        assert_eq!(description, "[h1/10.0.0.1] - Starting service");
    }

    #[test]
    fn unqualified_logger_name() {
        let description =
            translate("ts - USMEventLogger.Process started", "web-3", "192.168.9.20").unwrap();
        assert_eq!(description, "[web-3/192.168.9.20] - Process started");
    }

    #[test]
    fn event_text_without_logger_dot_is_kept_whole() {
        let description = translate("prefix - Started", "h1", "10.0.0.1").unwrap();
        assert_eq!(description, "[h1/10.0.0.1] - Started");
    }

    #[test]
    fn dots_inside_event_text_survive() {
        let description = translate(
            "ts - org.foo.USMEventLogger.Installed service v1.2",
            "h1",
            "10.0.0.1",
        )
        .unwrap();
        assert_eq!(description, "[h1/10.0.0.1] - Installed service v1.2");
    }

    #[test]
    fn missing_separator_fails_loudly() {
        let err = translate("no separator here", "h1", "10.0.0.1").unwrap_err();
        match err {
            Error::MalformedLine { line } => assert_eq!(line, "no separator here"),
        }
    }

    #[test]
    fn single_word_event_text() {
        let description = translate("ts - a.b.Started", "h1", "10.0.0.1").unwrap();
        assert_eq!(description, "[h1/10.0.0.1] - Started");
    }
}
