//! Formatting helpers for CLI outputs.

/// Human-readable description and ANSI color for a studio space slug.
pub fn describe_space(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "principal-zone" => ("Principal Zone".into(), "\x1b[34m"),
        "natural-light" => ("Natural Light Room".into(), "\x1b[33m"),
        "cyclorama" => ("Cyclorama Wall".into(), "\x1b[36m"),
        "darkroom" => ("Darkroom".into(), "\x1b[35m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

/// Compact label for a whole-hour duration, e.g. "2h".
pub fn hours_label(hours: i64) -> String {
    format!("{}h", hours)
}
