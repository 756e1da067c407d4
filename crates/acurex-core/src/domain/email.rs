use regex::Regex;
use std::sync::LazyLock;

/// Placeholder text spreadsheet exports write into empty cells.
const ABSENT_MARKERS: [&str; 3] = ["nan", "NaN", "None"];

static EMBEDDED_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern")
});

/// Extracts the first address embedded in a free-text cell, so
/// `"email: ada@example.com (work)"` yields `ada@example.com`.
pub fn normalize_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || ABSENT_MARKERS.contains(&trimmed) {
        return None;
    }
    EMBEDDED_EMAIL
        .find(trimmed)
        .map(|found| found.as_str().to_string())
}
