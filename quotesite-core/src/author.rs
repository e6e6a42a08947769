//! Author naming helpers

/// Name shown for an author without a usable first name
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Format an author's name for display.
///
/// Blank first names render as [`UNKNOWN_AUTHOR`]; a missing last name is
/// simply left off.
pub fn display_name(first_name: &str, last_name: Option<&str>) -> String {
    let first = first_name.trim();
    if first.is_empty() {
        return UNKNOWN_AUTHOR.to_string();
    }

    match last_name.map(str::trim).filter(|l| !l.is_empty()) {
        Some(last) => format!("{} {}", first, last),
        None => first.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name() {
        assert_eq!(display_name("Lucius", Some("Seneca")), "Lucius Seneca");
    }

    #[test]
    fn first_name_only() {
        assert_eq!(display_name("Epictetus", None), "Epictetus");
        assert_eq!(display_name("Epictetus", Some("  ")), "Epictetus");
    }

    #[test]
    fn unknown_without_first_name() {
        assert_eq!(display_name("", Some("Aurelius")), UNKNOWN_AUTHOR);
        assert_eq!(display_name("   ", None), UNKNOWN_AUTHOR);
    }
}
