//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// First `max_chars` characters of `s`.
pub fn preview(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("pm25 spike", 4), "pm25");
        assert_eq!(truncate_str("ok", 10), "ok");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        // '°' is 2 bytes
        let s = "60°C";
        assert_eq!(truncate_str(s, 3), "60");
        assert_eq!(truncate_str(s, 4), "60°");
    }

    #[test]
    fn preview_counts_characters() {
        assert_eq!(preview("estación", 7), "estació");
        assert_eq!(preview("", 200), "");
    }
}
