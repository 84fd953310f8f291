//! String helpers.

/// Truncates to at most `max` characters, ending with `...` when cut.
#[must_use]
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let kept: String = s.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Abbreviates an address to its first `head` and last `tail` characters.
///
/// Inputs too short to abbreviate are returned unchanged.
///
/// ```
/// use w3mail_utils::format::shorten_address;
///
/// assert_eq!(
///     shorten_address("0x1234567890123456789012345678901234567890", 6, 4),
///     "0x1234...7890"
/// );
/// ```
#[must_use]
pub fn shorten_address(address: &str, head: usize, tail: usize) -> String {
    let len = address.chars().count();
    if len <= head + tail + 3 {
        return address.to_string();
    }
    let start: String = address.chars().take(head).collect();
    let end: String = address.chars().skip(len - tail).collect();
    format!("{start}...{end}")
}

/// Uppercases the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Picks `singular` for a count of exactly one, `plural` otherwise.
#[must_use]
pub const fn pluralize<'a>(count: i64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_on_char_boundaries() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("hello", 2), "..");
    }

    #[test]
    fn shorten() {
        assert_eq!(
            shorten_address("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", 4, 4),
            "EPjF...Dt1v"
        );
        assert_eq!(shorten_address("0x1234", 6, 4), "0x1234");
        assert_eq!(shorten_address("", 6, 4), "");
    }

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("inbox"), "Inbox");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ßig"), "SSig");
    }

    #[test]
    fn plural() {
        assert_eq!(pluralize(1, "message", "messages"), "message");
        assert_eq!(pluralize(0, "message", "messages"), "messages");
        assert_eq!(pluralize(2, "message", "messages"), "messages");
    }
}
