pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        // For very small max_len, just take first chars without "..."
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Collapse whitespace runs and truncate for a single table cell.
pub fn cell(text: &str, max_len: usize) -> String {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&normalized, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_is_untouched() {
        assert_eq!(truncate("Mandrin", 24), "Mandrin");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("Contrebande de sel", 10), "Contreb...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Éloi le Borgne", 14), "Éloi le Borgne");
    }

    #[test]
    fn test_cell_collapses_whitespace() {
        assert_eq!(cell("Passage  en \n force", 40), "Passage en force");
    }
}
