use once_cell::sync::Lazy;
use regex::Regex;

// Opening bold idiom: "[b" up to and including the first following "]".
// Covers "[b]" as well as decorated openings like "[b color=red]".
static BOLD_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[b[^\]]*\]").unwrap());

/// Neutralize user text before it is interpolated into report markup.
///
/// Removes every `[b…]` opening idiom, then drops any remaining literal
/// `]` so the text cannot close a surrounding tag early. Newlines fold to
/// spaces since report lines are single-line markup. Other bracket tags
/// pass through untouched; the policy is intentionally this narrow
/// (operators are trusted, stray closers are not).
///
/// Total: any input, including the empty string, yields a string.
pub fn sanitize(text: &str) -> String {
    let stripped = BOLD_OPEN.replace_all(text, "");
    stripped
        .chars()
        .filter(|&c| c != ']')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}
