/// Trims whitespace and strips angle brackets from client-supplied strings
/// before they reach a handler. Mirrors the sanitization pass every mutating
/// endpoint applies to its string fields.
pub fn clean(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect()
}

/// Cleans an optional field, mapping blank results to `None`.
pub fn clean_opt(input: Option<String>) -> Option<String> {
    input.map(|s| clean(&s)).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_angle_brackets() {
        assert_eq!(clean("<script>alert(1)</script>"), "scriptalert(1)/script");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(clean("  coffee  "), "coffee");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(clean("Groceries & rent"), "Groceries & rent");
    }

    #[test]
    fn blank_optional_becomes_none() {
        assert_eq!(clean_opt(Some("   ".into())), None);
        assert_eq!(clean_opt(Some(" 08:30 ".into())), Some("08:30".into()));
        assert_eq!(clean_opt(None), None);
    }
}
