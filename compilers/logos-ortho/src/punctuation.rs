//! Text-level cleanup applied to a finished sentence.

/// Marks that end a sentence; nothing is appended after them.
pub const TERMINALS: &[char] = &['.', '?', '!', ':'];

/// Drops spaces before commas, repeated commas and repeated spaces.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' if out.is_empty() || out.ends_with(' ') => {}
            ',' => {
                while out.ends_with(' ') {
                    out.pop();
                }
                if !out.ends_with(',') {
                    out.push(',');
                }
            }
            _ => out.push(c),
        }
    }
    out.trim_end().to_string()
}

/// Strips leading spaces and commas.
pub fn strip_leading(text: &str) -> &str {
    text.trim_start_matches(|c: char| c == ' ' || c == ',')
}

/// Strips trailing spaces and commas.
pub fn strip_trailing(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == ' ' || c == ',')
}

/// Upper-cases the first letter; umlauts included.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn ends_sentence(text: &str) -> bool {
    text.ends_with(TERMINALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_commas() {
        assert_eq!(normalize("die Sonne scheint , während es regnet"), "die Sonne scheint, während es regnet");
        assert_eq!(normalize("a , , b"), "a, b");
        assert_eq!(normalize("a,,b"), "a,b");
    }

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize("  a   b  "), "a b");
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip_leading(" , ,a"), "a");
        assert_eq!(strip_trailing("a , "), "a");
    }

    #[test]
    fn test_capitalize_umlaut() {
        assert_eq!(capitalize("übermorgen"), "Übermorgen");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_terminals() {
        assert!(ends_sentence("Wer?"));
        assert!(!ends_sentence("Wer"));
    }
}
