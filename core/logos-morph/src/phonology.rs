//! Spelling helpers shared by the inflection rules.

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ä' | 'ö' | 'ü' | 'y')
}

pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c.to_lowercase().next().unwrap_or(c))
}

pub fn last_char(s: &str) -> Option<char> {
    s.chars().last()
}

/// Character before the last one.
pub fn penultimate_char(s: &str) -> Option<char> {
    s.chars().rev().nth(1)
}

pub fn ends_with_any(s: &str, suffixes: &[&str]) -> bool {
    let lower = s.to_lowercase();
    suffixes.iter().any(|suffix| lower.ends_with(suffix))
}

/// Drops the last `n` characters (not bytes).
pub fn drop_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &s[..idx],
        _ if n == 0 => s,
        _ => "",
    }
}

/// Vowel pairs that form a single syllable nucleus.
const NUCLEI: &[(char, char)] =
    &[('e', 'i'), ('a', 'i'), ('a', 'u'), ('e', 'u'), ('ä', 'u'), ('i', 'e'), ('a', 'a'), ('e', 'e'), ('o', 'o')];

/// Syllable count by vowel nuclei. Diphthongs and doubled vowels count
/// once; any other vowel pair is split ("te|u|er" is "teu|er", "Fei|er").
pub fn syllables(s: &str) -> usize {
    let mut count = 0;
    let mut prev: Option<char> = None;
    for c in s.to_lowercase().chars() {
        if !is_vowel(c) {
            prev = None;
            continue;
        }
        match prev {
            Some(p) if NUCLEI.contains(&(p, c)) => prev = None,
            _ => {
                count += 1;
                prev = Some(c);
            }
        }
    }
    count
}

/// Ends in s, ß, x, z (including "tz") or "sch".
pub fn is_sibilant_final(s: &str) -> bool {
    ends_with_any(s, &["s", "ß", "x", "z", "sch"])
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Appends `ending`, merging a doubled "e" at the seam ("leise" + "en").
pub fn attach(stem: &str, ending: &str) -> String {
    if stem.ends_with('e') && ending.starts_with('e') {
        format!("{}{}", stem, &ending[1..])
    } else {
        format!("{}{}", stem, ending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_chars_is_char_aware() {
        assert_eq!(drop_chars("groß", 1), "gro");
        assert_eq!(drop_chars("regnen", 2), "regn");
        assert_eq!(drop_chars("ab", 5), "");
        assert_eq!(drop_chars("ab", 0), "ab");
    }

    #[test]
    fn test_capitalize_umlaut() {
        assert_eq!(capitalize("übung"), "Übung");
        assert_eq!(capitalize("fonds"), "Fonds");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_syllables() {
        assert_eq!(syllables("dunkel"), 2);
        assert_eq!(syllables("teuer"), 2);
        assert_eq!(syllables("schnell"), 1);
        assert_eq!(syllables("Feier"), 2);
        assert_eq!(syllables("Haus"), 1);
        assert_eq!(syllables("Spiel"), 1);
        assert_eq!(syllables("Studium"), 3);
        assert_eq!(syllables("Meer"), 1);
    }

    #[test]
    fn test_attach_merges_e() {
        assert_eq!(attach("leise", "en"), "leisen");
        assert_eq!(attach("schnell", "en"), "schnellen");
    }
}
