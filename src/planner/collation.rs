//! Locale-aware ordering for ingredient names.
//!
//! Approximates a Latin-script collation in three levels: base letters
//! (accents and case folded away), then accents (unaccented first), then case
//! (lowercase first).

use std::cmp::Ordering;

/// Strip the diacritic from a lowercase Latin letter.
fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn primary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(|c| base_letter(lower(c)))
}

fn secondary(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(|c| {
        let l = lower(c);
        base_letter(l) != l
    })
}

fn tertiary(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Compare two strings the way a human-facing alphabetical list expects.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_do_not_push_words_to_the_end() {
        let mut words = vec!["limão", "açúcar", "alho", "ervas", "óleo", "batatas"];
        words.sort_by(|a, b| compare(a, b));
        assert_eq!(words, vec!["açúcar", "alho", "batatas", "ervas", "limão", "óleo"]);
    }

    #[test]
    fn test_case_is_folded_at_first_level() {
        let mut words = vec!["Tomate", "azeite", "sal"];
        words.sort_by(|a, b| compare(a, b));
        assert_eq!(words, vec!["azeite", "sal", "Tomate"]);
    }

    #[test]
    fn test_lowercase_sorts_before_uppercase_on_tie() {
        assert_eq!(compare("tomate", "Tomate"), Ordering::Less);
        assert_eq!(compare("Tomate", "tomate"), Ordering::Greater);
    }

    #[test]
    fn test_unaccented_sorts_before_accented_on_tie() {
        assert_eq!(compare("pe", "pé"), Ordering::Less);
        assert_eq!(compare("alho", "alho"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("tomate", "tomates"), Ordering::Less);
        assert_eq!(compare("queijo", "queijo feta"), Ordering::Less);
    }
}
