use std::cmp::Ordering;

use icu_normalizer::DecomposingNormalizerBorrowed;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Truncate or right-pad with spaces to exactly `cells` terminal cells.
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    if w < cells {
        out.push_str(&" ".repeat(cells - w));
    }
    out
}

/// Remove the last grapheme cluster. Returns false if the string was empty.
pub fn pop_grapheme(s: &mut String) -> bool {
    match s.grapheme_indices(true).next_back() {
        Some((start, _)) => {
            s.truncate(start);
            true
        }
        None => false,
    }
}

/// Human ordering for task names.
///
/// Both sides are decomposed to NFD first, so precomposed and combining
/// accents compare alike. Letters compare case-insensitively with accents
/// ignored (`apple < Banana < Cherry`, `café < cafes`). Ties fall back to
/// accents (unaccented first), then case (lowercase first), then code
/// points, so the result is a total order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let a_nfd = decompose(a);
    let b_nfd = decompose(b);
    base_letters(&a_nfd)
        .cmp(&base_letters(&b_nfd))
        .then_with(|| lowercase(&a_nfd).cmp(&lowercase(&b_nfd)))
        .then_with(|| {
            a_nfd
                .iter()
                .map(|c| c.is_uppercase())
                .cmp(b_nfd.iter().map(|c| c.is_uppercase()))
        })
        .then_with(|| a_nfd.cmp(&b_nfd))
        .then_with(|| a.cmp(b))
}

fn decompose(s: &str) -> Vec<char> {
    DecomposingNormalizerBorrowed::new_nfd()
        .normalize_iter(s.chars())
        .collect()
}

/// Lowercase letters with combining marks dropped
fn base_letters(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .filter(|c| !is_combining_mark(**c))
        .flat_map(|c| c.to_lowercase())
        .map(strip_stroke)
        .collect()
}

fn lowercase(chars: &[char]) -> Vec<char> {
    chars.iter().flat_map(|c| c.to_lowercase()).collect()
}

fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Base letter for Latin letters that NFD leaves whole
fn strip_stroke(c: char) -> char {
    match c {
        'ø' => 'o',
        'đ' | 'ð' => 'd',
        'ł' => 'l',
        'ħ' => 'h',
        _ => c,
    }
}

fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn display_width_combining() {
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn display_width_tab() {
        assert_eq!(display_width("a\tb"), 6);
    }

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello\u{2026}");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_does_not_split_wide_chars() {
        // 你 is 2 cells; budget of 2 leaves room for only one cell before the ellipsis
        assert_eq!(truncate_to_width("你好世界", 3), "你\u{2026}");
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
        assert_eq!(fit_to_width("abcdef", 4), "abc\u{2026}");
    }

    #[test]
    fn pop_grapheme_removes_cluster() {
        let mut s = String::from("cafe\u{0301}");
        assert!(pop_grapheme(&mut s));
        assert_eq!(s, "caf");
        let mut empty = String::new();
        assert!(!pop_grapheme(&mut empty));
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        let mut names = vec!["Banana", "apple", "Cherry"];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(names, vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn locale_compare_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Task", "task"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_accents_sort_with_base_letter() {
        assert_eq!(locale_compare("café", "cafes"), Ordering::Less);
        assert_eq!(locale_compare("cafe", "café"), Ordering::Less);
        assert_eq!(locale_compare("Éclair", "fig"), Ordering::Less);
        assert_eq!(locale_compare("søk", "sol"), Ordering::Less);
    }

    #[test]
    fn locale_compare_combining_accents_match_precomposed() {
        let precomposed = "caf\u{e9}";
        let combining = "cafe\u{301}";
        for other in ["cafes", "cafa", "cafe", "Caf\u{c9}"] {
            assert_eq!(
                locale_compare(precomposed, other),
                locale_compare(combining, other),
                "comparing against {other:?}"
            );
        }
        assert_eq!(locale_compare("cafe\u{301}", "cafes"), Ordering::Less);

        let mut names = vec!["cafes", "cafe\u{301}", "cafa"];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(names, vec!["cafa", "cafe\u{301}", "cafes"]);
    }
}
