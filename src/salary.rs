use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Range separator used by the upstream job feed (en dash, not ASCII hyphen).
pub const DEFAULT_SALARY_SEPARATOR: char = '–';

/// Separator in effect when none is configured explicitly: the
/// `JM_SALARY_SEPARATOR` environment variable (first char) if set,
/// otherwise [`DEFAULT_SALARY_SEPARATOR`].
pub fn default_salary_separator() -> char {
    std::env::var("JM_SALARY_SEPARATOR")
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(DEFAULT_SALARY_SEPARATOR)
}

/// 給与レンジ文字列から (min, max) を抽出する（ベストエフォート）
///
/// Contract:
/// - blank input yields `(0, 0)`;
/// - the text is split on `separator` and every non-digit character is
///   stripped from each of the first two sides before integer parsing;
/// - a single parseable value yields `(v, v)`;
/// - a side that fails to parse (or parses to zero on the right) degrades
///   to the other side's value, then to `0`.
///
/// Malformed strings never produce an error; they parse low instead. A
/// string using a different separator glyph therefore degrades to
/// single-value or `(0, 0)` parsing.
pub fn extract_salary_with_separator(text: &str, separator: char) -> (u64, u64) {
    if text.trim().is_empty() {
        return (0, 0);
    }

    let mut sides = text.split(separator);
    let left = sides.next().and_then(parse_side);
    let right = sides.next().and_then(parse_side);

    let min = left.unwrap_or(0);
    let max = right.filter(|&v| v != 0).unwrap_or(min);
    (min, max)
}

/// [`extract_salary_with_separator`] with the default separator.
pub fn extract_salary(text: &str) -> (u64, u64) {
    extract_salary_with_separator(text, default_salary_separator())
}

fn parse_side(raw: &str) -> Option<u64> {
    let digits = NON_DIGIT.replace_all(raw, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
