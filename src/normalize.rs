/// テキスト比較用の正規化（trim + 小文字化）
///
/// Every text equality and substring check in the matcher goes through this,
/// so comparisons are case- and surrounding-whitespace-insensitive.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Optional-field variant: `None` normalizes to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    normalize(text.unwrap_or_default())
}
