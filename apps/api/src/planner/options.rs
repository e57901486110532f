//! Selectbox option lists and the default resolver used to pre-fill the form.

pub const STATUS_OPTIONS: &[&str] = &["大学生・大学院生", "高校生", "中学生", "社会人", "その他"];

pub const MBTI_OPTIONS: &[&str] = &[
    "わからない",
    "INTJ",
    "INTP",
    "ENTJ",
    "ENTP",
    "INFJ",
    "INFP",
    "ENFJ",
    "ENFP",
    "ISTJ",
    "ISFJ",
    "ESTJ",
    "ESFJ",
    "ISTP",
    "ISFP",
    "ESTP",
    "ESFP",
];

pub const PERIOD_OPTIONS: &[&str] = &["短期（1-2週間）", "1-3ヶ月", "半年", "1年", "2年以上"];

pub const BUDGET_OPTIONS: &[&str] = &["50万円以下", "50-100万円", "100-200万円", "潤沢"];

/// Returns the position of `value` in `options`, or `fallback` when the value
/// is absent or not a member. The result is always a valid index for a
/// non-empty list; an empty list yields 0.
pub fn resolve_default_index(options: &[&str], value: Option<&str>, fallback: usize) -> usize {
    value
        .and_then(|v| options.iter().position(|o| *o == v))
        .unwrap_or_else(|| fallback.min(options.len().saturating_sub(1)))
}

/// The option selected by [`resolve_default_index`].
pub fn resolve_option<'a>(options: &[&'a str], value: Option<&str>, fallback: usize) -> &'a str {
    options
        .get(resolve_default_index(options, value, fallback))
        .copied()
        .unwrap_or_default()
}
