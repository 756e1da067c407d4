/// Normalizes a manually keyed UK mobile number.
///
/// Repairs a leading letter `O` typed for zero, restores the leading zero of a
/// bare ten digit `7...` number, and drops spaces, hyphens, and parentheses.
/// Returns `None` unless the result is `07` or `+447` followed by nine digits.
pub fn normalize_mobile(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = match trimmed
        .strip_prefix("O7")
        .or_else(|| trimmed.strip_prefix("o7"))
    {
        Some(rest) => format!("07{rest}"),
        None => trimmed.to_string(),
    };

    if out.starts_with('7') && out.len() == 10 && is_digits(&out) {
        out.insert(0, '0');
    }

    out.retain(|ch| !matches!(ch, ' ' | '-' | '(' | ')'));

    if is_uk_mobile(&out) {
        Some(out)
    } else {
        None
    }
}

fn is_uk_mobile(value: &str) -> bool {
    let subscriber = match value
        .strip_prefix("07")
        .or_else(|| value.strip_prefix("+447"))
    {
        Some(rest) => rest,
        None => return false,
    };
    subscriber.len() == 9 && is_digits(subscriber)
}

fn is_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_digit())
}
