use rust_decimal::Decimal;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs().round_dp(2);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Scroll offset clamped so the last page stays full.
pub(crate) fn clamp_scroll(scroll: usize, len: usize, page: usize) -> usize {
    scroll.min(len.saturating_sub(page.max(1)))
}

/// Fraction of `budget` already spent, capped at 1.0 for gauges.
pub(crate) fn spend_ratio(spent: Decimal, budget: Decimal) -> f64 {
    use rust_decimal::prelude::ToPrimitive;

    if budget > Decimal::ZERO {
        spent
            .checked_div(budget)
            .and_then(|r| r.to_f64())
            .unwrap_or(1.0)
            .clamp(0.0, 1.0)
    } else if spent > Decimal::ZERO {
        1.0
    } else {
        0.0
    }
}

pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
