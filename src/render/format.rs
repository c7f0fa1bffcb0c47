//! Display formatting helpers shared by the views

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Currency symbol used throughout the dashboard (Bangladeshi taka)
pub const CURRENCY: &str = "৳";

/// Format an amount with thousands separators and two decimals: `৳1,234.50`
pub fn format_money(amount: f64) -> String {
    format!("{}{}", CURRENCY, group_thousands(amount))
}

/// `1234.5` → `1,234.50`; negative values keep a leading `-`
pub fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Signed display for transactions: `+৳50.00` / `-৳12.34`
pub fn format_signed_money(amount: f64) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };
    format!("{}{}", sign, format_money(amount.abs()))
}

/// Parse the timestamps the server emits (ISO 8601, with or without offset,
/// or a bare date)
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `3/7/2024`; unparseable input is returned unchanged
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `3/7/2024, 2:05:09 PM`; unparseable input is returned unchanged
pub fn format_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Upper-case the first character: `home` → `Home`
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
