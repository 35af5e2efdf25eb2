//! Ready-made cell formatters.
//!
//! Each constructor returns a shareable [`Formatter`] for
//! [`ColumnSpec::with_formatter`](crate::column::ColumnSpec::with_formatter).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::column::Formatter;
use crate::display::{DisplayValue, IconSource, Tone};
use crate::model::{Row, Value};

/// Date rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `2025-01-05`
    Iso,
    /// `Jan 5, 2025`
    Short,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Iso => "%Y-%m-%d",
            DateStyle::Short => "%b %-d, %Y",
        }
    }
}

/// Plain text; blank values render empty.
pub fn text() -> Formatter {
    Arc::new(|value: &Value, _row: &Row| DisplayValue::from(value))
}

/// Text uppercased.
pub fn uppercase() -> Formatter {
    Arc::new(|value: &Value, _row: &Row| DisplayValue::text(value.render_text().to_uppercase()))
}

/// Badge looked up case-insensitively from `mapping` as `value → (label, tone)`.
///
/// Unknown values show as-is (or `N/A` when blank) with `fallback`.
pub fn badge(mapping: &[(&str, &str, Tone)], fallback: Tone) -> Formatter {
    let mapping: HashMap<String, (String, Tone)> = mapping
        .iter()
        .map(|(key, label, tone)| (key.to_lowercase(), (label.to_string(), *tone)))
        .collect();

    Arc::new(move |value: &Value, _row: &Row| {
        let raw = value.render_text();
        match mapping.get(&raw.to_lowercase()) {
            Some((label, tone)) => DisplayValue::badge(label.clone(), *tone),
            None if raw.is_empty() => DisplayValue::badge("N/A", fallback),
            None => DisplayValue::badge(raw, fallback),
        }
    })
}

/// Renames values through `mapping`; unmapped values pass through.
pub fn mapped(mapping: &[(&str, &str)]) -> Formatter {
    let mapping: HashMap<String, String> = mapping
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

    Arc::new(move |value: &Value, _row: &Row| {
        let raw = value.render_text();
        match mapping.get(&raw) {
            Some(to) => DisplayValue::text(to.clone()),
            None => DisplayValue::text(raw),
        }
    })
}

/// US dollar amount with 0–2 fraction digits.
///
/// Positive amounts are plain, zero is muted, negatives are negative-toned.
/// Non-numeric values render empty.
pub fn currency_usd() -> Formatter {
    Arc::new(|value: &Value, _row: &Row| {
        let Some(amount) = value.as_f64().filter(|a| a.is_finite()) else {
            return DisplayValue::Empty;
        };
        let text = format_usd(amount);
        let tone = if amount > 0.0 {
            Tone::Default
        } else if amount == 0.0 {
            Tone::Muted
        } else {
            Tone::Negative
        };
        DisplayValue::styled(text, tone)
    })
}

/// Date from an RFC 3339, `YYYY-MM-DD` or naive datetime string.
///
/// Blank values render empty; anything unparsable renders a muted
/// `Invalid date`.
pub fn date(style: DateStyle) -> Formatter {
    Arc::new(move |value: &Value, _row: &Row| {
        let raw = value.render_text();
        if raw.is_empty() {
            return DisplayValue::Empty;
        }
        match parse_date(&raw) {
            Some(date) => DisplayValue::text(date.format(style.pattern()).to_string()),
            None => DisplayValue::styled("Invalid date", Tone::Muted),
        }
    })
}

/// Value as-is, or a muted `placeholder` when blank or `-`.
pub fn placeholder(placeholder: &str) -> Formatter {
    let placeholder = placeholder.to_string();
    Arc::new(move |value: &Value, _row: &Row| {
        let raw = value.render_text();
        if raw.is_empty() || raw == "-" {
            DisplayValue::styled(placeholder.clone(), Tone::Muted)
        } else {
            DisplayValue::text(raw)
        }
    })
}

/// Name with an avatar taken from the sibling `image_field`.
///
/// Without an image the avatar is the uppercase initial of the name.
pub fn avatar(image_field: &str) -> Formatter {
    let image_field = image_field.to_string();
    Arc::new(move |value: &Value, row: &Row| {
        let name = match value.render_text() {
            name if name.is_empty() => "Unknown User".to_string(),
            name => name,
        };
        let source = match row.value(&image_field) {
            Value::String(url) if !url.trim().is_empty() => IconSource::Url(url.clone()),
            _ => IconSource::Initial(
                name.chars()
                    .next()
                    .and_then(|c| c.to_uppercase().next())
                    .unwrap_or('U'),
            ),
        };
        DisplayValue::icon(source, name)
    })
}

/// Label with an icon from the sibling `image_field`, when present.
pub fn with_image(image_field: &str) -> Formatter {
    let image_field = image_field.to_string();
    Arc::new(move |value: &Value, row: &Row| {
        let label = value.render_text();
        match row.value(&image_field) {
            Value::String(url) if !url.trim().is_empty() => {
                DisplayValue::icon(IconSource::Url(url.clone()), label)
            }
            _ => DisplayValue::text(label),
        }
    })
}

/// Formats `amount` as `$1,234.56`, dropping trailing fraction zeros.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = thousands(cents / 100);
    let frac = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    if frac == 0 {
        format!("{}${}", sign, whole)
    } else if frac % 10 == 0 {
        format!("{}${}.{}", sign, whole, frac / 10)
    } else {
        format!("{}${}.{:02}", sign, whole, frac)
    }
}

/// Groups digits with commas: `2847` → `2,847`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
