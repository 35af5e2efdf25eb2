//! Column presets for the dashboard's tables.

use clap::ValueEnum;
use dashboard_lib::column::{Alignment, ColumnSpec};
use dashboard_lib::display::{DisplayValue, Tone};
use dashboard_lib::formatters::{self, DateStyle};
use dashboard_lib::model::Row;

/// Which table layout to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Subscribed users.
    Users,
    /// Recent predictions.
    Predictions,
    /// One sortable column per field of the first row.
    Generic,
}

impl Preset {
    /// Column definitions for this preset.
    pub fn columns(self, rows: &[Row]) -> Vec<ColumnSpec> {
        match self {
            Preset::Users => users(),
            Preset::Predictions => predictions(),
            Preset::Generic => generic(rows),
        }
    }

    /// Fields searched by the free-text query.
    pub fn search_fields(self, rows: &[Row]) -> Vec<String> {
        let fields: &[&str] = match self {
            Preset::Users => &["name", "email", "plan", "status", "promoCode"],
            Preset::Predictions => &["teamName", "category", "status", "description"],
            Preset::Generic => {
                return rows
                    .first()
                    .map(|row| row.field_names().into_iter().map(String::from).collect())
                    .unwrap_or_default();
            }
        };
        fields.iter().map(|f| f.to_string()).collect()
    }
}

fn users() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("User", "name")
            .width("25%")
            .sortable()
            .with_formatter(formatters::avatar("avatar")),
        ColumnSpec::new("Email", "email").width("20%").sortable(),
        ColumnSpec::new("Plan", "plan")
            .width("15%")
            .sortable()
            .with_formatter(formatters::badge(
                &[
                    ("new plan", "Premium", Tone::Positive),
                    ("premium", "Premium", Tone::Positive),
                    ("n/a", "Free", Tone::Muted),
                    ("enterprise", "Enterprise", Tone::Accent),
                    ("pro", "Pro", Tone::Info),
                    ("basic", "Basic", Tone::Warning),
                ],
                Tone::Positive,
            )),
        ColumnSpec::new("Registered", "createdAt")
            .width("15%")
            .sortable()
            .with_formatter(formatters::date(DateStyle::Iso)),
        ColumnSpec::new("Status", "status")
            .width("10%")
            .sortable()
            .with_formatter(formatters::badge(
                &[
                    ("active", "Active", Tone::Positive),
                    ("trial", "Trial", Tone::Warning),
                    ("expired", "Expired", Tone::Muted),
                ],
                Tone::Muted,
            )),
        ColumnSpec::new("Amount", "amount")
            .width("10%")
            .sortable()
            .align(Alignment::Right)
            .with_formatter(formatters::currency_usd()),
        ColumnSpec::new("Promo Code", "promoCode")
            .width("15%")
            .sortable()
            .with_formatter(formatters::placeholder("No code")),
    ]
}

fn predictions() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Sports Type", "category")
            .width("15%")
            .sortable()
            .with_formatter(formatters::with_image("image")),
        ColumnSpec::new("Team", "teamName").width("20%").sortable(),
        ColumnSpec::new("Status", "status")
            .width("15%")
            .sortable()
            .with_formatter(formatters::badge(
                &[
                    ("win", "Win", Tone::Positive),
                    ("lose", "Lose", Tone::Negative),
                    ("cancel", "Cancel", Tone::Warning),
                ],
                Tone::Muted,
            )),
        ColumnSpec::new("Created", "createdAt")
            .width("12%")
            .sortable()
            .with_formatter(formatters::date(DateStyle::Short)),
        ColumnSpec::new("Notes", "description").width("23%").sortable(),
        // Declared here, so the table does not synthesize its own.
        ColumnSpec::new("Action", "action")
            .width("10%")
            .formatter(|_value, _row| DisplayValue::styled("✎ Edit", Tone::Info)),
    ]
}

fn generic(rows: &[Row]) -> Vec<ColumnSpec> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    first
        .field_names()
        .into_iter()
        .map(|field| ColumnSpec::new(title_case(field), field).sortable())
        .collect()
}

/// `createdAt` → `Created At`, `promo_code` → `Promo Code`.
fn title_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    let mut upper_next = true;
    let mut prev_lower = false;
    for c in field.chars() {
        if c == '_' || c == '-' {
            out.push(' ');
            upper_next = true;
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        if upper_next {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        upper_next = false;
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    out
}
