//! Plain-text rendering of table and pager views.
//!
//! The renderer lays out a [`TableView`] as a fixed-width grid and a
//! [`PagerView`] as a single line. ANSI colours for tones are optional.

pub mod text;

use crossterm::style::Stylize;

use crate::column::{Alignment, ColumnWidth};
use crate::display::{DisplayValue, Tone};
use crate::pager::{PagerItem, PagerView};
use crate::sort::SortIndicator;
use crate::table::{PageControls, RowActions, TableBody, TableView};

use self::text::{display_width, fit};

const SEPARATOR: &str = " │ ";
const PIXELS_PER_CELL: u32 = 8;

/// Renders views to strings.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: usize,
    colored: bool,
    min_column: usize,
    max_auto: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            width: 100,
            colored: false,
            min_column: 3,
            max_auto: 40,
        }
    }
}

impl TextRenderer {
    /// Create a renderer targeting `width` terminal cells.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Enable ANSI colours.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Cap for auto-sized columns.
    pub fn max_auto_width(mut self, width: usize) -> Self {
        self.max_auto = width.max(self.min_column);
        self
    }

    /// Render a table followed by an optional pager.
    pub fn render(&self, table: &TableView, pager: Option<&PagerView>) -> String {
        let mut out = self.render_table(table);
        if let Some(pager) = pager {
            out.push('\n');
            out.push_str(&self.render_pager(pager));
        }
        out
    }

    /// Render the table grid.
    pub fn render_table(&self, view: &TableView) -> String {
        let widths = self.column_widths(view);
        let separators = display_width(SEPARATOR) * widths.len().saturating_sub(1);
        let total: usize = widths.iter().sum::<usize>() + separators;

        let mut lines = Vec::new();

        let header: Vec<String> = view
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, &w)| {
                let cell = fit(&header_text(&header.label, header.indicator), w, header.align);
                self.paint(cell, Tone::Default, true)
            })
            .collect();
        lines.push(header.join(SEPARATOR));
        lines.push(
            widths
                .iter()
                .map(|&w| "─".repeat(w))
                .collect::<Vec<_>>()
                .join("─┼─"),
        );

        match &view.body {
            TableBody::Empty { message, .. } => {
                lines.push(self.paint(centered(message, total), Tone::Muted, false));
            }
            TableBody::Rows(rows) => {
                for row in rows {
                    let mut cells: Vec<String> = row
                        .cells
                        .iter()
                        .zip(&widths)
                        .zip(&view.headers)
                        .map(|((cell, &w), header)| {
                            self.paint_display(&cell.display, w, header.align)
                        })
                        .collect();
                    if let (Some(actions), Some(&w)) = (row.actions, widths.last()) {
                        cells.push(fit(&actions_text(actions), w, Alignment::Left));
                    }
                    lines.push(cells.join(SEPARATOR));
                }
            }
        }

        if let Some(controls) = view.controls {
            lines.push(String::new());
            lines.push(centered(&controls_text(controls), total));
        }

        lines
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the pager line.
    pub fn render_pager(&self, view: &PagerView) -> String {
        let mut parts = Vec::new();
        parts.push(if view.previous.enabled { "‹" } else { " " }.to_string());
        for item in &view.items {
            parts.push(match item {
                PagerItem::Page { number, active: true } => {
                    self.paint(format!("[{}]", number), Tone::Accent, true)
                }
                PagerItem::Page { number, .. } => number.to_string(),
                PagerItem::Ellipsis => "…".to_string(),
            });
        }
        parts.push(if view.next.enabled { "›" } else { " " }.to_string());

        let mut line = parts.join(" ");
        if let Some(summary) = view.summary {
            line.push_str("    ");
            line.push_str(&self.paint(summary.to_string(), Tone::Muted, false));
        }
        if let Some(selector) = &view.page_size {
            let options: Vec<String> = selector.options.iter().map(ToString::to_string).collect();
            line.push_str(&format!(
                "    per page: {} ({})",
                selector.current,
                options.join("/")
            ));
        }
        line.trim_end().to_string()
    }

    fn column_widths(&self, view: &TableView) -> Vec<usize> {
        let mut widths: Vec<usize> = view
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let natural = view
                    .rows()
                    .iter()
                    .map(|row| match row.cells.get(i) {
                        Some(cell) => display_width(&cell.display.plain_text()),
                        None => row.actions.map_or(0, |a| display_width(&actions_text(a))),
                    })
                    .chain(std::iter::once(display_width(&header_text(
                        &header.label,
                        header.indicator,
                    ))))
                    .max()
                    .unwrap_or(0);

                let hinted = match &header.width {
                    ColumnWidth::Percent(pct) => {
                        ((*pct as f64 / 100.0) * self.width as f64).round() as usize
                    }
                    ColumnWidth::Pixels(px) => (px / PIXELS_PER_CELL) as usize,
                    ColumnWidth::Auto | ColumnWidth::Raw(_) => natural.min(self.max_auto),
                };
                // No single column is wider than the whole grid.
                hinted.min(self.width).max(self.min_column)
            })
            .collect();

        // Shrink the widest columns until the grid fits.
        let sep = display_width(SEPARATOR) * widths.len().saturating_sub(1);
        while widths.iter().sum::<usize>() + sep > self.width {
            let Some((idx, &widest)) = widths.iter().enumerate().max_by_key(|(_, w)| **w) else {
                break;
            };
            if widest <= self.min_column {
                break;
            }
            widths[idx] -= 1;
        }
        widths
    }

    fn paint_display(&self, display: &DisplayValue, width: usize, align: Alignment) -> String {
        let cell = fit(&display.plain_text(), width, align);
        let bold = matches!(display, DisplayValue::Badge { .. });
        self.paint(cell, display.tone(), bold)
    }

    fn paint(&self, text: String, tone: Tone, bold: bool) -> String {
        if !self.colored {
            return text;
        }
        let styled = match tone {
            Tone::Default => text.stylize(),
            Tone::Muted => text.dark_grey(),
            Tone::Positive => text.green(),
            Tone::Negative => text.red(),
            Tone::Warning => text.yellow(),
            Tone::Info => text.blue(),
            Tone::Accent => text.magenta(),
        };
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

/// Centre `s` across `width`, widening instead of truncating.
fn centered(s: &str, width: usize) -> String {
    fit(s, width.max(display_width(s)), Alignment::Center)
}

fn header_text(label: &str, indicator: Option<SortIndicator>) -> String {
    match indicator {
        None => label.to_string(),
        Some(SortIndicator::Neutral) => format!("{} ↕", label),
        Some(SortIndicator::Ascending) => format!("{} ▲", label),
        Some(SortIndicator::Descending) => format!("{} ▼", label),
    }
}

fn actions_text(actions: RowActions) -> String {
    match (actions.view, actions.delete) {
        (true, true) => "View details  ✕".to_string(),
        (true, false) => "View details".to_string(),
        (false, true) => "✕".to_string(),
        (false, false) => String::new(),
    }
}

fn controls_text(controls: PageControls) -> String {
    let prev = if controls.prev_enabled { "‹ Previous" } else { "          " };
    let next = if controls.next_enabled { "Next ›" } else { "      " };
    format!("{}   {}   {}", prev, controls, next)
}
