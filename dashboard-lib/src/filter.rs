//! Row filtering for search boxes and dropdown filters.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::model::Row;

/// How the free-text query is matched against search fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy match.
    Fuzzy,
}

/// Free-text search plus exact-match field filters.
///
/// A row passes when the query matches any search field (or the query is
/// empty) and every exact filter matches its field case-insensitively.
///
/// # Example
///
/// ```
/// use dashboard_lib::filter::RowFilter;
/// use dashboard_lib::model::Row;
///
/// let filter = RowFilter::new(["teamName", "status"])
///     .with_query("lak")
///     .with_exact("sportsType", "basketball");
///
/// let row = Row::new()
///     .set("teamName", "Lakers")
///     .set("status", "win")
///     .set("sportsType", "Basketball");
/// assert!(filter.matches(&row));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    query: String,
    search_fields: Vec<String>,
    exact: Vec<(String, String)>,
    mode: MatchMode,
}

impl RowFilter {
    /// Create a filter searching the given fields.
    pub fn new<I, S>(search_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the query (builder style).
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Add an exact-match filter (builder style).
    pub fn with_exact(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_exact(field, value);
        self
    }

    /// Set the match mode (builder style).
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MatchMode) {
        self.mode = mode;
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// Replace the query. Surrounding whitespace is ignored.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into().trim().to_string();
    }

    /// Set or replace the exact filter on `field`. An empty value removes it.
    pub fn set_exact(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        self.exact.retain(|(f, _)| *f != field);
        if !value.is_empty() {
            self.exact.push((field, value));
        }
    }

    /// Active exact filters.
    pub fn exact_filters(&self) -> &[(String, String)] {
        &self.exact
    }

    /// Remove the query and all exact filters.
    pub fn clear(&mut self) {
        self.query.clear();
        self.exact.clear();
    }

    /// Returns `true` if the filter lets every row through.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.exact.is_empty()
    }

    /// Check a single row.
    pub fn matches(&self, row: &Row) -> bool {
        let mut matcher = Matcher::new(Config::DEFAULT);
        self.matches_with(row, &mut matcher, &self.pattern())
    }

    /// Rows passing the filter, in their original order.
    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        if self.is_empty() {
            return rows.to_vec();
        }
        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = self.pattern();
        rows.iter()
            .filter(|row| self.matches_with(row, &mut matcher, &pattern))
            .cloned()
            .collect()
    }

    fn pattern(&self) -> Option<Pattern> {
        match self.mode {
            MatchMode::Fuzzy if !self.query.is_empty() => Some(Pattern::new(
                &self.query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            )),
            _ => None,
        }
    }

    fn matches_with(&self, row: &Row, matcher: &mut Matcher, pattern: &Option<Pattern>) -> bool {
        let exact_ok = self.exact.iter().all(|(field, expected)| {
            row.value(field)
                .render_text()
                .eq_ignore_ascii_case(expected)
        });
        if !exact_ok {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }

        let needle = self.query.to_lowercase();
        self.search_fields.iter().any(|field| {
            let haystack = row.value(field).render_text();
            match pattern {
                Some(pattern) => {
                    let mut buf = Vec::new();
                    pattern
                        .score(Utf32Str::new(&haystack, &mut buf), matcher)
                        .is_some()
                }
                None => haystack.to_lowercase().contains(&needle),
            }
        })
    }
}
