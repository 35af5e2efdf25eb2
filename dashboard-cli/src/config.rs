//! View configuration.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use dashboard_lib::pager::{DEFAULT_PAGE_SIZE_OPTIONS, PagerConfig};
use dashboard_lib::pagination::DEFAULT_PAGE_WINDOW;
use dashboard_lib::table::DEFAULT_NO_DATA_MESSAGE;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::paths;

/// How tables are paged and drawn.
///
/// Every field is optional in the config file; missing fields keep their
/// defaults.
///
/// ```json
/// { "page_size": 20, "colored": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Page numbers shown around the current page.
    pub page_window: usize,
    /// Sizes offered by the page-size selector.
    pub page_size_options: Vec<usize>,
    /// Show the entry summary and page-size selector under the table.
    pub show_page_size: bool,
    /// Target width in terminal cells.
    pub width: usize,
    /// Colour badges and styled cells.
    pub colored: bool,
    /// Placeholder for empty tables.
    pub no_data_message: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_window: DEFAULT_PAGE_WINDOW,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            show_page_size: true,
            width: 100,
            colored: true,
            no_data_message: DEFAULT_NO_DATA_MESSAGE.to_string(),
        }
    }
}

impl ViewConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Pager settings derived from this config.
    pub fn pager(&self) -> PagerConfig {
        PagerConfig::new()
            .with_window(self.page_window)
            .with_page_size_options(self.page_size_options.clone())
            .with_show_page_size(self.show_page_size)
    }

    /// Load from `explicit`, or from the default config file.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match paths::config_file() {
            Some(path) => Self::load_or_default(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`load_from`](Self::load_from), but a missing file yields the
    /// defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, CliError> {
        match Self::load_from(path) {
            Err(CliError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_window, 3);
        assert_eq!(config.page_size_options, vec![5, 10, 15, 20, 25, 30, 50]);
        assert!(config.show_page_size);
        assert_eq!(config.no_data_message, "No data found.");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "page_size": 25, "colored": false }"#).unwrap();

        let config = ViewConfig::load(Some(&path)).unwrap();
        assert_eq!(config.page_size, 25);
        assert!(!config.colored);
        assert_eq!(config.width, 100);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ page_size: ").unwrap();

        assert!(matches!(
            ViewConfig::load_from(&path),
            Err(CliError::Config { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(
            ViewConfig::load(Some(&path)),
            Err(CliError::Io { .. })
        ));
        assert_eq!(ViewConfig::load_or_default(&path).unwrap(), ViewConfig::default());
    }

    #[test]
    fn test_pager_config() {
        let pager = ViewConfig::default().pager();
        assert_eq!(pager.window, 3);
        assert!(pager.show_page_size);
        assert_eq!(pager.min_items, 0);
    }
}
