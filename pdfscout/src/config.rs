use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{SearchError, SearchResult};
use crate::search::matcher::MatchMode;

/// Worker count used when neither the CLI nor a config file sets one
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// Configuration for a search run.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations in order of precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.pdfscout.yaml` in the current directory
/// 3. Global `$HOME/.config/pdfscout/config.yaml`
///
/// # Configuration Format
///
/// ```yaml
/// # Terms to look for (case-insensitive substrings)
/// terms: ["invoice"]
///
/// # Require every term instead of any term
/// match_all: false
///
/// # Root directory to search in
/// root_path: "./pdfs"
///
/// # Patterns to ignore (glob syntax)
/// ignore_patterns:
///   - "**/archive/**"
///
/// # Copy matching PDFs into this folder
/// save_dir: "./matches"
///
/// # Maximum number of files searched at once
/// max_workers: 8
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// Command-line arguments take precedence over config file values, see
/// `merge_with_cli`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Terms to search for
    #[serde(default)]
    pub terms: Vec<String>,

    /// When true a file matches only if it contains every term
    #[serde(default)]
    pub match_all: bool,

    /// Root directory to start search from
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// Patterns to ignore (supports glob syntax)
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Upper bound on concurrently running search tasks
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Folder that matching files are copied into
    #[serde(default)]
    pub save_dir: Option<PathBuf>,

    /// Whether to only show the summary instead of per-file lines
    #[serde(default)]
    pub stats_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            match_all: false,
            root_path: default_root_path(),
            ignore_patterns: Vec::new(),
            max_workers: default_max_workers(),
            save_dir: None,
            stats_only: false,
            log_level: default_log_level(),
        }
    }
}

impl SearchConfig {
    /// Configuration for a single term under `root`, everything else default
    pub fn new(root: impl Into<PathBuf>, term: impl Into<String>) -> Self {
        Self {
            terms: vec![term.into()],
            root_path: root.into(),
            ..Default::default()
        }
    }

    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from the default locations plus a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            dirs::config_dir().map(|p| p.join("pdfscout/config.yaml")),
            Some(PathBuf::from(".pdfscout.yaml")),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // An explicitly requested file must exist
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: CliOverrides) -> Self {
        if !cli_config.terms.is_empty() {
            self.terms = cli_config.terms;
        }
        if let Some(root) = cli_config.root_path {
            self.root_path = root;
        }
        if cli_config.match_all {
            self.match_all = true;
        }
        if !cli_config.ignore_patterns.is_empty() {
            self.ignore_patterns = cli_config.ignore_patterns;
        }
        if let Some(max_workers) = cli_config.max_workers {
            self.max_workers = max_workers;
        }
        if cli_config.save_dir.is_some() {
            self.save_dir = cli_config.save_dir;
        }
        if cli_config.stats_only {
            self.stats_only = true;
        }
        if let Some(level) = cli_config.log_level {
            self.log_level = level;
        }
        self
    }

    /// Match mode implied by `match_all`
    pub fn match_mode(&self) -> MatchMode {
        if self.match_all {
            MatchMode::All
        } else {
            MatchMode::Any
        }
    }

    /// Pre-flight checks that must pass before any task is submitted
    pub fn validate(&self) -> SearchResult<()> {
        if self.max_workers == 0 {
            return Err(SearchError::invalid_configuration(
                "max_workers must be at least 1, got 0",
            ));
        }
        if self.terms.is_empty() {
            return Err(SearchError::invalid_configuration(
                "at least one search term is required",
            ));
        }
        if self.terms.iter().any(|t| t.is_empty()) {
            return Err(SearchError::invalid_configuration(
                "search terms must not be empty",
            ));
        }
        Ok(())
    }
}

/// Values supplied on the command line; `None`/empty means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub terms: Vec<String>,
    pub root_path: Option<PathBuf>,
    pub match_all: bool,
    pub ignore_patterns: Vec<String>,
    pub max_workers: Option<usize>,
    pub save_dir: Option<PathBuf>,
    pub stats_only: bool,
    pub log_level: Option<String>,
}

/// Converts a raw worker count into a valid one
pub fn parse_worker_count(raw: i64) -> SearchResult<usize> {
    match usize::try_from(raw) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(SearchError::invalid_configuration(format!(
            "max_workers must be a positive integer, got {}",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            terms: ["invoice", "total"]
            match_all: true
            root_path: "pdfs"
            ignore_patterns: ["**/archive/**"]
            max_workers: 4
            save_dir: "matches"
            stats_only: true
            log_level: "debug"
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = SearchConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.terms, vec!["invoice", "total"]);
        assert!(config.match_all);
        assert_eq!(config.root_path, PathBuf::from("pdfs"));
        assert_eq!(config.ignore_patterns, vec!["**/archive/**".to_string()]);
        assert_eq!(config.max_workers, 4);
        assert_eq!(config.save_dir, Some(PathBuf::from("matches")));
        assert!(config.stats_only);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let config_content = r#"
            terms: ["hello"]
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = SearchConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.terms, vec!["hello"]);
        assert_eq!(config.root_path, PathBuf::from("."));
        assert!(!config.match_all);
        assert!(config.ignore_patterns.is_empty());
        assert_eq!(config.max_workers, DEFAULT_MAX_WORKERS);
        assert_eq!(config.save_dir, None);
        assert!(!config.stats_only);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_config() {
        let config_content = r#"
            terms: 123  # Should be a list
            max_workers: "many"  # Should be number
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let result = SearchConfig::load_from(Some(&config_path));
        assert!(result.is_err(), "Expected error loading invalid config");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = SearchConfig::load_from(Some(Path::new("nonexistent.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let config_file = SearchConfig {
            terms: vec!["invoice".to_string()],
            match_all: false,
            root_path: PathBuf::from("pdfs"),
            ignore_patterns: vec!["**/old/**".to_string()],
            max_workers: 4,
            save_dir: Some(PathBuf::from("matches")),
            stats_only: false,
            log_level: "warn".to_string(),
        };

        let cli = CliOverrides {
            terms: vec!["receipt".to_string()],
            root_path: Some(PathBuf::from("scans")),
            match_all: true,
            max_workers: Some(2),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };

        let merged = config_file.merge_with_cli(cli);
        assert_eq!(merged.terms, vec!["receipt"]); // CLI value
        assert_eq!(merged.root_path, PathBuf::from("scans")); // CLI value
        assert!(merged.match_all); // CLI value
        assert_eq!(merged.ignore_patterns, vec!["**/old/**".to_string()]); // File value
        assert_eq!(merged.max_workers, 2); // CLI value
        assert_eq!(merged.save_dir, Some(PathBuf::from("matches"))); // File value
        assert!(!merged.stats_only); // File value
        assert_eq!(merged.log_level, "debug"); // CLI value
    }

    #[test]
    fn test_validate() {
        let config = SearchConfig::new(".", "hello");
        assert!(config.validate().is_ok());

        let config = SearchConfig {
            max_workers: 0,
            ..SearchConfig::new(".", "hello")
        };
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfiguration(_))
        ));

        let config = SearchConfig::default();
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfiguration(_))
        ));

        let config = SearchConfig::new(".", "");
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_parse_worker_count() {
        assert_eq!(parse_worker_count(1).unwrap(), 1);
        assert_eq!(parse_worker_count(16).unwrap(), 16);
        assert!(matches!(
            parse_worker_count(0),
            Err(SearchError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            parse_worker_count(-3),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_match_mode() {
        let mut config = SearchConfig::new(".", "a");
        assert_eq!(config.match_mode(), MatchMode::Any);
        config.match_all = true;
        assert_eq!(config.match_mode(), MatchMode::All);
    }
}
