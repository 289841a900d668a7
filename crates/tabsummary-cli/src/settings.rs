use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use tabsummary_core::ingest::CsvOptions;
use tabsummary_summarize::SummaryOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvSettings {
    pub delimiter: char,
    pub has_headers: bool,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_headers: true,
        }
    }
}

impl CsvSettings {
    pub fn to_options(&self) -> Result<CsvOptions, SettingsError> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(SettingsError::InvalidDelimiter(self.delimiter))?;
        Ok(CsvOptions {
            delimiter,
            has_headers: self.has_headers,
        })
    }
}

/// Contents of the optional `--config` TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub summary: SummaryOptions,
    pub csv: CsvSettings,
}

/// Command-line values that take precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Levels shown for categorical columns.
    #[arg(long)]
    pub max_level: Option<usize>,
    /// Skip chart rendering.
    #[arg(long, default_value_t = false)]
    pub no_graph: bool,
    /// Directory for chart images.
    #[arg(long)]
    pub tmp_dir: Option<PathBuf>,
    /// Wrap the HTML table in a collapsible section.
    #[arg(long, default_value_t = false)]
    pub collapsible: bool,
    /// Number of worker threads.
    #[arg(long)]
    pub num_proc: Option<usize>,
    /// Maximum characters shown per categorical value.
    #[arg(long)]
    pub max_str_len: Option<usize>,
    /// Field delimiter of the input file.
    #[arg(long)]
    pub delimiter: Option<char>,
    /// Treat the first line as data.
    #[arg(long, default_value_t = false)]
    pub no_headers: bool,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        let summary = &mut self.summary;
        if let Some(max_level) = overrides.max_level {
            summary.max_level = max_level;
        }
        if overrides.no_graph {
            summary.show_graph = false;
        }
        if let Some(tmp_dir) = &overrides.tmp_dir {
            summary.tmp_dir = tmp_dir.clone();
        }
        if overrides.collapsible {
            summary.is_collapsible = true;
        }
        if let Some(num_proc) = overrides.num_proc {
            summary.num_proc = num_proc;
        }
        if let Some(max_str_len) = overrides.max_str_len {
            summary.max_str_len = max_str_len;
        }
        if let Some(delimiter) = overrides.delimiter {
            self.csv.delimiter = delimiter;
        }
        if overrides.no_headers {
            self.csv.has_headers = false;
        }
    }
}
