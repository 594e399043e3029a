use std::path::{Path, PathBuf};

use super::format::OutputFormat;
use super::mac_address::Delimiter;
use crate::{MacGenError, MacGenResult};

/// Number of addresses generated when no count is given.
pub const DEFAULT_COUNT: i64 = 10;

/// Validated settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of addresses to generate. Always at least 1.
    pub count: usize,
    /// Separator between octets.
    pub delimiter: Delimiter,
    /// Output path without extension.
    pub output: PathBuf,
    /// Formats to write, in write order.
    pub formats: Vec<OutputFormat>,
    /// Fixed seed for reproducible output. Time-seeded when `None`.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Create a new generator configuration builder.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Builder for generator configuration.
///
/// Values are taken as given on the command line and checked together in
/// [`GeneratorConfigBuilder::build`].
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    count: i64,
    delimiter: Delimiter,
    output: Option<PathBuf>,
    format: String,
    seed: Option<u64>,
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            delimiter: Delimiter::default(),
            output: None,
            format: OutputFormat::Csv.extension().to_string(),
            seed: None,
        }
    }
}

impl GeneratorConfigBuilder {
    /// Set the number of addresses to generate.
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Set the octet delimiter.
    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Use `-` instead of `:` between octets.
    pub fn hyphen(self, hyphen: bool) -> Self {
        self.delimiter(if hyphen { Delimiter::Hyphen } else { Delimiter::Colon })
    }

    /// Set the output path, without extension.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the output formats, e.g. `csv`, `json` or `json,csv`.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Seed the random source for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the settings and build the configuration.
    pub fn build(self) -> MacGenResult<GeneratorConfig> {
        let count = usize::try_from(self.count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                MacGenError::ConfigurationError(
                    "Number of MAC addresses is required and must be greater than 0".into(),
                )
            })?;

        let output = self
            .output
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                MacGenError::ConfigurationError("Output file path and name are required".into())
            })?;

        let formats = OutputFormat::parse_list(&self.format)?;

        check_output_dir(&output)?;

        Ok(GeneratorConfig {
            count,
            delimiter: self.delimiter,
            output,
            formats,
            seed: self.seed,
        })
    }
}

// Output directories are never created. A trailing separator makes the
// output path itself the directory, as in `out/`.
fn check_output_dir(output: &Path) -> MacGenResult<()> {
    let dir = if output.as_os_str().to_string_lossy().ends_with(std::path::is_separator) {
        Some(output)
    } else {
        output.parent()
    };

    match dir {
        Some(dir) if !dir.as_os_str().is_empty() && dir != Path::new(".") => {
            if dir.is_dir() {
                Ok(())
            } else {
                Err(MacGenError::MissingDirectory(dir.to_path_buf()))
            }
        }
        _ => Ok(()),
    }
}
