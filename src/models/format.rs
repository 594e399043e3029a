use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{MacGenError, MacGenResult};

/// A file format the generated addresses can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `{"macAddress": [...]}`, pretty-printed.
    Json,

    /// A single comma-separated record.
    Csv,
}

impl OutputFormat {
    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Appends this format's extension to `base`.
    ///
    /// Any extension already present on `base` is kept, so `out.v1` becomes
    /// `out.v1.csv`.
    pub fn path_for(self, base: &Path) -> PathBuf {
        let mut path = OsString::from(base.as_os_str());
        path.push(".");
        path.push(self.extension());
        PathBuf::from(path)
    }

    /// Parses a `--format` value.
    ///
    /// Accepts `csv`, `json`, `json,csv` or `csv,json`, ignoring case and
    /// surrounding whitespace. A combined request always yields JSON first.
    pub fn parse_list(input: &str) -> MacGenResult<Vec<OutputFormat>> {
        let tokens: Vec<String> = input.split(',').map(|t| t.trim().to_lowercase()).collect();

        let parse_one = |token: &str| match token {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        };

        let formats = match tokens.as_slice() {
            [single] => parse_one(single.as_str()).map(|f| vec![f]),
            [first, second] => match (parse_one(first.as_str()), parse_one(second.as_str())) {
                (Some(a), Some(b)) if a != b => Some(vec![OutputFormat::Json, OutputFormat::Csv]),
                _ => None,
            },
            _ => None,
        };

        formats.ok_or_else(|| {
            MacGenError::ConfigurationError(format!("Invalid format specified: {input}"))
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
