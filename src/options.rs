//! Write options.
//!
//! [`WriteOptions`] carries the two optional write parameters: the column
//! selection and the display headers. Options can be built in code or loaded
//! from YAML:
//!
//! ```yaml
//! columns: [Id, Name]
//! headers: [Identifier, Full Name]
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Column and header selection for a write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteOptions {
    /// Field names to write, in order. All registered fields when `None`.
    #[serde(default)]
    pub columns: Option<Vec<String>>,

    /// Text of the header line. The column names when `None`.
    #[serde(default)]
    pub headers: Option<Vec<String>>,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select and order the columns to write.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the header line text.
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Parse options from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load options from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
