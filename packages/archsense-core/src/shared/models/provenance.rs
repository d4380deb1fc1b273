//! Source provenance of an extracted declaration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a declaration came from (file + 1-based line)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provenance {
    pub file_path: String,
    #[serde(default)]
    pub line: u32,
}

impl Provenance {
    pub fn new(file_path: impl Into<String>, line: u32) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.file_path)
        } else {
            write!(f, "{}:{}", self.file_path, self.line)
        }
    }
}
