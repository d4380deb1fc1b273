//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

/// Classification preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Explicit markers and repository matches only
    ///
    /// - Namespace / name conventions disabled
    /// - Repository suffix: `Repository`
    Strict,

    /// Full evidence chain (default)
    ///
    /// - Namespace convention: `.aggregate` / `.aggregates`
    /// - Name convention: `*Aggregate` / `*AggregateRoot`
    Conventional,

    /// Conventional plus looser repository naming
    ///
    /// - Repository suffixes: `Repository`, `Repo`, `Store`
    Permissive,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "conventional" => Ok(Self::Conventional),
            "permissive" => Ok(Self::Permissive),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: strict, conventional, permissive",
                s
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Conventional => "conventional",
            Self::Permissive => "permissive",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Conventional
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(Preset::from_str("strict").unwrap(), Preset::Strict);
        assert_eq!(Preset::from_str("STRICT").unwrap(), Preset::Strict);
        assert_eq!(Preset::from_str("conventional").unwrap(), Preset::Conventional);
        assert_eq!(Preset::from_str("Permissive").unwrap(), Preset::Permissive);
        assert!(Preset::from_str("lenient").is_err());
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(Preset::default(), Preset::Conventional);
        assert_eq!(Preset::default().to_string(), "conventional");
    }
}
