//! Classification configuration
//!
//! Two-tier configuration:
//! - Level 1: Preset - `ClassificationConfig::from_preset(Preset::Strict)`
//! - Level 2: YAML v1 - preset plus per-field overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use archsense_core::config::{ClassificationConfig, Preset};
//!
//! let config = ClassificationConfig::from_preset(Preset::Permissive).parallel(true);
//! let config = ClassificationConfig::from_yaml_file("archsense.yaml")?;
//! ```

pub mod classification_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;

pub use classification_config::ClassificationConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use validation::Validatable;
