//! Deployment-time contract configuration
//!
//! Every setting here is fixed per deployment, never per call. The file
//! format is TOML; all fields are optional.
//!
//! ```toml
//! missing_attribute = "strict"
//! caller_binding = "require_caller"
//! traceability_base_url = "https://getreech.example.org/batch/"
//!
//! [participant_partition]
//! kind = "private"
//! collection = "FisherCollection"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ExError, ExErrorKind};
use crate::keyspace::Partition;
use crate::policy::{CallerBinding, MissingAttributeMode};

pub const DEFAULT_TRACEABILITY_BASE_URL: &str = "https://getreech.example.org/batch/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractConfig {
    pub missing_attribute: MissingAttributeMode,
    pub caller_binding: CallerBinding,
    pub participant_partition: Partition,
    pub traceability_base_url: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            missing_attribute: MissingAttributeMode::Strict,
            caller_binding: CallerBinding::RequireCaller,
            participant_partition: Partition::default(),
            traceability_base_url: DEFAULT_TRACEABILITY_BASE_URL.to_string(),
        }
    }
}

impl ContractConfig {
    /// # Errors
    ///
    /// Returns `InvalidInput` if `s` is not valid configuration TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ExError> {
        toml::from_str(s).map_err(|e| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("load_config")
                .with_message(e.to_string())
        })
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `InvalidInput` if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_message(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}
