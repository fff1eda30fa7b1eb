//! Status reporting configuration
//!
//! Loaded from `status.yaml`. Holds the default description budget and
//! named per-backend budgets, since each code host caps status
//! descriptions differently:
//!
//! ```yaml
//! codec:
//!   max_length: 140
//!   ellipsis: "..."
//!   marker: "BaseSHA:"
//!
//! backends:
//!   gitlab:
//!     max_length: 255
//!   gitea:
//!     max_length: 140
//!     ellipsis: "…"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::{load_file, LoadError};
use crate::description::{CodecConfig, CodecError, DescriptionCodec};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusConfig {
    /// Budget used when no backend is named, or the name is unknown
    #[serde(default)]
    pub codec: CodecConfig,

    /// Named per-backend budgets
    #[serde(default)]
    pub backends: HashMap<String, CodecConfig>,
}

impl StatusConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        load_file(path.as_ref())
    }

    /// Get the codec config for a backend name
    pub fn codec_config_for(&self, backend: &str) -> &CodecConfig {
        match self.backends.get(backend) {
            Some(config) => config,
            None => {
                if backend != "default" {
                    tracing::debug!("No codec config for backend '{}', using default", backend);
                }
                &self.codec
            }
        }
    }

    /// Build a validated codec for a backend name
    pub fn codec_for(&self, backend: &str) -> Result<DescriptionCodec, CodecError> {
        DescriptionCodec::new(self.codec_config_for(backend).clone())
    }
}
