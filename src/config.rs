//! JSON configuration for breakpoint thresholds.
//!
//! ```json
//! {
//!   "breakpoints": { "tablet": 768, "desktop": 992 },
//!   "initial_width": 1280
//! }
//! ```
//!
//! Every field is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{breakpoint::Breakpoints, error::ResponsiveError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponsiveConfig {
    pub breakpoints: Breakpoints,
    /// Width used before a host reports its real size.
    pub initial_width: u32,
}

impl ResponsiveConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ResponsiveError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResponsiveError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| ResponsiveError::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            tablet = config.breakpoints.tablet(),
            desktop = config.breakpoints.desktop(),
            "loaded responsive config"
        );
        Ok(config)
    }
}
