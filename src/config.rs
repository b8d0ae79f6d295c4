//! Occlusion build configuration
//!
//! Loaded from TOML. Every field has a default so a partial file (or no file
//! at all) is valid.

use crate::constants::{
    DEFAULT_GROUP_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_MAX_OBJECTS_PER_LEAF,
    DEFAULT_ROOT_PADDING_VOXELS,
};
use crate::error::{ErrorContext, OcclusionError, OcclusionResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcclusionConfig {
    /// Leaf capacity before a split
    pub max_objects_per_leaf: u32,
    /// GPU execution group size used for buffer padding
    pub group_size: u32,
    /// Split depth guard
    pub max_depth: u32,
    /// Padding around point-cloud bounds, in voxels
    pub root_padding_voxels: f32,
}

impl Default for OcclusionConfig {
    fn default() -> Self {
        Self {
            max_objects_per_leaf: DEFAULT_MAX_OBJECTS_PER_LEAF,
            group_size: DEFAULT_GROUP_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            root_padding_voxels: DEFAULT_ROOT_PADDING_VOXELS,
        }
    }
}

impl OcclusionConfig {
    pub fn from_toml_str(source: &str) -> OcclusionResult<Self> {
        let config: OcclusionConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> OcclusionResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).io_context(&path.display().to_string())?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded occlusion config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> OcclusionResult<()> {
        if self.max_objects_per_leaf == 0 {
            return Err(invalid("max_objects_per_leaf", self.max_objects_per_leaf, "must be >= 1"));
        }
        if self.group_size == 0 {
            return Err(invalid("group_size", self.group_size, "must be >= 1"));
        }
        if self.max_depth == 0 {
            return Err(invalid("max_depth", self.max_depth, "must be >= 1"));
        }
        if !self.root_padding_voxels.is_finite() || self.root_padding_voxels < 0.0 {
            return Err(invalid(
                "root_padding_voxels",
                self.root_padding_voxels,
                "must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> OcclusionError {
    OcclusionError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = OcclusionConfig::from_toml_str("max_objects_per_leaf = 8\n")
            .expect("Failed to parse config");
        assert_eq!(config.max_objects_per_leaf, 8);
        assert_eq!(config.group_size, DEFAULT_GROUP_SIZE);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = OcclusionConfig::from_toml_str("max_objects_per_leaf = 0\n");
        assert!(matches!(
            result,
            Err(OcclusionError::InvalidConfig { ref field, .. }) if field == "max_objects_per_leaf"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let result = OcclusionConfig::from_toml_str("group_size = \"sixty-four\"\n");
        assert!(matches!(result, Err(OcclusionError::ConfigParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "group_size = 32\nroot_padding_voxels = 1.5")
            .expect("Failed to write config");

        let config = OcclusionConfig::load(file.path()).expect("Failed to load config");
        assert_eq!(config.group_size, 32);
        assert_eq!(config.root_padding_voxels, 1.5);
        assert_eq!(config.max_objects_per_leaf, DEFAULT_MAX_OBJECTS_PER_LEAF);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = OcclusionConfig::load("/nonexistent/occlusion.toml");
        assert!(matches!(
            result,
            Err(OcclusionError::Io { ref path, .. }) if path.ends_with("occlusion.toml")
        ));
    }
}
