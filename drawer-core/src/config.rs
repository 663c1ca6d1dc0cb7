//! # Drawer Configuration
//!
//! The drawer reads a single optional YAML file. Every key is optional and
//! falls back to the defaults below.
//!
//! ## YAML Format
//!
//! ```yaml
//! locale: ru
//! week_start: Mon
//! decimal_separator: ","
//! snap_points:
//!   collapsed:
//!     pixels: 170
//!   half:
//!     pixels: 650
//!   full:
//!     fraction: 1.0
//! ```

use chrono::Weekday;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::{SnapPoint, SnapPosition};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Sheet heights for each snap position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPoints {
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub collapsed: SnapPoint,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub half: SnapPoint,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub full: SnapPoint,
}

impl SnapPoints {
    pub fn get(&self, position: SnapPosition) -> SnapPoint {
        match position {
            SnapPosition::Collapsed => self.collapsed,
            SnapPosition::Half => self.half,
            SnapPosition::Full => self.full,
        }
    }
}

impl Default for SnapPoints {
    fn default() -> Self {
        Self {
            collapsed: SnapPoint::Pixels(170),
            half: SnapPoint::Pixels(650),
            full: SnapPoint::Fraction(1.0),
        }
    }
}

/// Drawer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Locale code for labels, unknown codes render in English
    pub locale: String,
    /// First column of the calendar grid
    pub week_start: Weekday,
    /// Character the keypad offers next to the digits
    pub decimal_separator: char,
    pub snap_points: SnapPoints,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            locale: "ru".to_string(),
            week_start: Weekday::Mon,
            decimal_separator: ',',
            snap_points: SnapPoints::default(),
        }
    }
}

/// `Some(true)` when `lower` is strictly below `upper`, `None` when the two
/// units cannot be compared without knowing the screen height
fn strictly_below(lower: SnapPoint, upper: SnapPoint) -> Option<bool> {
    match (lower, upper) {
        (SnapPoint::Pixels(a), SnapPoint::Pixels(b)) => Some(a < b),
        (SnapPoint::Fraction(a), SnapPoint::Fraction(b)) => Some(a < b),
        _ => None,
    }
}

impl DrawerConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: DrawerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file, using the defaults if it doesn't exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No drawer config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml_content)?;
        debug!("Loaded drawer config from {:?}", path);
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        self.validate()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yaml::to_string(self)?;

        // Write to a temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, path)?;

        debug!("Saved drawer config to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let separator = self.decimal_separator;
        if separator.is_ascii_digit() || separator.is_whitespace() {
            return Err(ConfigError::InvalidSeparator(separator));
        }

        let points = self.snap_points;
        for point in [points.collapsed, points.half, points.full] {
            if let SnapPoint::Fraction(fraction) = point {
                if !(fraction > 0.0 && fraction <= 1.0) {
                    return Err(ConfigError::InvalidFraction(fraction));
                }
            }
        }

        let pairs = [
            (points.collapsed, points.half),
            (points.half, points.full),
            (points.collapsed, points.full),
        ];
        if pairs
            .iter()
            .any(|&(lower, upper)| strictly_below(lower, upper) == Some(false))
        {
            return Err(ConfigError::SnapPointsNotIncreasing);
        }

        Ok(())
    }

    /// Sheet height for a snap position
    pub fn snap_point(&self, position: SnapPosition) -> SnapPoint {
        self.snap_points.get(position)
    }
}
