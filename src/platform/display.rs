//! Device display metrics
//!
//! The sheet background follows the physical screen's corner radius and the
//! layout keeps clear of the notch and home indicator. Both come from a
//! [`DisplayMetrics`] implementation so the interaction core can run against
//! fixed values in tests.

use crate::features::settings::DeviceSettings;

/// Margins reserved for device chrome, in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeArea {
    pub top: f32,
    pub bottom: f32,
}

/// Read-only queries about the display the app runs on
pub trait DisplayMetrics: std::fmt::Debug {
    /// Screen corner radius, `None` when unknown
    fn corner_radius(&self) -> Option<f32>;

    fn safe_area(&self) -> SafeArea;

    /// Corner radius with the unknown case mapped to square corners
    fn resolved_corner_radius(&self) -> f32 {
        self.corner_radius()
            .filter(|radius| radius.is_finite() && *radius >= 0.0)
            .unwrap_or(0.0)
    }
}

/// Metrics taken from the user's device settings
///
/// Desktop windows expose no hardware corner radius, so the emulated phone
/// geometry lives in configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredDisplay {
    corner_radius: Option<f32>,
    safe_area: SafeArea,
}

impl ConfiguredDisplay {
    pub fn from_settings(device: &DeviceSettings) -> Self {
        Self {
            corner_radius: device.corner_radius,
            safe_area: SafeArea {
                top: device.safe_area_top.max(0.0),
                bottom: device.safe_area_bottom.max(0.0),
            },
        }
    }
}

impl DisplayMetrics for ConfiguredDisplay {
    fn corner_radius(&self) -> Option<f32> {
        self.corner_radius
    }

    fn safe_area(&self) -> SafeArea {
        self.safe_area
    }
}
