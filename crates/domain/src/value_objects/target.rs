//! Image-space coordinates and the hit-test window.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A point in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either component is NaN or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self, DomainError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DomainError::validation("Coordinates must be finite numbers"));
        }
        Ok(Self { x, y })
    }
}

/// Axis-aligned rectangle centred on a click.
///
/// A character counts as found when its true point lies inside the window
/// centred on the submitted click. Both edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBox {
    pub width: f64,
    pub height: f64,
}

impl TargetBox {
    /// The 60x60 window used by the standard scene.
    pub const STANDARD: TargetBox = TargetBox {
        width: 60.0,
        height: 60.0,
    };

    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless both sides are finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, DomainError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(DomainError::validation(
                "Target box dimensions must be positive finite numbers",
            ));
        }
        Ok(Self { width, height })
    }

    /// Whether `target` lies inside this window centred on `click`.
    pub fn contains(&self, click: Coordinates, target: Coordinates) -> bool {
        (target.x - click.x).abs() <= self.width / 2.0
            && (target.y - click.y).abs() <= self.height / 2.0
    }
}

impl Default for TargetBox {
    fn default() -> Self {
        Self::STANDARD
    }
}
