use serde::Deserialize;

use crate::error::{ParameterError, Result};

/// Inclusive range a refinement parameter may take when set interactively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(ParameterError::NotFinite {
                parameter: self.name,
            }
            .into());
        }
        if !self.contains(value) {
            return Err(ParameterError::OutOfRange {
                parameter: self.name,
                value,
                min: self.min,
                max: self.max,
            }
            .into());
        }
        Ok(value)
    }
}

/// Range of the turn-angle threshold, in degrees.
pub const ANGLE_LIMIT_RANGE: ParamRange = ParamRange {
    name: "angle_limit_deg",
    min: 0.0,
    max: 45.0,
};

/// Range of the segment-length threshold, in coordinate units.
pub const MAX_SEGMENT_LEN_RANGE: ParamRange = ParamRange {
    name: "max_segment_len",
    min: 0.0,
    max: 50.0,
};

/// Thresholds driving path subdivision.
///
/// A threshold `<= 0` disables its stage. Deserializes from camelCase keys
/// (`angleLimitDeg`, `maxSegmentLen`); missing keys take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubdivideParams {
    /// Maximum turn angle (degrees) tolerated at a vertex.
    pub angle_limit_deg: f64,
    /// Maximum segment length.
    pub max_segment_len: f64,
}

impl Default for SubdivideParams {
    fn default() -> Self {
        Self {
            angle_limit_deg: 10.0,
            max_segment_len: 2.0,
        }
    }
}

impl SubdivideParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` if a value is not finite or falls outside
    /// [`ANGLE_LIMIT_RANGE`] / [`MAX_SEGMENT_LEN_RANGE`].
    pub fn new(angle_limit_deg: f64, max_segment_len: f64) -> Result<Self> {
        Ok(Self {
            angle_limit_deg: ANGLE_LIMIT_RANGE.check(angle_limit_deg)?,
            max_segment_len: MAX_SEGMENT_LEN_RANGE.check(max_segment_len)?,
        })
    }

    /// Creates parameters leniently: NaN and negative values become `0`
    /// (stage disabled), everything else is kept as given.
    #[must_use]
    pub fn sanitized(angle_limit_deg: f64, max_segment_len: f64) -> Self {
        Self {
            angle_limit_deg: non_negative(angle_limit_deg),
            max_segment_len: non_negative(max_segment_len),
        }
    }

    /// Parameters with both stages disabled (pass-through).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            angle_limit_deg: 0.0,
            max_segment_len: 0.0,
        }
    }

    /// Returns a copy with NaN and negative thresholds replaced by `0`.
    #[must_use]
    pub fn to_sanitized(self) -> Self {
        Self::sanitized(self.angle_limit_deg, self.max_segment_len)
    }

    /// Returns `true` if neither stage would modify its input.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        !super::is_enabled(self.angle_limit_deg) && !super::is_enabled(self.max_segment_len)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
