use serde::Serialize;

use crate::error::CommandError;

/// Direction of the light source passed to `blast2dem -light x y z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LightVector {
    /// Converts sun position into a light vector.
    ///
    /// Azimuth is degrees clockwise from north, altitude is degrees above the
    /// horizon, and `radius` scales the vector. x points east, y north, z up.
    pub fn from_angles(azimuth: f64, altitude: f64, radius: f64) -> Result<Self, CommandError> {
        if !(azimuth.is_finite() && altitude.is_finite() && radius.is_finite()) {
            return Err(CommandError::InvalidLight(
                "azimuth, altitude and radius must be finite".to_string(),
            ));
        }
        if !(0.0..=90.0).contains(&altitude) {
            return Err(CommandError::InvalidLight(format!(
                "altitude {} is outside 0..=90 degrees",
                altitude
            )));
        }
        if radius <= 0.0 {
            return Err(CommandError::InvalidLight(format!(
                "radius {} must be greater than 0",
                radius
            )));
        }

        let az = azimuth.rem_euclid(360.0).to_radians();
        let alt = altitude.to_radians();
        let horizontal = radius * alt.cos();

        Ok(Self {
            x: horizontal * az.sin(),
            y: horizontal * az.cos(),
            z: radius * alt.sin(),
        })
    }

    pub fn to_args(&self) -> Vec<String> {
        vec![
            "-light".to_string(),
            format_component(self.x),
            format_component(self.y),
            format_component(self.z),
        ]
    }
}

// At most 6 fractional digits, trailing zeros trimmed, never "-0".
fn format_component(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
