// src/position.rs
//! Geodetic positions and great-circle distance

use crate::error::{NmeaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Degrees = f64;
pub type Metres = f64;

const EARTH_MEAN_RADIUS_METRES: Metres = 6_371_008.8;

/// A latitude/longitude pair in signed decimal degrees, with an elevation
/// in metres. Negative angles are South/West.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    latitude: Degrees,
    longitude: Degrees,
    elevation: Metres,
}

impl Position {
    /// The position substituted for sentences that carry no usable fix.
    pub const ZERO: Position = Position {
        latitude: 0.0,
        longitude: 0.0,
        elevation: 0.0,
    };

    pub fn new(latitude: Degrees, longitude: Degrees, elevation: Metres) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Build a position from decimal-degree strings. A missing elevation
    /// defaults to zero.
    pub fn from_decimal_strs(lat: &str, lon: &str, ele: Option<&str>) -> Result<Self> {
        Ok(Self {
            latitude: parse_number(lat)?,
            longitude: parse_number(lon)?,
            elevation: parse_number(ele.unwrap_or("0"))?,
        })
    }

    /// Build a position from NMEA `DDMM.MMMM` magnitudes plus their
    /// `N`/`S` and `E`/`W` indicators. Elevation is always zero.
    pub fn from_nmea(lat: &str, northing: char, lon: &str, easting: char) -> Result<Self> {
        if northing != 'N' && northing != 'S' {
            return Err(NmeaError::InvalidDirection(northing));
        }
        if easting != 'E' && easting != 'W' {
            return Err(NmeaError::InvalidDirection(easting));
        }

        let abs_lat = from_nmea_angle_str(lat)?;
        let abs_lon = from_nmea_angle_str(lon)?;

        Ok(Self {
            latitude: if northing == 'S' { -abs_lat } else { abs_lat },
            longitude: if easting == 'W' { -abs_lon } else { abs_lon },
            elevation: 0.0,
        })
    }

    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    pub fn elevation(&self) -> Metres {
        self.elevation
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Render as GPX-style attributes: `lat="…" lon="…"` and optionally ` ele="…"`.
    pub fn to_string_with_elevation(&self, include_elevation: bool) -> String {
        let mut s = format!("lat=\"{}\" lon=\"{}\"", self.latitude, self.longitude);
        if include_elevation {
            s.push_str(&format!(" ele=\"{}\"", self.elevation));
        }
        s
    }

    /// Elevation with six fixed decimals.
    pub fn elevation_string(&self) -> String {
        format!("{:.6}", self.elevation)
    }

    pub fn distance_to(&self, other: &Position) -> Metres {
        distance_between(self, other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_elevation(true))
    }
}

/// Convert a non-negative NMEA degrees/minutes string (`DDMM.MMMM`) to
/// decimal degrees.
pub fn from_nmea_angle_str(angle: &str) -> Result<Degrees> {
    let angle = parse_number(angle)?;
    if angle < 0.0 {
        return Err(NmeaError::NegativeAngle(angle));
    }
    let degrees = (angle / 100.0).floor();
    let minutes = angle - 100.0 * degrees;
    Ok(degrees + minutes / 60.0)
}

/// Haversine great-circle distance between two positions, in metres.
/// Elevation is ignored.
pub fn distance_between(p1: &Position, p2: &Position) -> Metres {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let lon1 = p1.longitude.to_radians();
    let lon2 = p2.longitude.to_radians();

    let h = sin_sqr((lat2 - lat1) / 2.0) + lat1.cos() * lat2.cos() * sin_sqr((lon2 - lon1) / 2.0);
    // Rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_MEAN_RADIUS_METRES * h.sqrt().min(1.0).asin()
}

fn sin_sqr(x: f64) -> f64 {
    let s = x.sin();
    s * s
}

fn parse_number(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    trimmed
        .parse::<f64>()
        .map_err(|e| NmeaError::Parse(format!("{:?} is not a number: {}", trimmed, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_numeric_constructor() {
        let p = Position::new(52.9, -1.18, 45.0);
        assert_eq!(p.latitude(), 52.9);
        assert_eq!(p.longitude(), -1.18);
        assert_eq!(p.elevation(), 45.0);
    }

    #[test]
    fn test_decimal_strings() {
        let p = Position::from_decimal_strs("52.9", "-1.18", None).unwrap();
        assert_eq!(p.latitude(), 52.9);
        assert_eq!(p.longitude(), -1.18);
        assert_eq!(p.elevation(), 0.0);

        let p = Position::from_decimal_strs("1", "2", Some("3.5")).unwrap();
        assert_eq!(p.elevation(), 3.5);

        assert!(matches!(
            Position::from_decimal_strs("north", "2", None),
            Err(NmeaError::Parse(_))
        ));
    }

    #[test]
    fn test_nmea_angle_conversion() {
        assert_relative_eq!(from_nmea_angle_str("5425.32").unwrap(), 54.422, epsilon = 1e-12);
        assert_relative_eq!(from_nmea_angle_str("00102.4").unwrap(), 1.04, epsilon = 1e-12);
        assert_eq!(from_nmea_angle_str("0").unwrap(), 0.0);
    }

    #[test]
    fn test_nmea_angle_rejects_negative_and_garbage() {
        assert!(matches!(from_nmea_angle_str("-5425.32"), Err(NmeaError::NegativeAngle(_))));
        assert!(matches!(from_nmea_angle_str(""), Err(NmeaError::Parse(_))));
        assert!(matches!(from_nmea_angle_str("54x"), Err(NmeaError::Parse(_))));
    }

    #[test]
    fn test_direction_sign() {
        let p = Position::from_nmea("5425.32", 'S', "00102.4", 'W').unwrap();
        assert_relative_eq!(p.latitude(), -54.422, epsilon = 1e-12);
        assert_relative_eq!(p.longitude(), -1.04, epsilon = 1e-12);
        assert_eq!(p.elevation(), 0.0);

        let p = Position::from_nmea("5425.32", 'N', "00102.4", 'E').unwrap();
        assert!(p.latitude() > 0.0);
        assert!(p.longitude() > 0.0);
    }

    #[test]
    fn test_invalid_direction() {
        assert!(matches!(
            Position::from_nmea("5425.32", 'X', "00102.4", 'E'),
            Err(NmeaError::InvalidDirection('X'))
        ));
        assert!(matches!(
            Position::from_nmea("5425.32", 'N', "00102.4", 'N'),
            Err(NmeaError::InvalidDirection('N'))
        ));
    }

    #[test]
    fn test_string_rendering() {
        let p = Position::new(54.5, -1.25, 10.0);
        assert_eq!(p.to_string_with_elevation(false), "lat=\"54.5\" lon=\"-1.25\"");
        assert_eq!(p.to_string(), "lat=\"54.5\" lon=\"-1.25\" ele=\"10\"");
        assert_eq!(p.elevation_string(), "10.000000");
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = distance_between(&Position::new(0.0, 0.0, 0.0), &Position::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(d, 111_195.0, epsilon = 1.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Position::new(53.1, -1.2, 80.0);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Position::new(51.5074, -0.1278, 0.0);
        let b = Position::new(48.8566, 2.3522, 0.0);
        assert_relative_eq!(a.distance_to(&b), b.distance_to(&a));
        // London to Paris is roughly 344 km
        assert_abs_diff_eq!(a.distance_to(&b), 343_560.0, epsilon = 1_000.0);
    }

    #[test]
    fn test_antipodal_distance() {
        let d = distance_between(&Position::new(0.0, 0.0, 0.0), &Position::new(0.0, 180.0, 0.0));
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_MEAN_RADIUS_METRES, max_relative = 1e-12);
    }
}
