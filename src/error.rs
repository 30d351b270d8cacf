// src/error.rs
//! Error types for the NMEA route parser

use std::fmt;

pub type Result<T> = std::result::Result<T, NmeaError>;

#[derive(Debug)]
pub enum NmeaError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Parse(String),
    InvalidDirection(char),
    NegativeAngle(f64),
    MissingField(usize),
    Other(String),
}

impl fmt::Display for NmeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmeaError::Io(e) => write!(f, "IO error: {}", e),
            NmeaError::Json(e) => write!(f, "JSON error: {}", e),
            NmeaError::Parse(msg) => write!(f, "Parse error: {}", msg),
            NmeaError::InvalidDirection(c) => write!(f, "Invalid direction character: {:?}", c),
            NmeaError::NegativeAngle(a) => write!(f, "NMEA angle must not be negative: {}", a),
            NmeaError::MissingField(i) => write!(f, "Missing sentence field at index {}", i),
            NmeaError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for NmeaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NmeaError::Io(e) => Some(e),
            NmeaError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NmeaError {
    fn from(error: std::io::Error) -> Self {
        NmeaError::Io(error)
    }
}

impl From<serde_json::Error> for NmeaError {
    fn from(error: serde_json::Error) -> Self {
        NmeaError::Json(error)
    }
}

impl From<anyhow::Error> for NmeaError {
    fn from(error: anyhow::Error) -> Self {
        NmeaError::Other(error.to_string())
    }
}
