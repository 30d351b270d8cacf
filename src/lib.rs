// src/lib.rs
//! NMEA Route Library
//!
//! Validates and decomposes NMEA 0183 sentences, extracts positions from
//! GLL/GGA/RMC sentences and loads whole logs into routes.

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod nmea;
pub mod position;
pub mod route;

// Re-export main types for convenience
pub use error::{NmeaError, Result};
pub use nmea::{decompose_sentence, extract_position, is_valid_sentence, NmeaSentence};
pub use position::{distance_between, Position};
pub use route::{load_route, route_from_log, route_length, RouteLog, RouteStats};
