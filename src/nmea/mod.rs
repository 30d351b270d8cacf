// src/nmea/mod.rs
//! NMEA 0183 sentence handling: checksum, decomposition, position extraction

pub mod checksum;
pub mod extract;
pub mod sentence;

pub use checksum::is_valid_sentence;
pub use extract::{extract_position, SentenceLayout};
pub use sentence::{decompose_sentence, NmeaSentence};
