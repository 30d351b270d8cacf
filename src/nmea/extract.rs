// src/nmea/extract.rs
//! Position extraction from recognised sentence types

use super::sentence::NmeaSentence;
use crate::{
    error::{NmeaError, Result},
    position::Position,
};

/// Field indices holding a position within one sentence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceLayout {
    pub sentence_type: &'static str,
    pub latitude: usize,
    pub northing: usize,
    pub longitude: usize,
    pub easting: usize,
}

/// Sentence types that carry a position, and where to find it.
pub static SENTENCE_LAYOUTS: &[SentenceLayout] = &[
    // Geographic position, latitude/longitude
    SentenceLayout { sentence_type: "GPGLL", latitude: 0, northing: 1, longitude: 2, easting: 3 },
    // Fix data
    SentenceLayout { sentence_type: "GPGGA", latitude: 1, northing: 2, longitude: 3, easting: 4 },
    // Recommended minimum
    SentenceLayout { sentence_type: "GPRMC", latitude: 2, northing: 3, longitude: 4, easting: 5 },
];

impl SentenceLayout {
    pub fn for_type(sentence_type: &str) -> Option<&'static SentenceLayout> {
        SENTENCE_LAYOUTS.iter().find(|layout| layout.sentence_type == sentence_type)
    }

    /// Read the position out of `sentence`, failing on bad indicators,
    /// missing fields or non-numeric angles.
    pub fn position(&self, sentence: &NmeaSentence) -> Result<Position> {
        let northing = sentence
            .leading_char(self.northing)
            .ok_or(NmeaError::MissingField(self.northing))?;
        let easting = sentence
            .leading_char(self.easting)
            .ok_or(NmeaError::MissingField(self.easting))?;

        Position::from_nmea(
            sentence.field(self.latitude)?,
            northing,
            sentence.field(self.longitude)?,
            easting,
        )
    }
}

/// Extract the position from a decomposed sentence.
///
/// Unrecognised sentence types and malformed sentences yield
/// [`Position::ZERO`]; this never fails.
pub fn extract_position(sentence: &NmeaSentence) -> Position {
    let Some(layout) = SentenceLayout::for_type(&sentence.sentence_type) else {
        return Position::ZERO;
    };

    match layout.position(sentence) {
        Ok(position) => position,
        Err(e) => {
            log::debug!("Zeroing malformed {} sentence: {}", sentence.sentence_type, e);
            Position::ZERO
        }
    }
}
