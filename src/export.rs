// src/export.rs
//! Route export to GPX, GeoJSON and CSV

use crate::error::{NmeaError, Result};
use crate::position::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Gpx,
    GeoJson,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &str {
        match self {
            ExportFormat::Gpx => "gpx",
            ExportFormat::GeoJson => "geojson",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ExportFormat::Gpx => "GPX (GPS Exchange)",
            ExportFormat::GeoJson => "GeoJSON",
            ExportFormat::Csv => "CSV",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = NmeaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gpx" => Ok(ExportFormat::Gpx),
            "geojson" | "json" => Ok(ExportFormat::GeoJson),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(NmeaError::Other(format!("Unknown export format: {}", other))),
        }
    }
}

/// Serializes a route under a track name.
pub struct RouteExporter {
    name: String,
    positions: Vec<Position>,
    include_elevation: bool,
    created: DateTime<Utc>,
}

impl RouteExporter {
    pub fn new(name: impl Into<String>, positions: Vec<Position>) -> Self {
        Self {
            name: name.into(),
            positions,
            include_elevation: true,
            created: Utc::now(),
        }
    }

    pub fn with_elevation(mut self, include_elevation: bool) -> Self {
        self.include_elevation = include_elevation;
        self
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let content = self.render(format)?;

        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        if self.positions.is_empty() {
            return Err(NmeaError::Other("No positions to export".to_string()));
        }

        match format {
            ExportFormat::Gpx => Ok(self.to_gpx()),
            ExportFormat::GeoJson => self.to_geojson(),
            ExportFormat::Csv => Ok(self.to_csv()),
        }
    }

    fn to_gpx(&self) -> String {
        let mut gpx = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="nmea-route" xmlns="http://www.topografix.com/GPX/1/1">
"#,
        );

        gpx.push_str(&format!(
            "  <metadata>\n    <time>{}</time>\n  </metadata>\n",
            self.created.to_rfc3339()
        ));
        gpx.push_str(&format!(
            "  <trk>\n    <name>{}</name>\n    <trkseg>\n",
            Self::escape_xml(&self.name)
        ));

        for position in &self.positions {
            if self.include_elevation {
                gpx.push_str(&format!(
                    "      <trkpt {}>\n        <ele>{}</ele>\n      </trkpt>\n",
                    position.to_string_with_elevation(false),
                    position.elevation()
                ));
            } else {
                gpx.push_str(&format!(
                    "      <trkpt {}/>\n",
                    position.to_string_with_elevation(false)
                ));
            }
        }

        gpx.push_str("    </trkseg>\n  </trk>\n</gpx>\n");
        gpx
    }

    fn to_geojson(&self) -> Result<String> {
        let coordinates: Vec<serde_json::Value> = self
            .positions
            .iter()
            .map(|p| {
                if self.include_elevation {
                    serde_json::json!([p.longitude(), p.latitude(), p.elevation()])
                } else {
                    serde_json::json!([p.longitude(), p.latitude()])
                }
            })
            .collect();

        let feature_collection = serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": coordinates
                },
                "properties": {
                    "name": self.name,
                    "time": self.created.to_rfc3339(),
                }
            }]
        });

        Ok(serde_json::to_string_pretty(&feature_collection)?)
    }

    fn to_csv(&self) -> String {
        let mut csv = if self.include_elevation {
            String::from("latitude,longitude,elevation\n")
        } else {
            String::from("latitude,longitude\n")
        };

        for p in &self.positions {
            if self.include_elevation {
                csv.push_str(&format!("{},{},{}\n", p.latitude(), p.longitude(), p.elevation()));
            } else {
                csv.push_str(&format!("{},{}\n", p.latitude(), p.longitude()));
            }
        }

        csv
    }

    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }
}
