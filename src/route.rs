// src/route.rs
//! Loading routes from NMEA log files

use crate::{
    error::Result,
    nmea::{decompose_sentence, extract_position, is_valid_sentence},
    position::{Metres, Position},
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Counters collected while loading a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteStats {
    /// Whitespace-delimited tokens seen
    pub tokens: usize,
    /// Tokens dropped for a bad checksum
    pub rejected: usize,
    /// Accepted tokens that yielded no usable position
    pub zeroed: usize,
}

impl RouteStats {
    pub fn accepted(&self) -> usize {
        self.tokens - self.rejected
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteLog {
    pub positions: Vec<Position>,
    pub stats: RouteStats,
}

impl RouteLog {
    /// Length over the fixes only; zero fallbacks would add legs to (0, 0).
    pub fn length(&self) -> Metres {
        route_length(&self.fixes())
    }

    /// Positions with the zero fallbacks removed.
    pub fn fixes(&self) -> Vec<Position> {
        self.positions.iter().copied().filter(|p| !p.is_zero()).collect()
    }
}

/// Read the positions of every checksum-valid sentence in the log at `path`,
/// in file order.
pub fn route_from_log<P: AsRef<Path>>(path: P) -> Result<Vec<Position>> {
    Ok(load_route(path)?.positions)
}

/// Like [`route_from_log`], also reporting how many sentences were dropped.
pub fn load_route<P: AsRef<Path>>(path: P) -> Result<RouteLog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let route = route_from_reader(BufReader::new(file))?;

    log::info!(
        "Loaded {} positions from {} ({} tokens, {} rejected, {} zeroed)",
        route.positions.len(),
        path.display(),
        route.stats.tokens,
        route.stats.rejected,
        route.stats.zeroed
    );
    Ok(route)
}

/// Parse a log from any buffered reader. Lines may hold several
/// whitespace-separated sentences.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the
/// read, so a noisy line only costs its own sentences their checksum.
pub fn route_from_reader<R: BufRead>(reader: R) -> Result<RouteLog> {
    let mut route = RouteLog::default();

    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        for token in line.split_whitespace() {
            route.stats.tokens += 1;

            if !is_valid_sentence(token) {
                log::debug!("Dropping sentence with bad checksum: {}", token);
                route.stats.rejected += 1;
                continue;
            }

            let position = extract_position(&decompose_sentence(token));
            if position.is_zero() {
                route.stats.zeroed += 1;
            }
            route.positions.push(position);
        }
    }

    Ok(route)
}

/// Parse a log held in memory.
pub fn route_from_str(log: &str) -> RouteLog {
    // A &str is valid UTF-8 and reading a slice cannot fail
    route_from_reader(log.as_bytes()).unwrap_or_default()
}

/// Sum of the great-circle legs between consecutive positions.
pub fn route_length(positions: &[Position]) -> Metres {
    positions.windows(2).map(|leg| leg[0].distance_to(&leg[1])).sum()
}
