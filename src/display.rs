// src/display.rs
//! Terminal summary of a loaded route

use crate::{error::Result, position::Position, route::RouteLog};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }

    /// Render the route summary for `source`
    pub fn render(&self, stdout: &mut impl Write, source: &str, route: &RouteLog) -> Result<()> {
        // Header
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print("=".repeat(60)),
            Print("\n"),
            Print(format!("NMEA Route - {}", source)),
            Print("\n"),
            Print("=".repeat(60)),
            Print("\n"),
            ResetColor
        )?;

        self.render_sentence_section(stdout, route)?;
        self.render_route_section(stdout, route)?;

        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print("=".repeat(60)),
            Print("\n"),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }

    fn render_sentence_section(&self, stdout: &mut impl Write, route: &RouteLog) -> Result<()> {
        let stats = &route.stats;

        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print("SENTENCES:\n"),
            ResetColor,
            Print(format!("  Read:      {:>12}\n", stats.tokens)),
            Print(format!("  Accepted:  {:>12}\n", stats.accepted())),
            Print(format!("  Rejected:  {:>12}\n", stats.rejected)),
            Print(format!("  No fix:    {:>12}\n\n", stats.zeroed))
        )?;

        Ok(())
    }

    fn render_route_section(&self, stdout: &mut impl Write, route: &RouteLog) -> Result<()> {
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print("ROUTE:\n"),
            ResetColor,
            Print(format!("  Positions: {:>12}\n", route.positions.len())),
            Print(format!("  Length:    {:>12.1} m\n", route.length())),
            Print(format!("  Start:     {}\n", Self::format_position(route.positions.first()))),
            Print(format!("  End:       {}\n\n", Self::format_position(route.positions.last())))
        )?;

        Ok(())
    }

    fn format_position(position: Option<&Position>) -> String {
        match position {
            Some(p) => format!("{:>12.6}°, {:>12.6}°", p.latitude(), p.longitude()),
            None => "No positions".to_string(),
        }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}
