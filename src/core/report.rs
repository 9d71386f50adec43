use crate::domain::model::{OutputFormat, Report};
use crate::utils::error::Result;
use std::io::Write;

/// Differences are always shown with this many decimal places.
pub const DIFFERENCE_PLACES: usize = 100;

pub const CONCLUSION: [&str; 2] = [
    "The results show that as we increase the number of decimal places for Pi, the calculated volume of the cylinder becomes more accurate.",
    "The rounding method generally provides a closer approximation to the true value of Pi, and is always greater than or equal to the truncated value.",
];

fn row(decimals: usize, value: &str) -> String {
    format!("{:<5} | {}", decimals, value)
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.render_json(),
        }
    }

    /// Four sections in fixed order: truncation, rounding, difference,
    /// conclusion.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "--- SET 1: TRUNCATION ---")?;
        for r in &self.rows {
            writeln!(out, "{}", row(r.decimals, &r.truncated_volume.to_string()))?;
        }

        writeln!(out, "\n--- SET 2: ROUNDING ---")?;
        for r in &self.rows {
            writeln!(out, "{}", row(r.decimals, &r.rounded_volume.to_string()))?;
        }

        writeln!(out, "\n--- DIFFERENCE ---")?;
        for r in &self.rows {
            let difference = r.difference.format_fixed(DIFFERENCE_PLACES, self.rounding)?;
            writeln!(out, "{}", row(r.decimals, &difference))?;
        }

        writeln!(out, "\n--- CONCLUSION ---")?;
        for line in CONCLUSION {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn render_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_text(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
