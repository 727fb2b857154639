//! Output formatting module

use dumper_app::{ErrorReport, TripReport};
use dumper_types::{OutputFormat, Result, ValidationErrors};
use std::io::Write;

pub fn output_report(output_format: OutputFormat, report: &TripReport) -> Result<()> {
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), output_format, report)
}

pub fn write_report<W: Write>(w: &mut W, output_format: OutputFormat, report: &TripReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        writeln!(w, "{}", content)?;
    } else {
        // Table format
        writeln!(w)?;
        writeln!(w, "Dumper Trip Calculation")?;
        writeln!(w, "=======================")?;
        writeln!(w, "Unit:            {}", report.unit.label())?;
        writeln!(w, "Required trips:  {}", report.required_trips)?;
        writeln!(w, "{}", report.cost_line())?;
        writeln!(w, "{}", report.volume_line())?;
        if !report.unit.is_metric() {
            writeln!(w, "                 ({:.2} m³)", report.total_volume_m3)?;
        }
    }

    Ok(())
}

/// Only JSON mode prints here; in table mode the caller's error message
/// already lists every field.
pub fn write_errors<W: Write>(w: &mut W, output_format: OutputFormat, errors: &ValidationErrors) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&ErrorReport::from(errors))?;
        writeln!(w, "{}", content)?;
    }
    Ok(())
}
