//! Line-mode calculator session
//!
//! One command per line. Changes made here are never written back to the
//! config file.

use clap::ValueEnum;
use dumper_app::TripReport;
use dumper_domain::service::{CalculatorSession, SessionState};
use dumper_types::{Field, OutputFormat, Result, UnitSystem};
use std::io::{BufRead, Write};

use crate::output::{write_errors, write_report};

const HELP: &str = "\
Commands:
  length|width|height [value]  set a dimension (no value clears it)
  unit feet|meters             select the unit system
  toggle                       switch between feet and meters
  capacity <m3>                set dumper capacity
  cost <amount>                set cost per trip
  calc                         calculate trips and cost
  reset                        clear dimensions and result
  show                         show current state
  help                         show this help
  quit                         leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    SetField(Field, String),
    Unit(UnitSystem),
    Toggle,
    Capacity(String),
    Cost(String),
    Calculate,
    Reset,
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "length" | "l" => SessionCommand::SetField(Field::Length, arg.to_string()),
        "width" | "w" => SessionCommand::SetField(Field::Width, arg.to_string()),
        "height" | "h" => SessionCommand::SetField(Field::Height, arg.to_string()),
        "unit" => {
            let unit = UnitSystem::from_str(arg, true)
                .map_err(|_| format!("Unknown unit: {:?} (use feet or meters)", arg))?;
            SessionCommand::Unit(unit)
        }
        "toggle" => SessionCommand::Toggle,
        "capacity" => SessionCommand::Capacity(arg.to_string()),
        "cost" => SessionCommand::Cost(arg.to_string()),
        "calc" | "calculate" => SessionCommand::Calculate,
        "reset" => SessionCommand::Reset,
        "show" | "status" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("Unknown command: {} (type 'help')", other)),
    };
    Ok(Some(command))
}

pub struct InteractiveOptions {
    pub output_format: OutputFormat,
    pub currency_symbol: String,
    pub verbose: bool,
}

/// Drive a session from `input` until EOF or `quit`.
pub fn run<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    input: R,
    out: &mut W,
    options: &InteractiveOptions,
) -> Result<()> {
    writeln!(out, "Dumper Trip Calculator (type 'help' for commands)")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            SessionCommand::SetField(field, value) => {
                let error = session.set_field(field, value).copied();
                match error {
                    Some(error) => writeln!(out, "{}", error)?,
                    None => writeln!(out, "{}: {}", field, session.input().get(field))?,
                }
            }
            SessionCommand::Unit(unit) => {
                session.set_unit(unit);
                writeln!(out, "Unit: {}", unit.label())?;
                write_display_volume(session, out)?;
            }
            SessionCommand::Toggle => {
                let unit = session.toggle_unit();
                writeln!(out, "Unit: {}", unit.label())?;
                write_display_volume(session, out)?;
            }
            SessionCommand::Capacity(text) => {
                if session.set_capacity_text(&text) {
                    writeln!(out, "Dumper capacity: {:.2} m³", session.dumper_capacity_m3())?;
                } else {
                    writeln!(
                        out,
                        "Dumper capacity must be a positive number, keeping {:.2} m³",
                        session.dumper_capacity_m3()
                    )?;
                }
            }
            SessionCommand::Cost(text) => {
                session.set_cost_text(text);
                let settings = session.settings();
                writeln!(
                    out,
                    "Cost per trip: {}{:.2}",
                    options.currency_symbol, settings.cost_per_trip
                )?;
            }
            SessionCommand::Calculate => match session.calculate() {
                Ok(result) => {
                    if options.verbose {
                        eprintln!("Session state: calculated ({} trips)", result.required_trips);
                    }
                    let report = TripReport::new(&result, session.unit(), &options.currency_symbol);
                    write_report(out, options.output_format, &report)?;
                }
                Err(errors) => {
                    if options.verbose {
                        eprintln!("Session state: idle ({} invalid fields)", errors.len());
                    }
                    if options.output_format == OutputFormat::Json {
                        write_errors(out, options.output_format, &errors)?;
                    } else {
                        for error in &errors {
                            writeln!(out, "{}", error)?;
                        }
                    }
                }
            },
            SessionCommand::Reset => {
                session.reset();
                if options.verbose {
                    eprintln!("Session state: idle (reset)");
                }
                writeln!(out, "Cleared")?;
            }
            SessionCommand::Show => write_status(session, out, options)?,
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn write_display_volume<W: Write>(session: &CalculatorSession, out: &mut W) -> Result<()> {
    if let Some(volume) = session.display_volume() {
        writeln!(out, "Total Volume: {:.2} {}", volume, session.unit().volume_suffix())?;
    }
    Ok(())
}

fn write_status<W: Write>(
    session: &CalculatorSession,
    out: &mut W,
    options: &InteractiveOptions,
) -> Result<()> {
    writeln!(out, "Unit:            {}", session.unit().label())?;
    for field in Field::ALL {
        let value = session.input().get(field);
        match session.error(field) {
            Some(error) => writeln!(out, "{:<16} {:?} ({})", format!("{}:", field), value, error)?,
            None => writeln!(out, "{:<16} {:?}", format!("{}:", field), value)?,
        }
    }
    writeln!(out, "Dumper capacity: {:.2} m³", session.dumper_capacity_m3())?;
    writeln!(
        out,
        "Cost per trip:   {}{:.2}",
        options.currency_symbol,
        session.settings().cost_per_trip
    )?;
    match session.state() {
        SessionState::Idle => writeln!(out, "State:           idle")?,
        SessionState::Calculated(result) => {
            writeln!(out, "State:           calculated")?;
            let report = TripReport::new(result, session.unit(), &options.currency_symbol);
            write_report(out, options.output_format, &report)?;
        }
    }
    Ok(())
}
