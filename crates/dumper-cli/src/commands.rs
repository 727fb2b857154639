//! Command handlers

use crate::cli::{Cli, Commands};
use crate::interactive::{self, InteractiveOptions};
use crate::output::{output_report, write_errors};
use dumper_app::{Config, TripReport};
use dumper_domain::service::{calculate, CalculatorSession};
use dumper_domain::DimensionInput;
use dumper_types::{Error, OutputFormat, Result, UnitSystem};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    if cli.verbose {
        eprintln!("Config: {}", config_path.display());
    }

    match &cli.command {
        Commands::Calculate {
            length,
            width,
            height,
        } => {
            let config = apply_overrides(&cli, Config::load_from(&config_path)?)?;
            let input = DimensionInput::new(length.as_str(), width.as_str(), height.as_str());
            cmd_calculate(&cli, &config, &input)
        }

        Commands::Interactive => {
            let config = apply_overrides(&cli, Config::load_from(&config_path)?)?;
            cmd_interactive(&cli, &config)
        }

        Commands::Config {
            show,
            set_capacity,
            set_cost,
            set_unit,
            set_output,
            set_currency,
            reset,
        } => cmd_config(
            config_path,
            ConfigUpdate {
                show: *show,
                capacity: *set_capacity,
                cost: set_cost.clone(),
                unit: *set_unit,
                output: *set_output,
                currency: set_currency.clone(),
                reset: *reset,
            },
        ),
    }
}

/// CLI options win over the config file for this run only
fn apply_overrides(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(unit) = cli.unit {
        config.unit_system = unit;
    }
    if let Some(capacity) = cli.capacity {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "--capacity must be a positive number of cubic meters, got {}",
                capacity
            )));
        }
        config.dumper_capacity_m3 = capacity;
    }
    if let Some(ref cost) = cli.cost {
        config.cost_per_trip = cost.clone();
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    Ok(config)
}

fn cmd_calculate(cli: &Cli, config: &Config, input: &DimensionInput) -> Result<()> {
    let settings = config.trip_settings();
    if cli.verbose {
        eprintln!(
            "Settings: unit={}, capacity={} m³, cost per trip={}",
            config.unit_system, settings.dumper_capacity_m3, settings.cost_per_trip
        );
    }

    match calculate(input, config.unit_system, &settings) {
        Ok(result) => {
            if cli.verbose {
                eprintln!(
                    "Volume {:.4} m³ / {} m³ per trip",
                    result.total_volume_m3, settings.dumper_capacity_m3
                );
            }
            let report = TripReport::new(&result, config.unit_system, &config.currency_symbol);
            output_report(config.output_format, &report)
        }
        Err(errors) => {
            write_errors(&mut std::io::stdout().lock(), config.output_format, &errors)?;
            Err(Error::Validation(errors))
        }
    }
}

fn cmd_interactive(cli: &Cli, config: &Config) -> Result<()> {
    let mut session = CalculatorSession::new(
        config.unit_system,
        config.dumper_capacity_m3,
        config.cost_per_trip.clone(),
    );
    let options = InteractiveOptions {
        output_format: config.output_format,
        currency_symbol: config.currency_symbol.clone(),
        verbose: cli.verbose,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    interactive::run(&mut session, stdin.lock(), &mut stdout.lock(), &options)
}

struct ConfigUpdate {
    show: bool,
    capacity: Option<f64>,
    cost: Option<String>,
    unit: Option<UnitSystem>,
    output: Option<OutputFormat>,
    currency: Option<String>,
    reset: bool,
}

fn cmd_config(path: PathBuf, update: ConfigUpdate) -> Result<()> {
    // Reset never reads the existing file, so a broken one can be repaired
    if update.reset {
        Config::default().save_to(&path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_from(&path)?;

    let mut modified = false;

    if let Some(capacity) = update.capacity {
        config.dumper_capacity_m3 = capacity;
        modified = true;
    }

    if let Some(cost) = update.cost {
        config.cost_per_trip = cost;
        modified = true;
    }

    if let Some(unit) = update.unit {
        config.unit_system = unit;
        modified = true;
    }

    if let Some(output) = update.output {
        config.output_format = output;
        modified = true;
    }

    if let Some(currency) = update.currency {
        config.currency_symbol = currency;
        modified = true;
    }

    if modified {
        config.save_to(&path)?;
        println!("Configuration saved to {}", path.display());
    }

    if update.show || !modified {
        println!("{}", config);
        println!("Config file:     {}", path.display());
    }

    Ok(())
}
