use anyhow::Result;
use chrono::Local;
use dreamspell_calendar::{GregorianDate, kin_signature, moon_position};
use tracing::{debug, info};

use crate::cli::ShowArgs;
use crate::config::DreamspellConfig;
use crate::oracle::{Oracle, OracleError, OracleRequest, StaticOracle};
use crate::reading;

/// Run the `show` subcommand: print the full reading for a date.
pub fn run(args: &ShowArgs, config: &DreamspellConfig) -> Result<()> {
    let date = args.date.unwrap_or_else(today);
    info!(%date, "composing reading");

    let position = moon_position(date);
    let signature = kin_signature(date);
    debug!(?position, ?signature, "conversions complete");

    let moon_line = reading::moon_line(position);
    let kin_line = reading::kin_line(signature);

    println!("{date}");
    if let Some(location) = &config.user.location {
        println!("Location: {location}");
    }
    println!("{moon_line}");
    println!("{kin_line}");
    println!("{}", reading::affirmation(position));

    if args.oracle {
        let request = OracleRequest {
            moon_context: moon_line,
            kin_context: kin_line,
            location: config.user.location.clone(),
            intention: args.intention.clone(),
        };
        println!();
        match StaticOracle.consult(&request) {
            Ok(oracle_reading) => {
                println!("Biomass: {}", oracle_reading.biomass);
                println!("Noosphere: {}", oracle_reading.noosphere);
                println!("Telepathic index: {}", oracle_reading.telepathic_index);
            }
            Err(OracleError::Unavailable) => {
                println!("The oracle is unavailable right now.");
            }
        }
    }

    Ok(())
}

/// Resolves "today" as the local civil date, taken once.
///
/// Everything downstream is date-only, so no later step can drift across
/// a midnight boundary.
pub fn today() -> GregorianDate {
    GregorianDate::from(Local::now().date_naive())
}
