use anyhow::{Context, Result, bail};
use dreamspell_calendar::kin_signature;
use dreamspell_tables::{is_portal, seal_color, seal_name, tone_name};
use tracing::info;

use crate::cli::{KinArgs, parse_cli_date};
use crate::config::DreamspellConfig;
use crate::reading;

/// Run the `kin` subcommand: print the galactic signature for a date,
/// defaulting to the configured birthday.
pub fn run(args: &KinArgs, config: &DreamspellConfig) -> Result<()> {
    let date = match (args.date, &config.user.birthday) {
        (Some(date), _) => date,
        (None, Some(birthday)) => parse_cli_date(birthday)
            .map_err(anyhow::Error::msg)
            .context("invalid [user].birthday in config")?,
        (None, None) => {
            bail!("no date given and no birthday configured: pass a date or set [user].birthday")
        }
    };
    info!(%date, "looking up galactic signature");

    let signature = kin_signature(date);
    println!("{date}");
    println!("{}", reading::kin_line(signature));
    if let Some(kin) = signature.kin() {
        let seal = kin.seal_index();
        println!(
            "Seal {} of 20: {} ({}), tone {} of 13: {}",
            seal + 1,
            seal_name(seal),
            seal_color(seal),
            kin.tone_index() + 1,
            tone_name(kin.tone_index()),
        );
        if is_portal(kin.get()) {
            println!("This kin is one of the 52 galactic activation portals.");
        }
    }

    Ok(())
}
