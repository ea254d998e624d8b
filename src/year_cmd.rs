use anyhow::Result;
use dreamspell_calendar::{MoonPosition, anchor_year, cycle_start, moon_position};
use dreamspell_tables::{moon_name, moon_totem};
use tracing::info;

use crate::cli::YearArgs;
use crate::show::today;

/// Run the `year` subcommand: list the moon start dates of one 13-Moon
/// year, plus its Day Out of Time and any exempt leap day.
pub fn run(args: &YearArgs) -> Result<()> {
    let anchor = args.year.unwrap_or_else(|| anchor_year(today()));
    info!(anchor, "listing 13-moon year");

    println!("13-Moon year anchored July 26 {anchor}");

    // Walk the cycle day by day; it always terminates at the Day Out of
    // Time, 364 counted days in.
    let mut current = cycle_start(anchor);
    loop {
        match moon_position(current) {
            MoonPosition::Regular {
                moon,
                day_of_moon: 1,
                ..
            } => {
                println!(
                    "  Moon {:2}  {} ({}) begins {current}",
                    moon + 1,
                    moon_name(moon),
                    moon_totem(moon),
                );
            }
            MoonPosition::LeapDay => {
                println!("  --       leap day (outside the count) {current}");
            }
            MoonPosition::DayOutOfTime { .. } => {
                println!("  Day Out of Time {current}");
                break;
            }
            MoonPosition::Regular { .. } => {}
        }
        current = current.next();
    }

    Ok(())
}
