use std::io::{BufRead, Write};

use anyhow::Result;

use tripdata::{DataSources, TripData};

use crate::console::Console;
use crate::filters::get_filters;
use crate::pager::display_raw_data;
use crate::report;

/// Collects filters, reports on the matching trips, and repeats until the user is done
pub struct Session {
    sources: DataSources,
}

impl Session {
    pub fn new(sources: DataSources) -> Self {
        Self { sources }
    }

    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            self.run_once(console)?;
            if !console.confirm("\nWould you like to restart? Enter \"yes\" or \"no\".\n")? {
                info!("Done exploring");
                return Ok(());
            }
        }
    }

    fn run_once<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let selection = get_filters(console)?;
        // Dropped before the next iteration
        let data = TripData::load_filtered(&self.sources, &selection)?;

        if data.is_empty() {
            writeln!(console.out(), "No trips match the selected filters.")?;
        } else {
            report::all(console.out(), &data)?;
        }

        if console.confirm("\nWould you like to see the raw data? Enter \"yes\" or \"no\".\n")? {
            display_raw_data(console, &data)?;
        }
        Ok(())
    }
}
