use std::io::Write;
use std::time::Instant;

use anyhow::Result;

use model::{DurationStats, StationStats, TimeStats, UserStats};
use tripdata::TripData;

const RULE: &str = "--------------------------------------------------------------------------------";
const BANNER: &str = "################################################################################";

/// Runs every report, in order
pub fn all<W: Write>(out: &mut W, data: &TripData) -> Result<()> {
    time_stats(out, data)?;
    station_stats(out, data)?;
    trip_duration_stats(out, data)?;
    user_stats(out, data)?;
    Ok(())
}

pub fn time_stats<W: Write>(out: &mut W, data: &TripData) -> Result<()> {
    timed(out, "Calculating The Most Frequent Times of Travel...", |out| {
        match TimeStats::new(data) {
            Some(stats) => {
                writeln!(out, "Most popular month: {}", stats.month_title())?;
                writeln!(out, "Most popular day of the week: {}", stats.day.title())?;
                writeln!(out, "Most popular start hour: {}", stats.hour)?;
            }
            None => no_trips(out)?,
        }
        Ok(())
    })
}

pub fn station_stats<W: Write>(out: &mut W, data: &TripData) -> Result<()> {
    timed(out, "Calculating The Most Popular Stations and Trip...", |out| {
        match StationStats::new(data) {
            Some(stats) => {
                let (ref start, start_count) = stats.start_station;
                let (ref end, end_count) = stats.end_station;
                let ((ref from, ref to), trip_count) = stats.trip;
                writeln!(out, "Most popular start station: {start} (Count: {start_count})")?;
                writeln!(out, "Most popular end station: {end} (Count: {end_count})")?;
                writeln!(out, "Most popular trip: {from} -> {to} (Count: {trip_count})")?;
            }
            None => no_trips(out)?,
        }
        Ok(())
    })
}

pub fn trip_duration_stats<W: Write>(out: &mut W, data: &TripData) -> Result<()> {
    timed(out, "Calculating Trip Duration...", |out| {
        match DurationStats::new(data) {
            Some(stats) => {
                writeln!(out, "Total travel time (h): {:?}", stats.total_hours())?;
                writeln!(out, "Average travel time (min): {:?}", stats.mean_minutes())?;
            }
            None => no_trips(out)?,
        }
        Ok(())
    })
}

pub fn user_stats<W: Write>(out: &mut W, data: &TripData) -> Result<()> {
    timed(out, "Calculating User Stats...", |out| {
        let stats = UserStats::new(data);
        writeln!(out, "User type counts:")?;
        for (user_type, count) in &stats.user_types {
            writeln!(out, "{user_type} {count}")?;
        }

        let demographics = match stats.demographics {
            Some(x) => x,
            None => {
                writeln!(out, "No gender data available.")?;
                writeln!(out, "No birth year data available.")?;
                return Ok(());
            }
        };

        if demographics.genders.is_empty() {
            writeln!(out, "No gender data available.")?;
        } else {
            writeln!(out, "\nGender counts:")?;
            for (gender, count) in &demographics.genders {
                writeln!(out, "{gender} {count}")?;
            }
        }

        match demographics.birth_years {
            Some(years) => {
                writeln!(out, "\nEarliest year of birth: {}", years.earliest)?;
                writeln!(out, "Most recent year of birth: {}", years.most_recent)?;
                writeln!(out, "Most common year of birth: {}", years.most_common)?;
            }
            None => writeln!(out, "No birth year data available.")?,
        }
        Ok(())
    })
}

// Frames one report and says how long it took
fn timed<W, F>(out: &mut W, title: &str, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "{title}\n")?;
    let start = Instant::now();

    writeln!(out, "{BANNER}")?;
    body(out)?;
    writeln!(out, "{BANNER}")?;

    let elapsed = start.elapsed();
    debug!("{title} took {:?}", elapsed);
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

fn no_trips<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "No trips to summarize.")?;
    Ok(())
}
