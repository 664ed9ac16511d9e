use std::io::{BufRead, Write};

use anyhow::Result;

use tripdata::{City, Day, FilterSelection, Month};

use crate::console::Console;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Asks which city to analyze, and optionally which month and day to narrow down to
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<FilterSelection> {
    writeln!(console.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city_names: Vec<&str> = City::all().into_iter().map(|c| c.name()).collect();
    let city = console.choose(
        "The data of which city do you want to analyze? Chicago, New York City or Washington?\n",
        "Your input was not recognized. Please enter the city names correctly (\"Chicago\", \"New York City\" or \"Washington\"):\n",
        &city_names,
    )?;
    let city = City::parse(&city).ok_or_else(|| anyhow!("unknown city {city}"))?;

    let filter_type = console.choose(
        "Would you like to filter the data by month, day, both or not at all? (Please type \"none\" for no time filter.)\n",
        "Your input was not recognized. Please enter your choice correctly (\"month\", \"day\", \"both\" or \"none\"):\n",
        &["month", "day", "both", "none"],
    )?;

    let mut selection = FilterSelection::unfiltered(city);
    if filter_type == "month" || filter_type == "both" {
        selection.month = Some(get_month(console)?);
    }
    if filter_type == "day" || filter_type == "both" {
        selection.day = Some(get_day(console)?);
    }
    debug!("Filters chosen: {:?}", selection);

    let out = console.out();
    writeln!(out, "{RULE}")?;
    writeln!(out, "Filter summary")?;
    writeln!(out, "--------------")?;
    writeln!(out, "City: {}", selection.city.title())?;
    writeln!(out, "Month: {}", selection.describe_month())?;
    writeln!(out, "Day: {}", selection.describe_day())?;
    writeln!(out, "{RULE}")?;

    Ok(selection)
}

fn get_month<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Month> {
    let names: Vec<&str> = Month::all().into_iter().map(|m| m.name()).collect();
    let month = console.choose(
        "Which month? January, February, March, April, May or June?\n",
        "Your input was not recognized. Please check the spelling and enter a valid input (\"January\", \"February\", \"March\", \"April\", \"May\" or \"June\"):\n",
        &names,
    )?;
    Month::parse(&month).ok_or_else(|| anyhow!("unknown month {month}"))
}

fn get_day<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Day> {
    let names: Vec<&str> = Day::all().into_iter().map(|d| d.name()).collect();
    let day = console.choose(
        "Which day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday or Sunday?\n",
        "Your input was not recognized. Please check the spelling and enter a valid input (\"Monday\", \"Tuesday\", \"Wednesday\", \"Thursday\", \"Friday\", \"Saturday\" or \"Sunday\"):\n",
        &names,
    )?;
    Day::parse(&day).ok_or_else(|| anyhow!("unknown day {day}"))
}
