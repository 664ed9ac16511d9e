use std::io::{BufRead, Write};

use anyhow::Result;

use tripdata::{month_title, Trip, TripData};

use crate::console::Console;

const PAGE_SIZE: usize = 5;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shows the trips five at a time, asking after every block whether to keep going
pub fn display_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data: &TripData,
) -> Result<()> {
    let mut start = 0;
    loop {
        let end = (start + PAGE_SIZE).min(data.len());
        if data.is_empty() {
            writeln!(console.out(), "No rows to display.")?;
        } else {
            let rows = data.trips[start..end].iter().map(|t| row(data, t)).collect();
            writeln!(console.out(), "{}", render_table(&headers(data), rows))?;
        }
        start = end;

        let more = console
            .confirm("\nWould you like to see the next five rows? Enter \"yes\" or \"no\".\n")?;
        if !more {
            return Ok(());
        }
        if start >= data.len() {
            writeln!(console.out(), "\nNo more rows.")?;
            return Ok(());
        }
    }
}

fn headers(data: &TripData) -> Vec<&'static str> {
    let mut headers = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if data.has_demographics {
        headers.push("Gender");
        headers.push("Birth Year");
    }
    headers.push("month");
    headers.push("day_of_week");
    headers
}

fn row(data: &TripData, trip: &Trip) -> Vec<String> {
    let mut cells = vec![
        trip.row.to_string(),
        trip.start_time.format(TIME_FORMAT).to_string(),
        trip.end_time
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_default(),
        trip.duration_seconds.to_string(),
        trip.start_station.clone(),
        trip.end_station.clone(),
        trip.user_type.clone().unwrap_or_default(),
    ];
    if data.has_demographics {
        cells.push(trip.gender.clone().unwrap_or_default());
        cells.push(trip.birth_year.map(|x| x.to_string()).unwrap_or_default());
    }
    cells.push(month_title(trip.month()).unwrap_or_default().to_string());
    cells.push(trip.day().title().to_string());
    cells
}

// Left-aligns every column to its widest cell
fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut width_per_col: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (cell, width) in row.iter().zip(width_per_col.iter_mut()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![pad_row(headers.iter().copied(), &width_per_col)];
    for row in &rows {
        lines.push(pad_row(row.iter().map(|x| x.as_str()), &width_per_col));
    }
    lines.join("\n")
}

fn pad_row<'a, I: Iterator<Item = &'a str>>(cells: I, width_per_col: &[usize]) -> String {
    cells
        .zip(width_per_col)
        .map(|(cell, &width)| format!("{cell:width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
