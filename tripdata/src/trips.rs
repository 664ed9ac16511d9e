use anyhow::Result;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::Day;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    /// Position in the original file, before any filtering
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    /// Blank for some trips in New York City
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<u16>,
}

impl Trip {
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn day(&self) -> Day {
        Day::from(self.start_time.weekday())
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Returns the trips and whether the gender and birth year columns exist
pub fn load<R: std::io::Read>(reader: R) -> Result<(Vec<Trip>, bool)> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?;
    let has_demographics = headers.iter().any(|h| h == "Gender")
        && headers.iter().any(|h| h == "Birth Year");

    let mut trips = Vec::new();
    for (row, rec) in reader.deserialize().enumerate() {
        let rec: Record = rec.map_err(|err| anyhow!("row {row}: {err}"))?;
        trips.push(Trip {
            row,
            start_time: parse_time(row, &rec.start_time)?,
            end_time: match rec.end_time {
                Some(ref x) => Some(parse_time(row, x)?),
                None => None,
            },
            duration_seconds: rec.trip_duration,
            start_station: rec.start_station,
            end_station: rec.end_station,
            user_type: rec.user_type,
            gender: rec.gender,
            birth_year: match rec.birth_year {
                Some(x) => Some(parse_year(row, x)?),
                None => None,
            },
        });
    }
    Ok((trips, has_demographics))
}

fn parse_time(row: usize, x: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(x, TIME_FORMAT).map_err(|err| anyhow!("row {row}: {x}: {err}"))
}

// Stored as a float in the raw data, because of blank cells
fn parse_year(row: usize, x: f64) -> Result<u16> {
    let year = x.round();
    if !(0.0..=u16::MAX as f64).contains(&year) {
        bail!("row {row}: bad birth year {x}");
    }
    Ok(year as u16)
}

#[derive(Deserialize)]
struct Record {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender")]
    gender: Option<String>,
    #[serde(rename = "Birth Year")]
    birth_year: Option<f64>,
}
