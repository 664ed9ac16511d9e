use abstutil::Counter;

use tripdata::{month_title, Day, TripData};

use crate::tally::mode;

/// The most frequent times of travel
#[derive(Clone, Debug, PartialEq)]
pub struct TimeStats {
    /// 1-based
    pub month: u32,
    pub day: Day,
    pub hour: u32,
}

impl TimeStats {
    /// None if there are no trips
    pub fn new(data: &TripData) -> Option<Self> {
        let mut months = Counter::new();
        let mut days = Counter::new();
        let mut hours = Counter::new();
        for trip in &data.trips {
            months.inc(trip.month());
            days.inc(trip.day());
            hours.inc(trip.hour());
        }
        Some(Self {
            month: mode(&months)?.0,
            day: mode(&days)?.0,
            hour: mode(&hours)?.0,
        })
    }

    pub fn month_title(&self) -> &'static str {
        month_title(self.month).unwrap_or("Unknown")
    }
}
