use abstutil::Counter;

use tripdata::TripData;

use crate::tally::mode;

/// The most popular stations and trip, with how many times each occurs
#[derive(Clone, Debug, PartialEq)]
pub struct StationStats {
    pub start_station: (String, usize),
    pub end_station: (String, usize),
    /// (start station, end station)
    pub trip: ((String, String), usize),
}

impl StationStats {
    pub fn new(data: &TripData) -> Option<Self> {
        let mut starts = Counter::new();
        let mut ends = Counter::new();
        let mut pairs = Counter::new();
        for trip in &data.trips {
            starts.inc(trip.start_station.as_str());
            ends.inc(trip.end_station.as_str());
            pairs.inc((trip.start_station.as_str(), trip.end_station.as_str()));
        }

        let (start, start_count) = mode(&starts)?;
        let (end, end_count) = mode(&ends)?;
        let ((from, to), trip_count) = mode(&pairs)?;
        Some(Self {
            start_station: (start.to_string(), start_count),
            end_station: (end.to_string(), end_count),
            trip: ((from.to_string(), to.to_string()), trip_count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popular_stations() {
        let input = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-05-01 08:00:00,60,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Customer
2017-05-01 09:00:00,60,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Customer
2017-05-01 10:00:00,60,Clinton St & Washington Blvd,Streeter Dr & Grand Ave,Subscriber
2017-05-01 11:00:00,60,Clinton St & Washington Blvd,Streeter Dr & Grand Ave,Subscriber
2017-05-01 12:00:00,60,Clinton St & Washington Blvd,Lake Shore Dr & Monroe St,Subscriber
";
        let data = TripData::load(input.as_bytes()).unwrap();
        let stats = StationStats::new(&data).unwrap();
        assert_eq!(
            stats.start_station,
            ("Clinton St & Washington Blvd".to_string(), 3)
        );
        assert_eq!(
            stats.end_station,
            ("Lake Shore Dr & Monroe St".to_string(), 3)
        );
        // Two pairs occur twice; the first in key order wins
        assert_eq!(
            stats.trip,
            (
                (
                    "Clinton St & Washington Blvd".to_string(),
                    "Streeter Dr & Grand Ave".to_string()
                ),
                2
            )
        );
    }
}
