#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod cities;
mod filters;
mod trips;

use abstutil::prettyprint_usize;
use anyhow::Result;

pub use cities::{City, DataSources};
pub use filters::{month_title, Day, FilterSelection, Month};
pub use trips::Trip;

/// Bikeshare trips for one city, possibly filtered
#[derive(Clone)]
pub struct TripData {
    pub trips: Vec<Trip>,
    /// Only some cities record gender and birth year. Decided once from the CSV header.
    pub has_demographics: bool,
}

impl TripData {
    pub fn load<R: std::io::Read>(reader: R) -> Result<Self> {
        let (trips, has_demographics) = trips::load(reader)?;
        Ok(Self {
            trips,
            has_demographics,
        })
    }

    /// Reads the selected city's file and keeps only the trips matching the month and day
    pub fn load_filtered(sources: &DataSources, selection: &FilterSelection) -> Result<Self> {
        let path = sources.path(selection.city)?;
        let file = fs_err::File::open(path)?;
        // Adds the path in the error message
        let data = Self::load(std::io::BufReader::new(file))
            .map_err(|err| anyhow!("{}: {err}", path.display()))?;
        info!(
            "Loaded {} trips from {}",
            prettyprint_usize(data.trips.len()),
            path.display()
        );

        let data = data.filter(selection);
        info!(
            "{} trips match month {} and day {}",
            prettyprint_usize(data.trips.len()),
            selection.describe_month(),
            selection.describe_day()
        );
        Ok(data)
    }

    pub fn filter(mut self, selection: &FilterSelection) -> Self {
        self.trips.retain(|trip| selection.matches(&trip.start_time));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2017-03-06 and 2017-03-13 are Mondays
    const TRIPS: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-03-06 08:00:00,2017-03-06 08:10:00,600,A,B,Subscriber
2017-03-07 09:00:00,2017-03-07 09:10:00,600,A,C,Subscriber
2017-03-13 17:00:00,2017-03-13 17:10:00,600,B,C,Customer
2017-05-01 12:00:00,2017-05-01 12:10:00,600,C,A,Customer
2017-05-02 12:00:00,2017-05-02 12:10:00,600,C,B,Subscriber
2017-06-03 12:00:00,2017-06-03 12:10:00,600,C,B,Subscriber
";

    fn data() -> TripData {
        TripData::load(TRIPS.as_bytes()).unwrap()
    }

    #[test]
    fn no_filter_keeps_everything() {
        let filtered = data().filter(&FilterSelection::unfiltered(City::Chicago));
        assert_eq!(filtered.len(), 6);
        assert!(!filtered.has_demographics);
    }

    #[test]
    fn filter_by_month() {
        let filtered = data().filter(&FilterSelection {
            city: City::Chicago,
            month: Some(Month::March),
            day: None,
        });
        assert_eq!(filtered.len(), 3);
        assert!(filtered.trips.iter().all(|t| t.month() == 3));
    }

    #[test]
    fn filter_by_day() {
        let filtered = data().filter(&FilterSelection {
            city: City::Chicago,
            month: None,
            day: Some(Day::Monday),
        });
        assert_eq!(filtered.len(), 3);
        assert!(filtered.trips.iter().all(|t| t.day().title() == "Monday"));
        assert_eq!(
            filtered.trips.iter().map(|t| t.row).collect::<Vec<_>>(),
            vec![0, 2, 3]
        );
    }

    #[test]
    fn filter_by_both() {
        let filtered = data().filter(&FilterSelection {
            city: City::Chicago,
            month: Some(Month::May),
            day: Some(Day::Tuesday),
        });
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.trips[0].row, 4);

        let filtered = data().filter(&FilterSelection {
            city: City::Chicago,
            month: Some(Month::January),
            day: None,
        });
        assert!(filtered.is_empty());
    }

    #[test]
    fn missing_file_names_the_path() {
        let sources = DataSources::in_dir("/definitely/not/here");
        let err = TripData::load_filtered(&sources, &FilterSelection::unfiltered(City::Washington))
            .err()
            .unwrap();
        assert!(err.to_string().contains("washington.csv"), "{err}");
    }
}
