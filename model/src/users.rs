use abstutil::Counter;

use tripdata::TripData;

use crate::tally::{descending, mode};

#[derive(Clone, Debug, PartialEq)]
pub struct UserStats {
    /// Descending by count. Blank user types aren't counted.
    pub user_types: Vec<(String, usize)>,
    /// None when the city doesn't record gender and birth year at all
    pub demographics: Option<Demographics>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Demographics {
    /// Descending by count. Empty if every trip left gender blank.
    pub genders: Vec<(String, usize)>,
    pub birth_years: Option<BirthYears>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BirthYears {
    pub earliest: u16,
    pub most_recent: u16,
    pub most_common: u16,
}

impl UserStats {
    pub fn new(data: &TripData) -> Self {
        let mut user_types = Counter::new();
        for user_type in data.trips.iter().filter_map(|t| t.user_type.as_ref()) {
            user_types.inc(user_type.clone());
        }
        Self {
            user_types: descending(user_types),
            demographics: if data.has_demographics {
                Some(Demographics::new(data))
            } else {
                None
            },
        }
    }
}

impl Demographics {
    fn new(data: &TripData) -> Self {
        let mut genders = Counter::new();
        let mut years = Counter::new();
        for trip in &data.trips {
            if let Some(ref gender) = trip.gender {
                genders.inc(gender.clone());
            }
            if let Some(year) = trip.birth_year {
                years.inc(year);
            }
        }

        let birth_years = match (
            years.borrow().keys().next(),
            years.borrow().keys().next_back(),
            mode(&years),
        ) {
            (Some(earliest), Some(most_recent), Some((most_common, _))) => Some(BirthYears {
                earliest: *earliest,
                most_recent: *most_recent,
                most_common,
            }),
            _ => None,
        };

        Self {
            genders: descending(genders),
            birth_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_demographics() {
        let input = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-05-01 08:00:00,60,A,B,Subscriber,Male,1985.0
2017-05-01 09:00:00,60,A,B,Subscriber,Female,1992.0
2017-05-01 10:00:00,60,A,B,Customer,,
2017-05-01 11:00:00,60,A,B,,Male,1992.0
2017-05-01 12:00:00,60,A,B,Subscriber,Male,1960.0
";
        let data = TripData::load(input.as_bytes()).unwrap();
        let stats = UserStats::new(&data);
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );

        let demographics = stats.demographics.unwrap();
        assert_eq!(
            demographics.genders,
            vec![("Male".to_string(), 3), ("Female".to_string(), 1)]
        );
        assert_eq!(
            demographics.birth_years,
            Some(BirthYears {
                earliest: 1960,
                most_recent: 1992,
                most_common: 1992,
            })
        );
    }

    #[test]
    fn without_demographic_columns() {
        let input = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-05-01 08:00:00,60,A,B,Subscriber
2017-05-01 09:00:00,60,A,B,Customer
";
        let data = TripData::load(input.as_bytes()).unwrap();
        let stats = UserStats::new(&data);
        assert_eq!(stats.user_types.len(), 2);
        assert_eq!(stats.demographics, None);
    }

    #[test]
    fn all_cells_blank() {
        let input = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-05-01 08:00:00,60,A,B,Customer,,
";
        let data = TripData::load(input.as_bytes()).unwrap();
        let demographics = UserStats::new(&data).demographics.unwrap();
        assert!(demographics.genders.is_empty());
        assert_eq!(demographics.birth_years, None);
    }
}
