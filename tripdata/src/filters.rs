use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::City;

/// The months covered by the bikeshare data
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    pub fn all() -> Vec<Self> {
        use Month::*;
        vec![January, February, March, April, May, June]
    }

    /// 1-based, matching chrono's `month()`
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn title(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }

    /// The lower-case name a user types in
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    pub fn parse(x: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.name() == x)
    }
}

/// Any calendar month, even outside the six that can be filtered on
pub fn month_title(number: u32) -> Option<&'static str> {
    MONTH_NAMES.get((number as usize).checked_sub(1)?).copied()
}

impl Day {
    pub fn all() -> Vec<Self> {
        use Day::*;
        vec![
            Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
        ]
    }

    pub fn title(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    pub fn parse(x: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.name() == x)
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

/// What the user asked to look at. `None` means no filter on that dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Day>,
}

impl FilterSelection {
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub fn matches(&self, time: &NaiveDateTime) -> bool {
        if let Some(month) = self.month {
            if time.month() != month.number() {
                return false;
            }
        }
        if let Some(day) = self.day {
            if Day::from(time.weekday()) != day {
                return false;
            }
        }
        true
    }

    pub fn describe_month(&self) -> &'static str {
        self.month.map(|m| m.title()).unwrap_or("All")
    }

    pub fn describe_day(&self) -> &'static str {
        self.day.map(|d| d.title()).unwrap_or("All")
    }
}
