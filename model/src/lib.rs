//! Descriptive statistics over bikeshare trips. Each pass is independent and only reads the
//! trips.

mod duration;
mod stations;
mod tally;
mod time_of_travel;
mod users;

pub use self::duration::DurationStats;
pub use self::stations::StationStats;
pub use self::time_of_travel::TimeStats;
pub use self::users::{BirthYears, Demographics, UserStats};
