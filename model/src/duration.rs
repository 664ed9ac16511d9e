use tripdata::TripData;

#[derive(Clone, Debug, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl DurationStats {
    /// None if there are no trips to average
    pub fn new(data: &TripData) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let total_seconds: f64 = data.trips.iter().map(|t| t.duration_seconds).sum();
        Some(Self {
            total_seconds,
            mean_seconds: total_seconds / data.len() as f64,
        })
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds / 60.0 / 60.0
    }

    pub fn mean_minutes(&self) -> f64 {
        self.mean_seconds / 60.0
    }
}
