use std::collections::HashMap;

/// Geographic coordinates resolved from a city name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One day's weather summary within a multi-day forecast response.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_percent: u8,
    pub pressure_mm: i32,
    /// Provider condition code, e.g. "overcast". Resolved to a localized
    /// name through [`ForecastBundle::conditions`].
    pub condition: String,
}

/// The weather gateway's full answer: the requested days plus the
/// metadata needed to render them.
#[derive(Debug, Clone)]
pub struct ForecastBundle {
    /// Current-observation timestamp as the gateway reports it
    /// (contains an ISO `YYYY-MM-DD` date).
    pub now_dt: String,
    /// Normal pressure for the location, mmHg.
    pub reference_pressure_mm: i32,
    /// Localization table: condition code -> localized condition name.
    pub conditions: HashMap<String, String>,
    /// Forecast days in chronological order; never empty for a
    /// successful response.
    pub days: Vec<ForecastDay>,
}

impl ForecastBundle {
    pub fn condition_name(&self, code: &str) -> Option<&str> {
        self.conditions.get(code).map(|s| s.as_str())
    }
}
