use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::MISSING_VALUE;

/// One row of the density table, kept as the raw cell text.
///
/// `None` means the column is absent from the table; a present but blank cell
/// is `Some("")`. Numeric views (`year_value`, `log_density_value`) are parsed
/// on demand, so labels always show the cell exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DensityRecord {
    pub name: Option<String>,
    pub hydrologic_unit: Option<String>,
    pub basin: Option<String>,
    pub year: Option<String>,
    pub rooms: Option<String>,
    pub area_km2: Option<String>,
    pub density: Option<String>,
    pub log_density: Option<String>,
}

impl DensityRecord {
    pub fn new(hydrologic_unit: &str, year: i64, log_density: f64) -> Self {
        Self {
            hydrologic_unit: Some(hydrologic_unit.to_string()),
            year: Some(year.to_string()),
            log_density: Some(log_density.to_string()),
            ..Self::default()
        }
    }

    pub fn with_details(
        mut self,
        name: &str,
        basin: &str,
        rooms: &str,
        area_km2: &str,
        density: &str,
    ) -> Self {
        self.name = Some(name.to_string());
        self.basin = Some(basin.to_string());
        self.rooms = Some(rooms.to_string());
        self.area_km2 = Some(area_km2.to_string());
        self.density = Some(density.to_string());
        self
    }

    pub fn with_log_density(mut self, log_density: &str) -> Self {
        self.log_density = Some(log_density.to_string());
        self
    }

    pub fn year_value(&self) -> Option<f64> {
        parse_number(self.year.as_deref())
    }

    pub fn log_density_value(&self) -> Option<f64> {
        parse_number(self.log_density.as_deref())
    }

    /// Numeric comparison, so `750`, `750.0` and ` 750 ` all match 750.
    pub fn is_in_year(&self, year: i64) -> bool {
        self.year_value() == Some(year as f64)
    }

    pub fn location_key(&self) -> Option<&str> {
        self.hydrologic_unit.as_deref()
    }
}

fn parse_number(text: Option<&str>) -> Option<f64> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

/// Displays an optional field as-is, or the missing marker when absent.
pub struct FieldDisplay<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for FieldDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str(MISSING_VALUE),
        }
    }
}
