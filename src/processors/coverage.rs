use crate::models::{DensityRecord, Frame};
use crate::processors::frame_builder::unique_keys;
use crate::readers::BoundaryCollection;
use std::collections::HashSet;

/// How well a table lines up with the animation years and the boundary file.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub total_records: usize,
    pub distinct_keys: usize,
    pub rows_per_year: Vec<(i64, usize)>,
    pub off_cadence_records: usize,
    pub unmatched_keys: Option<Vec<String>>,
}

impl CoverageReport {
    pub fn new(
        records: &[DensityRecord],
        frames: &[Frame],
        boundaries: Option<&BoundaryCollection>,
    ) -> Self {
        let keys = unique_keys(records);
        let rows_per_year: Vec<(i64, usize)> = frames.iter().map(|f| (f.year, f.len())).collect();
        let framed: usize = rows_per_year.iter().map(|(_, n)| n).sum();

        let unmatched_keys = boundaries.map(|b| {
            let feature_keys: HashSet<String> = b.feature_keys().into_iter().collect();
            keys.iter()
                .filter(|k| !feature_keys.contains(*k))
                .cloned()
                .collect()
        });

        Self {
            total_records: records.len(),
            distinct_keys: keys.len(),
            rows_per_year,
            off_cadence_records: records.len() - framed,
            unmatched_keys,
        }
    }

    pub fn empty_years(&self) -> Vec<i64> {
        self.rows_per_year
            .iter()
            .filter(|(_, n)| *n == 0)
            .map(|(year, _)| *year)
            .collect()
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Coverage Report ===\n");
        summary.push_str(&format!("Total Records: {}\n", self.total_records));
        summary.push_str(&format!("Distinct Hydrologic Units: {}\n", self.distinct_keys));
        summary.push_str(&format!(
            "Records Outside Animation Years: {}\n",
            self.off_cadence_records
        ));

        summary.push_str("\nRecords per Year:\n");
        for (year, count) in &self.rows_per_year {
            summary.push_str(&format!("  {:>5}: {}\n", year, count));
        }

        let empty = self.empty_years();
        if !empty.is_empty() {
            summary.push_str(&format!("\nEmpty Frames: {}\n", empty.len()));
        }

        if let Some(ref unmatched) = self.unmatched_keys {
            summary.push_str(&format!(
                "\nUnits Without Boundary Feature: {}\n",
                unmatched.len()
            ));
            for key in unmatched.iter().take(10) {
                summary.push_str(&format!("  - {}\n", key));
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::build_frames;
    use serde_json::json;

    #[test]
    fn test_coverage_counts() {
        let records = vec![
            DensityRecord::new("A", 750, -5.0),
            DensityRecord::new("B", 750, -4.0),
            DensityRecord::new("A", 775, -3.0),
            DensityRecord::new("C", 760, -3.0),
        ];
        let frames = build_frames(&records);
        let report = CoverageReport::new(&records, &frames, None);

        assert_eq!(report.total_records, 4);
        assert_eq!(report.distinct_keys, 3);
        assert_eq!(report.off_cadence_records, 1);
        assert_eq!(report.rows_per_year[0], (750, 2));
        assert_eq!(report.rows_per_year[1], (775, 1));
        assert_eq!(report.empty_years().len(), 33);
        assert!(report.unmatched_keys.is_none());

        let summary = report.summary();
        assert!(summary.contains("Distinct Hydrologic Units: 3"));
        assert!(summary.contains("Empty Frames: 33"));
    }

    #[test]
    fn test_unmatched_keys_against_boundaries() {
        let records = vec![
            DensityRecord::new("A", 750, -5.0),
            DensityRecord::new("Z", 750, -4.0),
        ];
        let boundaries = BoundaryCollection::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"hydrologic_unit": "A"}, "geometry": null}
            ]
        }));

        let frames = build_frames(&records);
        let report = CoverageReport::new(&records, &frames, Some(&boundaries));

        assert_eq!(report.unmatched_keys, Some(vec!["Z".to_string()]));
        assert!(report.summary().contains("Units Without Boundary Feature: 1"));
    }
}
