use crate::models::{
    AnimationOptions, DensityRecord, FieldDisplay, FigureSettings, Frame, SliderStep,
};
use crate::utils::constants::{FRAME_COUNT, START_YEAR, STEP_DURATION_MS, YEAR_STEP};
use rayon::prelude::*;
use std::collections::HashSet;

/// Evenly spaced animation years: `start`, `start + step`, ... (`count` of them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCadence {
    pub start: i64,
    pub step: i64,
    pub count: usize,
}

impl YearCadence {
    pub fn new(start: i64, step: i64, count: usize) -> Self {
        Self { start, step, count }
    }

    /// Stops early rather than overflowing when a year is out of `i64` range.
    pub fn years(&self) -> Vec<i64> {
        (0..self.count)
            .map_while(|i| {
                let offset = i64::try_from(i).ok()?.checked_mul(self.step)?;
                self.start.checked_add(offset)
            })
            .collect()
    }

    pub fn last_year(&self) -> Option<i64> {
        self.years().last().copied()
    }
}

impl Default for YearCadence {
    fn default() -> Self {
        Self::new(START_YEAR, YEAR_STEP, FRAME_COUNT)
    }
}

impl From<&FigureSettings> for YearCadence {
    fn from(settings: &FigureSettings) -> Self {
        Self::new(settings.start_year, settings.year_step, settings.frame_count)
    }
}

pub struct FrameBuilder {
    cadence: YearCadence,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            cadence: YearCadence::default(),
        }
    }

    pub fn with_cadence(cadence: YearCadence) -> Self {
        Self { cadence }
    }

    pub fn cadence(&self) -> YearCadence {
        self.cadence
    }

    /// One frame per cadence year, ascending. Years with no rows still get
    /// an (empty) frame.
    pub fn build_frames(&self, records: &[DensityRecord]) -> Vec<Frame> {
        let frames: Vec<Frame> = self
            .cadence
            .years()
            .par_iter()
            .map(|&year| make_frame(records, year))
            .collect();

        tracing::debug!(
            frames = frames.len(),
            populated = frames.iter().filter(|f| !f.is_empty()).count(),
            "Built animation frames"
        );

        frames
    }

    pub fn build_steps(&self) -> Vec<SliderStep> {
        self.cadence.years().into_iter().map(build_step).collect()
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the 35 frames for 750..=1600.
pub fn build_frames(records: &[DensityRecord]) -> Vec<Frame> {
    FrameBuilder::new().build_frames(records)
}

/// Project the rows of a single year into a frame, keeping input order.
pub fn make_frame(records: &[DensityRecord], year: i64) -> Frame {
    let selected: Vec<&DensityRecord> = records.iter().filter(|r| r.is_in_year(year)).collect();

    Frame {
        year,
        metric: selected.iter().map(|r| r.log_density_value()).collect(),
        locations: selected.iter().map(|r| r.hydrologic_unit.clone()).collect(),
        labels: selected.iter().map(|r| make_label(r)).collect(),
    }
}

/// Hover text for one row. Values are interpolated verbatim.
pub fn make_label(record: &DensityRecord) -> String {
    format!(
        "<br>\
         <b style='font-size:1.7em; text-decoration: underline;'>{}</b><br>\
         <br>\
         <b>ID: </b> {}<br>\
         <b>Basin: </b> {}<br>\
         <b>Year: </b> {}<br>\
         <b>Count:</b> {}<br>\
         <b>Area: </b> {} km<sup>2</sup><br>\
         <b>Density:</b> {}<br>\
         <b>Log Density:</b> {}<br>",
        FieldDisplay(&record.name),
        FieldDisplay(&record.hydrologic_unit),
        FieldDisplay(&record.basin),
        FieldDisplay(&record.year),
        FieldDisplay(&record.rooms),
        FieldDisplay(&record.area_km2),
        FieldDisplay(&record.density),
        FieldDisplay(&record.log_density),
    )
}

/// Distinct location keys in order of first appearance.
pub fn unique_keys(records: &[DensityRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(DensityRecord::location_key)
        .filter(|key| seen.insert(*key))
        .map(str::to_string)
        .collect()
}

/// Slider step that jumps straight to the frame for `year`.
pub fn build_step(year: i64) -> SliderStep {
    SliderStep {
        label: year.to_string(),
        method: "animate".to_string(),
        args: (vec![year], AnimationOptions::immediate(STEP_DURATION_MS)),
    }
}
