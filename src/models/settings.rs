use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::utils::constants::*;

/// View and cadence settings for the rendered figure.
///
/// Defaults reproduce the stock map. Overrides come from an optional settings
/// file, then from `HYDROMAP_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_color_range"))]
pub struct FigureSettings {
    #[validate(range(min = -180.0, max = 180.0))]
    pub center_lon: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub center_lat: f64,

    #[validate(range(min = 0.0, max = 22.0))]
    pub zoom: f64,

    #[validate(range(min = 1))]
    pub width: u32,

    #[validate(range(min = 1))]
    pub height: u32,

    pub zmin: f64,
    pub zmax: f64,

    #[validate(length(min = 1))]
    pub colorscale: String,

    #[validate(range(min = 0.0, max = 1.0))]
    pub marker_opacity: f64,

    #[validate(length(min = 1))]
    pub overlay_url: String,

    #[validate(range(min = MIN_START_YEAR, max = MAX_START_YEAR))]
    pub start_year: i64,

    #[validate(range(min = 1, max = MAX_YEAR_STEP))]
    pub year_step: i64,

    #[validate(range(min = 1, max = MAX_FRAME_COUNT))]
    pub frame_count: usize,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            center_lon: DEFAULT_CENTER_LON,
            center_lat: DEFAULT_CENTER_LAT,
            zoom: DEFAULT_ZOOM,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zmin: DEFAULT_ZMIN,
            zmax: DEFAULT_ZMAX,
            colorscale: DEFAULT_COLORSCALE.to_string(),
            marker_opacity: DEFAULT_MARKER_OPACITY,
            overlay_url: ADMINISTRATIVE_OVERLAY_URL.to_string(),
            start_year: START_YEAR,
            year_step: YEAR_STEP,
            frame_count: FRAME_COUNT,
        }
    }
}

impl FigureSettings {
    /// Load settings from defaults, an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let settings: FigureSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;

        tracing::debug!(?settings, "Loaded figure settings");
        Ok(settings)
    }
}

fn validate_color_range(settings: &FigureSettings) -> std::result::Result<(), ValidationError> {
    if settings.zmin < settings.zmax {
        Ok(())
    } else {
        Err(ValidationError::new("zmin_not_below_zmax"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults_are_valid() {
        let settings = FigureSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.width, 900);
        assert_eq!(settings.height, 550);
        assert_eq!(settings.frame_count, 35);
    }

    #[test]
    fn test_inverted_color_range_rejected() {
        let settings = FigureSettings {
            zmin: 3.0,
            zmax: -12.0,
            ..FigureSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cadence_bounds() {
        let huge_step = FigureSettings {
            year_step: i64::MAX,
            ..FigureSettings::default()
        };
        assert!(huge_step.validate().is_err());

        let huge_count = FigureSettings {
            frame_count: 10_000_000_000_000,
            ..FigureSettings::default()
        };
        assert!(huge_count.validate().is_err());

        let far_start = FigureSettings {
            start_year: i64::MIN,
            ..FigureSettings::default()
        };
        assert!(far_start.validate().is_err());

        let widest = FigureSettings {
            start_year: MAX_START_YEAR,
            year_step: MAX_YEAR_STEP,
            frame_count: MAX_FRAME_COUNT,
            ..FigureSettings::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "zoom = 6.0")?;
        writeln!(file, "width = 1200")?;

        let settings = FigureSettings::load(Some(file.path()))?;
        assert_eq!(settings.zoom, 6.0);
        assert_eq!(settings.width, 1200);
        assert_eq!(settings.height, DEFAULT_HEIGHT);
        assert_eq!(settings.colorscale, "Viridis");

        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_file_values() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "zoom = 40.0")?;

        assert!(FigureSettings::load(Some(file.path())).is_err());
        Ok(())
    }

    #[test]
    fn test_environment_overrides_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "marker_opacity = 0.3")?;

        std::env::set_var("HYDROMAP_MARKER_OPACITY", "0.8");
        let loaded = FigureSettings::load(Some(file.path()));
        std::env::remove_var("HYDROMAP_MARKER_OPACITY");

        assert_eq!(loaded?.marker_opacity, 0.8);
        Ok(())
    }
}
