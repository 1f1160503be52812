/// Frame cadence
pub const START_YEAR: i64 = 750;
pub const YEAR_STEP: i64 = 25;
pub const FRAME_COUNT: usize = 35;

// Cadence limits accepted from settings.
pub const MIN_START_YEAR: i64 = -100_000;
pub const MAX_START_YEAR: i64 = 100_000;
pub const MAX_YEAR_STEP: i64 = 10_000;
pub const MAX_FRAME_COUNT: usize = 10_000;

/// Join key between table rows and boundary features
pub const LOCATION_FIELD: &str = "hydrologic_unit";
pub const FEATURE_ID_KEY: &str = "properties.hydrologic_unit";

/// Color mapping
pub const DEFAULT_ZMIN: f64 = -12.0;
pub const DEFAULT_ZMAX: f64 = 3.0;
pub const DEFAULT_COLORSCALE: &str = "Viridis";
pub const COLORBAR_TICK0: f64 = -11.5;
pub const COLORBAR_DTICK: f64 = 3.5;
pub const COLORBAR_TITLE: &str = "Log Density";

/// Marker styling
pub const DEFAULT_MARKER_OPACITY: f64 = 0.45;
pub const MARKER_LINE_COLOR: &str = "#878e99";

/// Map view
pub const DEFAULT_CENTER_LON: f64 = -107.82422;
pub const DEFAULT_CENTER_LAT: f64 = 34.78155;
pub const DEFAULT_ZOOM: f64 = 4.6;
pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 550;
pub const MAPBOX_STYLE: &str = "white-bg";
pub const ADMINISTRATIVE_OVERLAY_URL: &str = "https://server.arcgisonline.com/arcgis/rest/services/Reference/World_Reference_Overlay/MapServer/tile/{z}/{y}/{x}";

/// Animation timings (milliseconds)
pub const STEP_DURATION_MS: u32 = 300;
pub const PLAY_TRANSITION_MS: u32 = 200;
pub const PLAY_FRAME_MS: u32 = 400;
pub const SLIDER_TRANSITION_MS: u32 = 200;

/// Rendered in hover labels for absent values
pub const MISSING_VALUE: &str = "undefined";

/// Environment prefix for settings overrides
pub const ENV_PREFIX: &str = "HYDROMAP";

/// Plotly bundle loaded by the HTML writer
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Output formats
pub const FORMAT_HTML: &str = "html";
pub const FORMAT_JSON: &str = "json";
