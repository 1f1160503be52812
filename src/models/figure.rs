//! Plotly figure document: the `data`, `layout` and `frames` handed to
//! `Plotly.newPlot` and `Plotly.addFrames`.

use serde::Serialize;
use serde_json::Value;

use super::frame::{AnimationOptions, Frame, SliderStep, Transition};

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: Layout,
    pub frames: Vec<FigureFrame>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub geojson: Value,
    pub featureidkey: String,
    pub locations: Vec<String>,
    pub z: Vec<Option<f64>>,
    pub zmin: f64,
    pub zmax: f64,
    pub text: Vec<String>,
    pub hoverinfo: String,
    pub hoverlabel: HoverLabel,
    pub colorscale: String,
    pub marker: Marker,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize)]
pub struct HoverLabel {
    pub align: String,
    pub namelength: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub opacity: f64,
    pub line: MarkerLine,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerLine {
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub orientation: String,
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub xref: String,
    pub yref: String,
    pub xpad: f64,
    pub ypad: f64,
    pub len: f64,
    pub thickness: f64,
    pub tick0: f64,
    pub dtick: f64,
    pub title: ColorBarTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBarTitle {
    pub text: String,
    pub font: Font,
    pub side: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub color: String,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub dragmode: String,
    pub mapbox: Mapbox,
    pub updatemenus: Vec<UpdateMenu>,
    pub sliders: Vec<Slider>,
    pub margin: Margin,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mapbox {
    pub style: String,
    pub layers: Vec<MapLayer>,
    pub center: MapCenter,
    pub zoom: f64,
}

/// Raster tile layer drawn beneath the choropleth.
#[derive(Debug, Clone, Serialize)]
pub struct MapLayer {
    pub sourcetype: String,
    pub source: Vec<String>,
    pub below: String,
}

impl MapLayer {
    pub fn raster(url: &str) -> Self {
        Self {
            sourcetype: "raster".to_string(),
            source: vec![url.to_string()],
            below: "traces".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapCenter {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub showactive: bool,
    pub direction: String,
    #[serde(rename = "type")]
    pub menu_type: String,
    pub pad: Pad,
    pub buttons: Vec<Button>,
}

/// `args.0` is the frame selector: `null` plays everything, `[null]` stops.
#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub method: String,
    pub args: (Value, AnimationOptions),
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Pad {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Slider {
    pub active: usize,
    pub steps: Vec<SliderStep>,
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub len: f64,
    pub pad: Pad,
    pub currentvalue: CurrentValue,
    pub transition: Transition,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentValue {
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub r: u32,
    pub t: u32,
    pub b: u32,
    pub l: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureFrame {
    pub data: Vec<FrameTrace>,
    pub name: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameTrace {
    pub z: Vec<Option<f64>>,
    pub locations: Vec<Option<String>>,
    pub text: Vec<String>,
}

impl From<&Frame> for FigureFrame {
    fn from(frame: &Frame) -> Self {
        Self {
            data: vec![FrameTrace {
                z: frame.metric.clone(),
                locations: frame.locations.clone(),
                text: frame.labels.clone(),
            }],
            name: frame.year,
        }
    }
}
