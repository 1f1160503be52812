use crate::models::figure::*;
use crate::models::{AnimationOptions, FigureSettings, Frame, SliderStep, Transition};
use crate::processors::frame_builder::{unique_keys, FrameBuilder, YearCadence};
use crate::readers::MapInputs;
use crate::utils::constants::*;
use serde_json::{json, Value};

/// Turns loaded inputs into the complete animated figure.
pub struct FigureAssembler {
    settings: FigureSettings,
    basemap_url: String,
}

impl FigureAssembler {
    pub fn new(basemap_url: &str) -> Self {
        Self::with_settings(basemap_url, FigureSettings::default())
    }

    pub fn with_settings(basemap_url: &str, settings: FigureSettings) -> Self {
        Self {
            settings,
            basemap_url: basemap_url.to_string(),
        }
    }

    pub fn frame_builder(&self) -> FrameBuilder {
        FrameBuilder::with_cadence(YearCadence::from(&self.settings))
    }

    pub fn assemble(&self, inputs: MapInputs) -> Figure {
        let builder = self.frame_builder();
        let frames = builder.build_frames(&inputs.records);
        let locations = unique_keys(&inputs.records);

        tracing::info!(
            frames = frames.len(),
            locations = locations.len(),
            "Assembling figure"
        );

        let trace = self.choropleth_trace(inputs.boundaries.into_document(), locations, &frames);

        Figure {
            data: vec![trace],
            layout: self.layout(builder.build_steps()),
            frames: frames.iter().map(FigureFrame::from).collect(),
        }
    }

    /// The base trace shows every known unit, seeded with the first frame's values.
    fn choropleth_trace(
        &self,
        geojson: Value,
        locations: Vec<String>,
        frames: &[Frame],
    ) -> ChoroplethTrace {
        let (z, text) = frames
            .first()
            .map(|f| (f.metric.clone(), f.labels.clone()))
            .unwrap_or_default();

        ChoroplethTrace {
            trace_type: "choroplethmapbox".to_string(),
            geojson,
            featureidkey: FEATURE_ID_KEY.to_string(),
            locations,
            z,
            zmin: self.settings.zmin,
            zmax: self.settings.zmax,
            text,
            hoverinfo: "text".to_string(),
            hoverlabel: HoverLabel {
                align: "left".to_string(),
                namelength: 0,
            },
            colorscale: self.settings.colorscale.clone(),
            marker: Marker {
                opacity: self.settings.marker_opacity,
                line: MarkerLine {
                    color: MARKER_LINE_COLOR.to_string(),
                },
            },
            colorbar: colorbar(),
        }
    }

    fn layout(&self, steps: Vec<SliderStep>) -> Layout {
        Layout {
            dragmode: "zoom".to_string(),
            mapbox: Mapbox {
                style: MAPBOX_STYLE.to_string(),
                layers: vec![
                    MapLayer::raster(&self.basemap_url),
                    MapLayer::raster(&self.settings.overlay_url),
                ],
                center: MapCenter {
                    lon: self.settings.center_lon,
                    lat: self.settings.center_lat,
                },
                zoom: self.settings.zoom,
            },
            updatemenus: vec![play_pause_menu()],
            sliders: vec![year_slider(steps)],
            margin: Margin {
                r: 0,
                t: 0,
                b: 0,
                l: 0,
            },
            width: self.settings.width,
            height: self.settings.height,
        }
    }
}

fn colorbar() -> ColorBar {
    ColorBar {
        orientation: "h".to_string(),
        x: 0.0,
        y: 1.02,
        xanchor: "left".to_string(),
        yanchor: "bottom".to_string(),
        xref: "paper".to_string(),
        yref: "paper".to_string(),
        xpad: 0.0,
        ypad: 0.0,
        len: 0.36,
        thickness: 20.0,
        tick0: COLORBAR_TICK0,
        dtick: COLORBAR_DTICK,
        title: ColorBarTitle {
            text: COLORBAR_TITLE.to_string(),
            font: Font {
                color: "black".to_string(),
                size: 20,
            },
            side: "top".to_string(),
        },
    }
}

fn play_pause_menu() -> UpdateMenu {
    UpdateMenu {
        x: 0.1,
        y: 0.0,
        xanchor: "right".to_string(),
        yanchor: "top".to_string(),
        showactive: false,
        direction: "left".to_string(),
        menu_type: "buttons".to_string(),
        pad: Pad {
            t: Some(15),
            r: Some(10),
            b: None,
        },
        buttons: vec![
            Button {
                method: "animate".to_string(),
                args: (
                    Value::Null,
                    AnimationOptions::from_current(PLAY_TRANSITION_MS, PLAY_FRAME_MS),
                ),
                label: "Play".to_string(),
            },
            Button {
                method: "animate".to_string(),
                args: (json!([null]), AnimationOptions::immediate(0)),
                label: "Pause".to_string(),
            },
        ],
    }
}

fn year_slider(steps: Vec<SliderStep>) -> Slider {
    Slider {
        active: 0,
        steps,
        x: 0.1,
        y: 0.0,
        xanchor: "left".to_string(),
        yanchor: "top".to_string(),
        len: 0.89,
        pad: Pad {
            t: Some(15),
            r: None,
            b: Some(0),
        },
        currentvalue: CurrentValue { visible: false },
        transition: Transition::with_easing(SLIDER_TRANSITION_MS, "linear-in-out"),
    }
}
