use hydromap::models::{DensityRecord, FigureSettings};
use hydromap::processors::{build_frames, unique_keys, CoverageReport, FigureAssembler};
use hydromap::readers::{Source, SourceLoader};
use hydromap::writers::{FigureWriter, OutputFormat};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const TABLE: &str = "name,hydrologic_unit,basin,year,rooms,area_km2,density,log_density
Upper Gila,150400,Gila,750,12,1834.50,0.00654,-5.0297
Salt River,150601,Salt,750,3,920.25,0.00326,-5.7261
Upper Gila,150400,Gila,775,20,1834.5,0.0109,-4.5189
Chaco Wash,140801,San Juan,1600,1,410,0.00243,-6.0174
";

const GEOMETRY: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"hydrologic_unit": "150400"},
     "geometry": {"type": "Polygon", "coordinates": [[[-109, 33], [-108, 33], [-108, 34], [-109, 33]]]}},
    {"type": "Feature", "properties": {"hydrologic_unit": "150601"},
     "geometry": {"type": "Polygon", "coordinates": [[[-111, 33], [-110, 33], [-110, 34], [-111, 33]]]}}
  ]
}"#;

fn write_fixtures(dir: &TempDir) -> (Source, Source) {
    let geometry = dir.path().join("units.geojson");
    let table = dir.path().join("density.csv");
    fs::write(&geometry, GEOMETRY).expect("Failed to write geometry fixture");
    fs::write(&table, TABLE).expect("Failed to write table fixture");
    (Source::Local(geometry), Source::Local(table))
}

#[tokio::test]
async fn test_render_pipeline_to_html() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (geometry, table) = write_fixtures(&temp_dir);

    let loader = SourceLoader::new().unwrap().with_silent(true);
    let inputs = loader.load_inputs(&geometry, &table).await.unwrap();
    assert_eq!(inputs.records.len(), 4);
    assert_eq!(inputs.boundaries.feature_count(), 2);

    let figure = FigureAssembler::new("https://basemap/{z}/{y}/{x}").assemble(inputs);
    assert_eq!(figure.frames.len(), 35);
    assert_eq!(figure.layout.sliders[0].steps.len(), 35);
    assert_eq!(
        figure.data[0].locations,
        vec!["150400", "150601", "140801"]
    );

    let output_path = temp_dir.path().join("out").join("map.html");
    FigureWriter::new()
        .with_format(OutputFormat::Html)
        .write_figure(&figure, "density-map", &output_path)
        .unwrap();

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.contains(r#"<div id="density-map"></div>"#));
    assert!(html.contains("choroplethmapbox"));
}

#[tokio::test]
async fn test_render_pipeline_to_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (geometry, table) = write_fixtures(&temp_dir);

    let loader = SourceLoader::new().unwrap().with_silent(true);
    let inputs = loader.load_inputs(&geometry, &table).await.unwrap();
    let figure =
        FigureAssembler::with_settings("tiles", FigureSettings::default()).assemble(inputs);

    let output_path = temp_dir.path().join("map.json");
    FigureWriter::new()
        .with_format(OutputFormat::Json)
        .write_figure(&figure, "map", &output_path)
        .unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let frames = value["frames"].as_array().unwrap();

    assert_eq!(frames[0]["name"], 750);
    assert_eq!(
        frames[0]["data"][0]["locations"],
        serde_json::json!(["150400", "150601"])
    );
    assert_eq!(frames[34]["name"], 1600);
    assert_eq!(frames[34]["data"][0]["z"], serde_json::json!([-6.0174]));

    let label = frames[0]["data"][0]["text"][0].as_str().unwrap();
    assert!(label.contains("<b>Area: </b> 1834.50 km<sup>2</sup><br>"));
    assert!(label.contains("<b>Log Density:</b> -5.0297<br>"));
    assert_eq!(value["data"][0]["geojson"]["features"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_missing_table_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (geometry, _) = write_fixtures(&temp_dir);

    let loader = SourceLoader::new().unwrap().with_silent(true);
    let result = loader
        .load_inputs(&geometry, &Source::parse("/no/such/density.csv"))
        .await;

    assert!(result.is_err());
}

#[test]
fn test_frame_invariants() {
    let records = vec![
        DensityRecord::new("A", 750, -5.0),
        DensityRecord::new("B", 775, -3.0),
        DensityRecord::new("A", 1600, -1.0),
        DensityRecord::new("C", 1625, -1.0),
    ];

    let frames = build_frames(&records);
    assert_eq!(frames.len(), 35);
    for frame in &frames {
        assert_eq!(frame.metric.len(), frame.locations.len());
        assert_eq!(frame.locations.len(), frame.labels.len());
    }

    assert_eq!(unique_keys(&records), vec!["A", "B", "C"]);

    let report = CoverageReport::new(&records, &frames, None);
    assert_eq!(report.off_cadence_records, 1);
}
