use crate::readers::Source;
use crate::writers::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hydromap")]
#[command(about = "Animated hydrologic-unit density choropleth builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Suppress progress spinners")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the animated choropleth page (or figure JSON)
    Render {
        #[arg(short, long, help = "GeoJSON boundary file (URL or path)")]
        geometry: Source,

        #[arg(short, long, help = "Density CSV table (URL or path)")]
        table: Source,

        #[arg(short, long, help = "Base-layer raster tile URL template")]
        basemap: String,

        #[arg(short, long, help = "Element id the map mounts at")]
        div_id: String,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/hydromap-{YYMMDD}.{html|json}]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        #[arg(short, long, help = "Figure settings file (toml, json or yaml)")]
        config: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Dump the per-year frames as JSON
    Frames {
        #[arg(short, long, help = "Density CSV table (URL or path)")]
        table: Source,

        #[arg(short, long, help = "Output JSON file path")]
        output_file: PathBuf,

        #[arg(short, long, help = "Figure settings file (toml, json or yaml)")]
        config: Option<PathBuf>,
    },

    /// Summarise how a table covers the animation years
    Info {
        #[arg(short, long, help = "Density CSV table (URL or path)")]
        table: Source,

        #[arg(short, long, help = "GeoJSON boundary file to check keys against")]
        geometry: Option<Source>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_command() {
        let cli = Cli::try_parse_from([
            "hydromap",
            "render",
            "--geometry",
            "https://example.org/huc.geojson",
            "--table",
            "data/density.csv",
            "--basemap",
            "https://tiles/{z}/{y}/{x}",
            "--div-id",
            "map",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                geometry,
                table,
                div_id,
                format,
                output_file,
                ..
            } => {
                assert!(geometry.is_remote());
                assert!(!table.is_remote());
                assert_eq!(div_id, "map");
                assert_eq!(format, OutputFormat::Json);
                assert!(output_file.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_render_requires_all_inputs() {
        let result = Cli::try_parse_from(["hydromap", "render", "--table", "a.csv"]);
        assert!(result.is_err());
    }
}
