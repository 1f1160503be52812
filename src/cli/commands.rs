use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::FigureSettings;
use crate::processors::{CoverageReport, FigureAssembler, FrameBuilder, YearCadence};
use crate::readers::SourceLoader;
use crate::utils::generate_default_output_filename;
use crate::writers::FigureWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let loader = SourceLoader::new()?.with_silent(cli.quiet);

    match cli.command {
        Commands::Render {
            geometry,
            table,
            basemap,
            div_id,
            output_file,
            format,
            config,
            pretty,
        } => {
            let settings = FigureSettings::load(config.as_deref())?;
            let output_file =
                output_file.unwrap_or_else(|| generate_default_output_filename(format.extension()));

            println!("Rendering density map...");
            println!("Geometry: {}", geometry);
            println!("Table: {}", table);
            println!("Output file: {}", output_file.display());

            let inputs = loader.load_inputs(&geometry, &table).await?;

            let assembler = FigureAssembler::with_settings(&basemap, settings);
            let figure = assembler.assemble(inputs);

            FigureWriter::new()
                .with_format(format)
                .with_pretty(pretty)
                .write_figure(&figure, &div_id, &output_file)?;

            println!(
                "Wrote {} frames to {}",
                figure.frames.len(),
                output_file.display()
            );
        }

        Commands::Frames {
            table,
            output_file,
            config,
        } => {
            let settings = FigureSettings::load(config.as_deref())?;
            let records = loader.load_records(&table).await?;

            let frames =
                FrameBuilder::with_cadence(YearCadence::from(&settings)).build_frames(&records);

            FigureWriter::new()
                .with_pretty(true)
                .write_frames(&frames, &output_file)?;

            println!(
                "Wrote {} frames ({} rows) to {}",
                frames.len(),
                frames.iter().map(|f| f.len()).sum::<usize>(),
                output_file.display()
            );
        }

        Commands::Info { table, geometry } => {
            let boundaries = match geometry {
                Some(ref source) => Some(loader.load_boundaries(source).await?),
                None => None,
            };
            let records = loader.load_records(&table).await?;

            let frames = FrameBuilder::new().build_frames(&records);
            let report = CoverageReport::new(&records, &frames, boundaries.as_ref());

            println!("\n{}", report.summary());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // A subscriber may already be installed (tests, embedding); keep it.
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }

    Ok(())
}
