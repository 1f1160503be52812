use crate::error::Result;
use crate::models::DensityRecord;
use crate::readers::{BoundaryCollection, RecordReader, Source};
use crate::utils::ProgressReporter;

const USER_AGENT: &str = concat!("hydromap/", env!("CARGO_PKG_VERSION"));

/// Both inputs of a map, loaded.
#[derive(Debug, Clone)]
pub struct MapInputs {
    pub boundaries: BoundaryCollection,
    pub records: Vec<DensityRecord>,
}

pub struct SourceLoader {
    client: reqwest::Client,
    silent: bool,
}

impl SourceLoader {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            silent: false,
        })
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Load the boundary document, then the table.
    ///
    /// The table fetch starts only after the geometry has loaded. The first
    /// failure from either step is returned and nothing further runs.
    pub async fn load_inputs(&self, geometry: &Source, table: &Source) -> Result<MapInputs> {
        let boundaries = self.load_boundaries(geometry).await?;
        let records = self.load_records(table).await?;

        Ok(MapInputs {
            boundaries,
            records,
        })
    }

    pub async fn load_boundaries(&self, source: &Source) -> Result<BoundaryCollection> {
        let progress =
            ProgressReporter::new_spinner(&format!("Fetching geometry {}", source), self.silent);

        let text = source.fetch_text(&self.client).await?;
        let boundaries = BoundaryCollection::parse(&text)?;

        progress.finish_with_message(&format!(
            "Loaded {} boundary features",
            boundaries.feature_count()
        ));
        tracing::info!(
            source = %source,
            features = boundaries.feature_count(),
            "Loaded boundary geometry"
        );

        Ok(boundaries)
    }

    pub async fn load_records(&self, source: &Source) -> Result<Vec<DensityRecord>> {
        let progress =
            ProgressReporter::new_spinner(&format!("Fetching table {}", source), self.silent);

        let text = source.fetch_text(&self.client).await?;
        progress.set_message("Parsing rows...");

        let records = tokio::task::spawn_blocking(move || {
            RecordReader::new().read_records_from_str(&text)
        })
        .await??;

        progress.finish_with_message(&format!("Loaded {} rows", records.len()));
        tracing::info!(source = %source, rows = records.len(), "Loaded density table");

        Ok(records)
    }
}
