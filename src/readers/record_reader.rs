use crate::error::Result;
use crate::models::DensityRecord;
use csv::StringRecord;
use std::io::Read;

pub struct RecordReader {
    delimiter: u8,
}

impl RecordReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read density records from CSV text with a header row
    pub fn read_records_from_str(&self, text: &str) -> Result<Vec<DensityRecord>> {
        self.read_records(text.as_bytes())
    }

    /// Read density records from any CSV byte stream, in file order
    pub fn read_records<R: Read>(&self, reader: R) -> Result<Vec<DensityRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnIndex::new(csv_reader.headers()?);

        let mut records = Vec::new();
        for row in csv_reader.records() {
            records.push(columns.record(&row?));
        }

        Ok(records)
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Header positions of the known columns; `None` when a column is absent.
struct ColumnIndex {
    name: Option<usize>,
    hydrologic_unit: Option<usize>,
    basin: Option<usize>,
    year: Option<usize>,
    rooms: Option<usize>,
    area_km2: Option<usize>,
    density: Option<usize>,
    log_density: Option<usize>,
}

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let find = |column: &str| headers.iter().position(|h| h == column);
        Self {
            name: find("name"),
            hydrologic_unit: find("hydrologic_unit"),
            basin: find("basin"),
            year: find("year"),
            rooms: find("rooms"),
            area_km2: find("area_km2"),
            density: find("density"),
            log_density: find("log_density"),
        }
    }

    /// A present column always yields text; a short row reads as blank.
    fn record(&self, row: &StringRecord) -> DensityRecord {
        let cell = |index: Option<usize>| index.map(|i| row.get(i).unwrap_or("").to_string());
        DensityRecord {
            name: cell(self.name),
            hydrologic_unit: cell(self.hydrologic_unit),
            basin: cell(self.basin),
            year: cell(self.year),
            rooms: cell(self.rooms),
            area_km2: cell(self.area_km2),
            density: cell(self.density),
            log_density: cell(self.log_density),
        }
    }
}
