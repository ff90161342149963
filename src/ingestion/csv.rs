//! CSV ingestion implementation.

use std::path::Path;

use crate::error::IngestionResult;
use crate::types::DataSet;

use super::infer::{build_dataset, Cell};

/// Ingest a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Every record must have as many fields as the header row.
/// - Column types are inferred from the values (see [`super::infer`]).
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<DataSet> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut body: Vec<Vec<Cell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        body.push(record.iter().map(Cell::parse).collect());
    }

    Ok(build_dataset(&headers, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataType, Value};

    #[test]
    fn reads_headers_and_infers_types() {
        let data = "Resource Name,Cost,Vendor\nAda,100,Acme\nGrace,,Initech\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let ds = ingest_csv_from_reader(&mut rdr).unwrap();

        assert_eq!(ds.shape(), (2, 3));
        assert_eq!(ds.schema.fields[1].data_type, DataType::Float64);
        assert_eq!(ds.rows[1][1], Value::Null);
        assert_eq!(ds.rows[1][2], Value::Utf8("Initech".to_string()));
    }

    #[test]
    fn ragged_records_are_rejected() {
        let data = "a,b\n1,2\n3\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        assert!(ingest_csv_from_reader(&mut rdr).is_err());
    }
}
