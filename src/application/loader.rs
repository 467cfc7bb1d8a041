use crate::domain::error::VerbiError;
use crate::domain::model::VerbRecord;
use crate::domain::traits::DatasetSource;
use tracing::{debug, info};

/// Read the dataset from `source` and deserialize every record, in stored order
pub fn load_dataset(source: &dyn DatasetSource) -> Result<Vec<VerbRecord>, VerbiError> {
    let bytes = source.read()?;
    debug!(source = %source.name(), bytes = bytes.len(), "dataset read");

    let records = parse_records(&bytes)?;
    info!(source = %source.name(), records = records.len(), "dataset loaded");
    Ok(records)
}

/// A top-level `null` is an empty dataset
pub fn parse_records(bytes: &[u8]) -> Result<Vec<VerbRecord>, VerbiError> {
    let records: Option<Vec<VerbRecord>> = serde_json::from_slice(bytes)?;
    Ok(records.unwrap_or_default())
}
