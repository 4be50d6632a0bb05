use serde::{Deserialize, Serialize};
use ts_rs::TS;

use screener_core::models::record::ExportRecord;

use crate::error::ExportError;
use crate::table;

/// File name the download is offered under.
pub const FILE_NAME: &str = "adhd_screening.csv";

pub const MIME_TYPE: &str = "text/csv";

/// A serialized export, ready for the presentation layer to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn csv(record: &ExportRecord) -> Result<Self, ExportError> {
        let text = table::to_csv(record)?;
        Ok(Self {
            file_name: FILE_NAME.to_string(),
            mime_type: MIME_TYPE.to_string(),
            bytes: text.into_bytes(),
        })
    }
}
